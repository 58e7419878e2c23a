use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Verifier already initialized")]
    AlreadyInitialized,

    #[error("Verifier not initialized")]
    NotInitialized,

    #[error("No value on record for subject {0}")]
    UnknownSubject(u64),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Attested value does not satisfy the threshold predicate")]
    ThresholdNotMet,

    #[error("Invalid oracle key: {0}")]
    InvalidKey(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Event log error: {0}")]
    EventLog(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
