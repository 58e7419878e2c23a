//! Append-only log of verification events
//!
//! The log is the only mutable shared state in the verifier: appends are
//! serialized, reads return the full log in append order, and records are
//! never mutated or deleted.

use async_trait::async_trait;
use attest_common::{Error, Result, VerificationEvent};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tokio::sync::Mutex;
use tracing::info;

/// Redis list key holding the event log
const EVENT_LOG_KEY: &str = "attest:events";

/// Storage backend for the verification event log
#[async_trait]
pub trait EventLog: Send + Sync {
    /// Append one event
    ///
    /// A successful return means the whole record is in the log; appends
    /// never interleave.
    async fn append(&self, event: &VerificationEvent) -> Result<()>;

    /// Read the full log in append order
    async fn read_all(&self) -> Result<Vec<VerificationEvent>>;
}

/// In-memory event log
///
/// Used by tests and as the fallback when no Redis URL is configured.
/// Events do not survive a restart.
#[derive(Default)]
pub struct MemoryEventLog {
    events: Mutex<Vec<VerificationEvent>>,
}

impl MemoryEventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventLog for MemoryEventLog {
    async fn append(&self, event: &VerificationEvent) -> Result<()> {
        self.events.lock().await.push(event.clone());
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<VerificationEvent>> {
        Ok(self.events.lock().await.clone())
    }
}

/// Event log with Redis backend
///
/// Each event is JSON-encoded and `RPUSH`ed onto a single list. RPUSH is
/// atomic, so concurrent appends land as whole records.
pub struct RedisEventLog {
    conn: Mutex<ConnectionManager>,
    key: String,
}

impl RedisEventLog {
    /// Connect to Redis
    ///
    /// # Arguments
    /// * `redis_url` - Redis connection URL (e.g., "redis://localhost:6379")
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client =
            redis::Client::open(redis_url).map_err(|e| Error::EventLog(e.to_string()))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| Error::EventLog(e.to_string()))?;

        info!("Connected to Redis at {}", redis_url);

        Ok(Self {
            conn: Mutex::new(conn),
            key: EVENT_LOG_KEY.to_string(),
        })
    }

    /// Use a non-default list key (for side-by-side deployments and tests)
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

#[async_trait]
impl EventLog for RedisEventLog {
    async fn append(&self, event: &VerificationEvent) -> Result<()> {
        let json = serde_json::to_string(event)?;

        let mut conn = self.conn.lock().await;
        let _: i64 = conn
            .rpush(&self.key, json)
            .await
            .map_err(|e| Error::EventLog(e.to_string()))?;

        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<VerificationEvent>> {
        let mut conn = self.conn.lock().await;
        let entries: Vec<String> = conn
            .lrange(&self.key, 0, -1)
            .await
            .map_err(|e| Error::EventLog(e.to_string()))?;
        drop(conn);

        entries
            .iter()
            .map(|entry| serde_json::from_str(entry).map_err(Error::from))
            .collect()
    }
}
