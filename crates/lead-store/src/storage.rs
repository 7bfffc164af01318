//! Lead storage backends

use anyhow::{Context, Result};
use async_trait::async_trait;
use lead_common::Lead;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Redis list holding every lead, oldest first
const LEADS_KEY: &str = "leads:all";

/// Append-only lead persistence.
///
/// Leads are returned in submission order. There is no update or delete.
#[async_trait]
pub trait LeadRepository: Send {
    /// Store a new lead
    async fn append_lead(&mut self, lead: &Lead) -> Result<()>;

    /// All stored leads, oldest first
    async fn list_leads(&mut self) -> Result<Vec<Lead>>;

    /// Number of stored leads
    async fn count_leads(&mut self) -> Result<usize>;

    /// Check that the backend is reachable
    async fn health_check(&mut self) -> Result<()>;
}

/// Which [`LeadRepository`] implementation the service runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Redis,
    Memory,
}

#[derive(Debug, Error)]
#[error("Unknown storage backend: {0} (expected redis or memory)")]
pub struct UnknownBackend(String);

impl FromStr for StorageBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(StorageBackend::Redis),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Redis => f.write_str("redis"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

/// Redis-backed lead storage
pub struct RedisStorage {
    conn: ConnectionManager,
}

impl RedisStorage {
    /// Create a new storage instance
    pub async fn new(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)
            .context("Failed to create Redis client")?;

        let conn = ConnectionManager::new(client)
            .await
            .context("Failed to connect to Redis")?;

        info!("Connected to Redis at {}", redis_url);

        Ok(Self { conn })
    }
}

#[async_trait]
impl LeadRepository for RedisStorage {
    async fn append_lead(&mut self, lead: &Lead) -> Result<()> {
        let json = serde_json::to_string(lead)
            .context("Failed to serialize lead")?;

        let len: usize = self.conn.rpush(LEADS_KEY, json).await?;

        debug!("Stored lead from {} ({} total)", lead.business_name, len);
        Ok(())
    }

    async fn list_leads(&mut self) -> Result<Vec<Lead>> {
        let raw: Vec<String> = self.conn.lrange(LEADS_KEY, 0, -1).await?;

        raw.iter()
            .map(|data| {
                serde_json::from_str(data).context("Failed to deserialize lead")
            })
            .collect()
    }

    async fn count_leads(&mut self) -> Result<usize> {
        let count: usize = self.conn.llen(LEADS_KEY).await?;
        Ok(count)
    }

    async fn health_check(&mut self) -> Result<()> {
        let _: String = redis::cmd("PING")
            .query_async(&mut self.conn)
            .await
            .context("Redis health check failed")?;
        Ok(())
    }
}

/// In-process lead storage for tests and local development
#[derive(Debug, Default)]
pub struct MemoryStorage {
    leads: Vec<Lead>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadRepository for MemoryStorage {
    async fn append_lead(&mut self, lead: &Lead) -> Result<()> {
        self.leads.push(lead.clone());
        debug!("Stored lead from {} ({} total)", lead.business_name, self.leads.len());
        Ok(())
    }

    async fn list_leads(&mut self) -> Result<Vec<Lead>> {
        Ok(self.leads.clone())
    }

    async fn count_leads(&mut self) -> Result<usize> {
        Ok(self.leads.len())
    }

    async fn health_check(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Open the configured backend
pub async fn open(backend: StorageBackend, redis_url: &str) -> Result<Box<dyn LeadRepository>> {
    match backend {
        StorageBackend::Redis => Ok(Box::new(RedisStorage::new(redis_url).await?)),
        StorageBackend::Memory => {
            info!("Using in-memory lead storage; leads are lost on restart");
            Ok(Box::new(MemoryStorage::new()))
        }
    }
}
