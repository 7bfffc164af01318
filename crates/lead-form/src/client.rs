//! HTTP client for the Lead Store service

use anyhow::{Context, Result};
use async_trait::async_trait;
use lead_common::Lead;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::store::LeadStore;

/// Client for interacting with the Lead Store
pub struct StoreClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct LeadsListResponse {
    leads: Vec<Lead>,
}

#[derive(Debug, Deserialize)]
struct LeadCountResponse {
    count: u64,
}

impl StoreClient {
    /// Create a new store client
    pub fn new(store_url: impl Into<String>) -> Self {
        let base_url: String = store_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Obtain the session's store handle, or `None` if the store is not reachable
    pub async fn connect(store_url: impl Into<String>) -> Option<Self> {
        let client = Self::new(store_url);

        match client.health_check().await {
            Ok(true) => {
                info!("Connected to lead store at {}", client.base_url);
                Some(client)
            }
            Ok(false) => {
                warn!("Lead store at {} returned non-success status", client.base_url);
                None
            }
            Err(e) => {
                warn!("Failed to connect to lead store at {}: {}", client.base_url, e);
                None
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the store is healthy
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl LeadStore for StoreClient {
    async fn submit_lead(&self, lead: &Lead) -> Result<()> {
        let url = format!("{}/api/leads", self.base_url);

        debug!("Submitting lead to store: {}", url);

        let response = self.client.post(&url).json(lead).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Failed to submit lead: {} {}", status, body);
        }

        Ok(())
    }

    async fn get_all_leads(&self) -> Result<Vec<Lead>> {
        let url = format!("{}/api/leads", self.base_url);

        debug!("Fetching leads from store: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch leads: {}", response.status());
        }

        let list: LeadsListResponse = response
            .json()
            .await
            .context("Failed to parse leads response")?;

        Ok(list.leads)
    }

    async fn get_lead_count(&self) -> Result<u64> {
        let url = format!("{}/api/leads/count", self.base_url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch lead count: {}", response.status());
        }

        let count: LeadCountResponse = response
            .json()
            .await
            .context("Failed to parse lead count response")?;

        Ok(count.count)
    }
}
