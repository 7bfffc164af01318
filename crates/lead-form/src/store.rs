//! Call contract of the remote lead store

use anyhow::Result;
use async_trait::async_trait;
use lead_common::Lead;

/// The three operations the lead store exposes.
///
/// `submit_lead` carries no idempotency key: a retry after a lost response
/// can store the same lead twice.
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn submit_lead(&self, lead: &Lead) -> Result<()>;

    /// Every stored lead. No ordering, paging or filtering is promised.
    async fn get_all_leads(&self) -> Result<Vec<Lead>>;

    async fn get_lead_count(&self) -> Result<u64>;
}
