//! Listing API trait for the endpoints the probe exercises

use async_trait::async_trait;

use crate::client::models::{CustomerFilter, CustomerPage, LeadStatus, RejectReason};
use crate::error::Result;

/// Listing operations for the AlfaCRM API
///
/// All calls are blocking in the cooperative sense: each one is awaited to
/// completion before the next is issued. Pages are 1-indexed.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// Fetch one page of the customer (lead) listing under a filter.
    ///
    /// A response lacking `items` is returned as an empty page, not an error.
    async fn list_customers(
        &self,
        filter: &CustomerFilter,
        page: usize,
        page_size: usize,
    ) -> Result<CustomerPage>;

    /// List lead statuses, optionally scoped to one branch and pipeline.
    async fn list_lead_statuses(
        &self,
        branch_id: Option<i64>,
        pipeline_id: Option<i64>,
    ) -> Result<Vec<LeadStatus>>;

    /// List lead rejection reasons.
    async fn list_lead_rejects(&self) -> Result<Vec<RejectReason>>;

    /// List customer rejection reasons.
    async fn list_customer_rejects(&self) -> Result<Vec<RejectReason>>;
}
