//! Mock AlfaCRM client for testing
//!
//! Trait-level stand-in for the wire, so the sweep engine and per-status
//! probes can be exercised without HTTP. Configure canned pages and
//! dictionaries via builder methods, then assert on captured requests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::api::{AuthApi, ListingApi};
use super::models::{CustomerFilter, CustomerPage, Lead, LeadStatus, RejectReason, SessionToken};
use crate::error::{ApiError, Result};

/// Mock API client for tests.
///
/// # Example
/// ```ignore
/// let mock = MockAlfaCrmClient::new()
///     .with_pages(vec![page_of_ids(1..=50)])
///     .await;
/// let report = sweep(&mock, &CustomerFilter::default(), &opts).await?;
/// ```
pub struct MockAlfaCrmClient {
    /// Token returned from authenticate
    token: Mutex<SessionToken>,
    /// Canned customer pages; page 1 returns pages[0], and so on
    pages: Mutex<Vec<Vec<Lead>>>,
    /// Server-reported total to echo in every page response
    count: Mutex<i64>,
    /// Lead statuses for lead-status/index
    statuses: Mutex<Vec<LeadStatus>>,
    /// Rejection reasons for lead-reject/index
    lead_rejects: Mutex<Vec<RejectReason>>,
    /// Rejection reasons for customer-reject/index
    customer_rejects: Mutex<Vec<RejectReason>>,
    /// Fail the listing call for this 1-indexed page with HTTP 500
    fail_on_page: Mutex<Option<usize>>,
    /// One-shot error returned by the next call of any kind
    error: Mutex<Option<ApiError>>,
    /// Ordered names of every API call made
    call_log: Mutex<Vec<&'static str>>,
    /// Captured customer listing requests for assertions
    captured: Mutex<Vec<CapturedListing>>,
}

/// One captured `list_customers` invocation.
#[derive(Debug, Clone)]
pub struct CapturedListing {
    pub filter: CustomerFilter,
    pub page: usize,
    pub page_size: usize,
}

impl Default for MockAlfaCrmClient {
    fn default() -> Self {
        Self {
            token: Mutex::new(SessionToken("mock-token".to_string())),
            pages: Mutex::new(Vec::new()),
            count: Mutex::new(0),
            statuses: Mutex::new(Vec::new()),
            lead_rejects: Mutex::new(Vec::new()),
            customer_rejects: Mutex::new(Vec::new()),
            fail_on_page: Mutex::new(None),
            error: Mutex::new(None),
            call_log: Mutex::new(Vec::new()),
            captured: Mutex::new(Vec::new()),
        }
    }
}

impl MockAlfaCrmClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token returned from authenticate.
    pub async fn with_token(self, token: &str) -> Self {
        *self.token.lock().await = SessionToken(token.to_string());
        self
    }

    /// Configure canned customer pages (page 1 first). The echoed `count`
    /// defaults to the total number of configured records.
    pub async fn with_pages(self, pages: Vec<Vec<Lead>>) -> Self {
        let total: i64 = pages.iter().map(|p| p.len() as i64).sum();
        *self.count.lock().await = total;
        *self.pages.lock().await = pages;
        self
    }

    /// Override the server-reported `count`.
    pub async fn with_count(self, count: i64) -> Self {
        *self.count.lock().await = count;
        self
    }

    /// Configure lead statuses.
    pub async fn with_statuses(self, statuses: Vec<LeadStatus>) -> Self {
        *self.statuses.lock().await = statuses;
        self
    }

    /// Configure lead rejection reasons.
    pub async fn with_lead_rejects(self, rejects: Vec<RejectReason>) -> Self {
        *self.lead_rejects.lock().await = rejects;
        self
    }

    /// Configure customer rejection reasons.
    pub async fn with_customer_rejects(self, rejects: Vec<RejectReason>) -> Self {
        *self.customer_rejects.lock().await = rejects;
        self
    }

    /// Fail the listing call for the given 1-indexed page with HTTP 500.
    pub async fn fail_on_page(self, page: usize) -> Self {
        *self.fail_on_page.lock().await = Some(page);
        self
    }

    /// Configure a one-shot error returned by the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Ordered names of every API call made so far.
    pub async fn call_log(&self) -> Vec<&'static str> {
        self.call_log.lock().await.clone()
    }

    /// Captured customer listing requests.
    pub async fn captured_listings(&self) -> Vec<CapturedListing> {
        self.captured.lock().await.clone()
    }

    async fn record(&self, method: &'static str) {
        self.call_log.lock().await.push(method);
    }

    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

/// Build a page of plain active leads with the given ids, in order.
pub fn page_of_ids(ids: std::ops::RangeInclusive<i64>) -> Vec<Lead> {
    ids.map(|id| lead(id, None)).collect()
}

/// Build a single lead with an optional rejection reason.
pub fn lead(id: i64, lead_reject_id: Option<i64>) -> Lead {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("Lead {}", id),
        "lead_reject_id": lead_reject_id,
    }))
    .expect("static lead fixture deserializes")
}

#[async_trait]
impl AuthApi for MockAlfaCrmClient {
    async fn authenticate(&self) -> Result<SessionToken> {
        self.record("authenticate").await;
        self.check_error().await?;
        Ok(self.token.lock().await.clone())
    }
}

#[async_trait]
impl ListingApi for MockAlfaCrmClient {
    async fn list_customers(
        &self,
        filter: &CustomerFilter,
        page: usize,
        page_size: usize,
    ) -> Result<CustomerPage> {
        self.record("list_customers").await;
        self.captured.lock().await.push(CapturedListing {
            filter: filter.clone(),
            page,
            page_size,
        });
        self.check_error().await?;

        if *self.fail_on_page.lock().await == Some(page) {
            return Err(ApiError::Http {
                status: 500,
                endpoint: "customer/index".to_string(),
                body: "Internal Server Error".to_string(),
            }
            .into());
        }

        let pages = self.pages.lock().await;
        let items = pages.get(page - 1).cloned().unwrap_or_default();
        Ok(CustomerPage {
            items,
            count: *self.count.lock().await,
        })
    }

    async fn list_lead_statuses(
        &self,
        _branch_id: Option<i64>,
        _pipeline_id: Option<i64>,
    ) -> Result<Vec<LeadStatus>> {
        self.record("list_lead_statuses").await;
        self.check_error().await?;
        Ok(self.statuses.lock().await.clone())
    }

    async fn list_lead_rejects(&self) -> Result<Vec<RejectReason>> {
        self.record("list_lead_rejects").await;
        self.check_error().await?;
        Ok(self.lead_rejects.lock().await.clone())
    }

    async fn list_customer_rejects(&self) -> Result<Vec<RejectReason>> {
        self.record("list_customer_rejects").await;
        self.check_error().await?;
        Ok(self.customer_rejects.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_empty() {
        let mock = MockAlfaCrmClient::new();

        let page = mock
            .list_customers(&CustomerFilter::default(), 1, 50)
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.count, 0);
    }

    #[tokio::test]
    async fn test_mock_pages_are_one_indexed() {
        let mock = MockAlfaCrmClient::new()
            .with_pages(vec![page_of_ids(1..=2), page_of_ids(3..=4)])
            .await;

        let p1 = mock
            .list_customers(&CustomerFilter::default(), 1, 2)
            .await
            .unwrap();
        assert_eq!(p1.items[0].id, 1);

        let p2 = mock
            .list_customers(&CustomerFilter::default(), 2, 2)
            .await
            .unwrap();
        assert_eq!(p2.items[0].id, 3);

        // Past the configured pages: empty
        let p3 = mock
            .list_customers(&CustomerFilter::default(), 3, 2)
            .await
            .unwrap();
        assert!(p3.items.is_empty());
    }

    #[tokio::test]
    async fn test_mock_captures_filter_and_pagination() {
        let mock = MockAlfaCrmClient::new();
        let filter = CustomerFilter::default().with_reject(7);

        mock.list_customers(&filter, 2, 50).await.unwrap();

        let captured = mock.captured_listings().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].filter.lead_reject_id, Some(7));
        assert_eq!(captured[0].page, 2);
        assert_eq!(captured[0].page_size, 50);
    }

    #[tokio::test]
    async fn test_mock_fail_on_page() {
        let mock = MockAlfaCrmClient::new()
            .with_pages(vec![page_of_ids(1..=5), page_of_ids(6..=10)])
            .await
            .fail_on_page(2)
            .await;

        assert!(mock
            .list_customers(&CustomerFilter::default(), 1, 5)
            .await
            .is_ok());
        let err = mock
            .list_customers(&CustomerFilter::default(), 2, 5)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_mock_one_shot_error() {
        let mock = MockAlfaCrmClient::new()
            .with_error(ApiError::Network("timed out".to_string()))
            .await;

        assert!(mock.list_lead_rejects().await.is_err());
        // Consumed after one use
        assert!(mock.list_lead_rejects().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_call_log_order() {
        let mock = MockAlfaCrmClient::new();

        mock.authenticate().await.unwrap();
        mock.list_customers(&CustomerFilter::default(), 1, 10)
            .await
            .unwrap();

        assert_eq!(mock.call_log().await, vec!["authenticate", "list_customers"]);
    }
}
