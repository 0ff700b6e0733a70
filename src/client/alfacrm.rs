//! AlfaCRM API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;

use super::api::{AuthApi, ListingApi};
use super::models::{CustomerFilter, CustomerPage, LeadStatus, RejectReason, SessionToken};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Timeout for the large page-size probe.
pub const BULK_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the session token on every non-auth request.
pub const TOKEN_HEADER: &str = "X-ALFACRM-TOKEN";

/// AlfaCRM API client
///
/// Holds one HTTP client handle and at most one session token for the
/// lifetime of the run. Authentication is lazy: the first listing call
/// triggers the login exchange, and there is no refresh or retry.
pub struct AlfaCrmClient {
    http: HttpClient,
    base_url: String,
    email: String,
    api_key: String,
    token: RwLock<Option<SessionToken>>,
}

impl AlfaCrmClient {
    /// Create a client with the standard 15 second timeout.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit per-request timeout.
    pub fn with_timeout(config: &Config, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            email: config.email.clone(),
            api_key: config.api_key.clone(),
            token: RwLock::new(None),
        })
    }

    /// Build the full URL for a `v2api` endpoint path.
    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/v2api/{}", self.base_url, path)
    }

    /// Get the session token, performing the login exchange if needed.
    async fn get_valid_token(&self) -> Result<SessionToken> {
        {
            let token = self.token.read().await;
            if let Some(ref t) = *token {
                return Ok(t.clone());
            }
        }

        let fresh = self.authenticate().await?;
        let mut token = self.token.write().await;
        *token = Some(fresh.clone());
        Ok(fresh)
    }

    /// POST a JSON body to a listing endpoint and return the response text.
    ///
    /// Non-success statuses abort with the status and body surfaced verbatim.
    async fn post_index(&self, path: &str, body: &Value) -> Result<String> {
        let token = self.get_valid_token().await?;
        let url = self.endpoint_url(path);

        debug!("POST {} body={}", url, body);

        let response = self
            .http
            .post(&url)
            .header(TOKEN_HEADER, token.as_str())
            .json(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: path.to_string(),
                body: truncate(&text, 300),
            }
            .into());
        }

        Ok(text)
    }

    /// Parse an `{items: [...]}` envelope, tolerating a missing key.
    fn parse_items<T: for<'de> Deserialize<'de>>(path: &str, text: &str) -> Vec<T> {
        #[derive(Deserialize)]
        struct Envelope<T> {
            #[serde(default = "Vec::new")]
            items: Vec<T>,
        }

        match serde_json::from_str::<Envelope<T>>(text) {
            Ok(envelope) => envelope.items,
            Err(e) => {
                warn!("{}: response is not an item listing ({}), treating as empty", path, e);
                Vec::new()
            }
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        text.to_string()
    } else {
        let mut end = max;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

#[async_trait]
impl AuthApi for AlfaCrmClient {
    async fn authenticate(&self) -> Result<SessionToken> {
        /// Some deployments nest the token under `data`.
        #[derive(Deserialize)]
        struct LoginResponse {
            #[serde(default)]
            token: Option<String>,
            #[serde(default)]
            data: Option<LoginData>,
        }

        #[derive(Deserialize)]
        struct LoginData {
            #[serde(default)]
            token: Option<String>,
        }

        let url = self.endpoint_url("auth/login");
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "email": self.email,
                "api_key": self.api_key,
            }))
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            return Err(
                ApiError::AuthFailed(format!("HTTP {}: {}", status.as_u16(), truncate(&text, 300)))
                    .into(),
            );
        }

        let login: LoginResponse = serde_json::from_str(&text).map_err(|e| {
            ApiError::AuthFailed(format!("unparseable login response: {}. Body was: {}", e, text))
        })?;

        let token = login
            .token
            .or_else(|| login.data.and_then(|d| d.token))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::AuthFailed("no token in login response".to_string()))?;

        Ok(SessionToken(token))
    }
}

#[async_trait]
impl ListingApi for AlfaCrmClient {
    async fn list_customers(
        &self,
        filter: &CustomerFilter,
        page: usize,
        page_size: usize,
    ) -> Result<CustomerPage> {
        let mut body = serde_json::to_value(filter)?;
        if let Value::Object(ref mut map) = body {
            map.insert("page".to_string(), page.into());
            map.insert("page_size".to_string(), page_size.into());
        }

        let text = self.post_index("customer/index", &body).await?;

        // Shape error policy: a body that is not a page object degrades to an
        // empty page; the sweep reports it and keeps going.
        match serde_json::from_str::<CustomerPage>(&text) {
            Ok(page) => Ok(page),
            Err(e) => {
                warn!("customer/index page {}: unparseable body ({}), treating as empty", page, e);
                Ok(CustomerPage::default())
            }
        }
    }

    async fn list_lead_statuses(
        &self,
        branch_id: Option<i64>,
        pipeline_id: Option<i64>,
    ) -> Result<Vec<LeadStatus>> {
        let mut body = serde_json::Map::new();
        if let Some(branch) = branch_id {
            body.insert("branch_id".to_string(), branch.into());
        }
        if let Some(pipeline) = pipeline_id {
            body.insert("pipeline_id".to_string(), pipeline.into());
        }

        let text = self
            .post_index("lead-status/index", &Value::Object(body))
            .await?;
        Ok(Self::parse_items("lead-status/index", &text))
    }

    async fn list_lead_rejects(&self) -> Result<Vec<RejectReason>> {
        let text = self
            .post_index("lead-reject/index", &serde_json::json!({}))
            .await?;
        Ok(Self::parse_items("lead-reject/index", &text))
    }

    async fn list_customer_rejects(&self) -> Result<Vec<RejectReason>> {
        let text = self
            .post_index("customer-reject/index", &serde_json::json!({}))
            .await?;
        Ok(Self::parse_items("customer-reject/index", &text))
    }
}
