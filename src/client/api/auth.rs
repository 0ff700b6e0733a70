//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::SessionToken;
use crate::error::Result;

/// Authentication operations for the AlfaCRM API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange the configured email/API key for a session token.
    ///
    /// Called at most once per run; any failure aborts the probe.
    async fn authenticate(&self) -> Result<SessionToken>;
}
