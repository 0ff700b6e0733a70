//! Authentication models

use serde::{Deserialize, Serialize};

/// Opaque session token returned by `auth/login`.
///
/// Invariant: non-empty. Sent as the `X-ALFACRM-TOKEN` header value on every
/// subsequent request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
