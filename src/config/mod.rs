//! Configuration management for alfaprobe
//!
//! Credentials come from the process environment (optionally seeded from a
//! `.env` file in `main`). The loaded [`Config`] is immutable and threaded
//! through command execution; there is no config file and no global state.

use crate::error::{ConfigError, Result};

/// Environment variable holding the CRM base URL.
pub const ENV_BASE_URL: &str = "ALFACRM_BASE_URL";
/// Environment variable holding the branch/company id.
pub const ENV_COMPANY_ID: &str = "ALFACRM_COMPANY_ID";
/// Environment variable holding the API account email.
pub const ENV_EMAIL: &str = "ALFACRM_EMAIL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "ALFACRM_API_KEY";

/// Immutable probe configuration sourced from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// CRM base URL, guaranteed free of trailing slashes
    pub base_url: String,

    /// Branch (company) id used as `branch_ids[0]` / `branch_id`
    pub company_id: i64,

    /// API account email
    pub email: String,

    /// API key
    pub api_key: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Trailing slashes on the base URL are stripped here so that no request
    /// URL ever contains a double slash.
    pub fn from_env() -> Result<Self> {
        let base_url = require_var(ENV_BASE_URL)?;
        let company_raw = require_var(ENV_COMPANY_ID)?;
        let email = require_var(ENV_EMAIL)?;
        let api_key = require_var(ENV_API_KEY)?;

        let company_id: i64 =
            company_raw
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::MalformedVar {
                    var: ENV_COMPANY_ID,
                    reason: e.to_string(),
                })?;

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            company_id,
            email,
            api_key,
        })
    }
}

/// Strip trailing slashes from a configured base URL.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn require_var(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}
