//! Command execution context

use std::time::Duration;

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::client::AlfaCrmClient;
use crate::client::alfacrm::DEFAULT_TIMEOUT;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution.
///
/// Bundles the environment-derived configuration, a ready API client and the
/// chosen output format so handlers take one argument instead of four.
pub struct CommandContext {
    pub config: Config,
    pub client: AlfaCrmClient,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a context with the standard request timeout.
    pub fn new(options: &GlobalOptions) -> Result<Self> {
        Self::with_timeout(options, DEFAULT_TIMEOUT)
    }

    /// Create a context with an explicit request timeout.
    pub fn with_timeout(options: &GlobalOptions, timeout: Duration) -> Result<Self> {
        let mut config = Config::from_env()?;
        if let Some(branch) = options.branch {
            config.company_id = branch;
        }

        let client = AlfaCrmClient::with_timeout(&config, timeout)?;

        Ok(Self {
            config,
            client,
            format: options.format,
        })
    }
}
