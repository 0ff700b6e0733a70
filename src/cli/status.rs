//! Status command: show which credentials are configured
//!
//! Purely local. Nothing here touches the network, so the command is safe to
//! run while debugging a broken environment.

use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::{GlobalOptions, OutputFormat};
use crate::config::{self, normalize_base_url};
use crate::error::Result;
use crate::output::{json, table};

#[derive(Debug, Serialize, Tabled)]
struct VarStatus {
    #[tabled(rename = "VARIABLE")]
    variable: &'static str,

    #[tabled(rename = "VALUE")]
    value: String,
}

/// Handle the status command.
pub fn handle_status(options: &GlobalOptions) -> Result<()> {
    let rows = vec![
        VarStatus {
            variable: config::ENV_BASE_URL,
            value: match std::env::var(config::ENV_BASE_URL) {
                Ok(raw) if !raw.trim().is_empty() => normalize_base_url(&raw),
                _ => "(not set)".to_string(),
            },
        },
        VarStatus {
            variable: config::ENV_COMPANY_ID,
            value: std::env::var(config::ENV_COMPANY_ID)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "(not set)".to_string()),
        },
        VarStatus {
            variable: config::ENV_EMAIL,
            value: std::env::var(config::ENV_EMAIL)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "(not set)".to_string()),
        },
        VarStatus {
            variable: config::ENV_API_KEY,
            value: match std::env::var(config::ENV_API_KEY) {
                Ok(key) if !key.trim().is_empty() => mask_key(&key),
                _ => "(not set)".to_string(),
            },
        },
    ];

    match options.format {
        OutputFormat::Json => println!("{}", json::format_json(&rows)?),
        OutputFormat::Pretty => println!("{}", table::format_table(&rows)),
    }
    Ok(())
}

/// Mask an API key down to its first and last two characters.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 6 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}{}{}", head, "*".repeat(chars.len() - 4), tail)
}
