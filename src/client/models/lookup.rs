//! Lookup dictionaries: lead statuses and rejection reasons

use serde::{Deserialize, Serialize};

/// One lead status from `lead-status/index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadStatus {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,

    /// Sales pipeline the status belongs to
    #[serde(default)]
    pub pipeline_id: Option<i64>,
}

/// One rejection reason from `lead-reject/index` or `customer-reject/index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectReason {
    pub id: i64,

    #[serde(default)]
    pub name: Option<String>,
}

impl LeadStatus {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}

impl RejectReason {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("(unnamed)")
    }
}
