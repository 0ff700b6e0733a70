//! Customer (lead) listing models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One CRM contact row from `customer/index`.
///
/// Only the fields the probe inspects are typed; everything else the server
/// returns is kept verbatim in `extras` and passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Unique record id
    pub id: i64,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Pipeline status the lead currently sits in
    #[serde(default)]
    pub lead_status_id: Option<i64>,

    /// Rejection reason; non-null exactly when the lead is archived
    #[serde(default)]
    pub lead_reject_id: Option<i64>,

    /// Rejection reason assigned at the customer stage
    #[serde(default)]
    pub customer_reject_id: Option<i64>,

    /// Every other field the server returned, untouched
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl Lead {
    /// A record is archived exactly when its rejection field is populated.
    pub fn is_archived(&self) -> bool {
        self.lead_reject_id.is_some()
    }
}

/// Server-side filter for `customer/index`.
///
/// Absent fields are omitted from the request body entirely, so the outbound
/// JSON contains exactly the filters the caller asked for.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_ids: Option<Vec<i64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_reject_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<i64>,
}

impl CustomerFilter {
    /// Filter scoped to a single branch.
    pub fn for_branch(company_id: i64) -> Self {
        Self {
            branch_ids: Some(vec![company_id]),
            ..Self::default()
        }
    }

    /// Narrow to one lead status.
    pub fn with_status(mut self, status_id: i64) -> Self {
        self.lead_status_id = Some(status_id);
        self
    }

    /// Narrow to one rejection reason.
    pub fn with_reject(mut self, reject_id: i64) -> Self {
        self.lead_reject_id = Some(reject_id);
        self
    }

    /// Narrow to one sales pipeline.
    pub fn with_pipeline(mut self, pipeline_id: i64) -> Self {
        self.pipeline_id = Some(pipeline_id);
        self
    }
}

/// One page of `customer/index` results.
///
/// Both fields are defaulted: a body lacking `items` deserializes to an empty
/// page instead of failing, per the probe's shape-error policy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerPage {
    /// Records on this page, in server order
    #[serde(default)]
    pub items: Vec<Lead>,

    /// Server-reported total across all pages (echoed, never trusted)
    #[serde(default)]
    pub count: i64,
}
