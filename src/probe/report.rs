//! Sweep report types
//!
//! A sweep fetches pages 1..=K of `customer/index` under one filter and
//! classifies the results locally. Everything the probe observed ends up in
//! [`SweepReport`]; rendering lives in the output module.

use serde::Serialize;

use crate::client::models::{CustomerFilter, Lead};

/// Cap on sample records kept per sweep.
pub const MAX_SAMPLES: usize = 5;

/// The classification predicate a sweep is investigating.
///
/// Archived and active partition every record: a record is archived exactly
/// when `lead_reject_id` is non-null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum Predicate {
    Archived,
    InStatus(i64),
    InReject(i64),
}

impl Predicate {
    /// Pick the predicate under test for a given server-side filter: the
    /// reject filter if present, else the status filter, else archived-ness.
    pub fn for_filter(filter: &CustomerFilter) -> Self {
        if let Some(reject_id) = filter.lead_reject_id {
            Predicate::InReject(reject_id)
        } else if let Some(status_id) = filter.lead_status_id {
            Predicate::InStatus(status_id)
        } else {
            Predicate::Archived
        }
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        match *self {
            Predicate::Archived => lead.is_archived(),
            Predicate::InStatus(id) => lead.lead_status_id == Some(id),
            Predicate::InReject(id) => lead.lead_reject_id == Some(id),
        }
    }

    pub fn describe(&self) -> String {
        match *self {
            Predicate::Archived => "archived (lead_reject_id is non-null)".to_string(),
            Predicate::InStatus(id) => format!("lead_status_id == {}", id),
            Predicate::InReject(id) => format!("lead_reject_id == {}", id),
        }
    }
}

/// Why a sweep stopped before requesting all K pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "page")]
pub enum StopReason {
    /// The page came back with no items (or an unparseable body)
    EmptyPage(usize),
    /// A page past page 2 contributed zero ids not seen before
    NoNewIds(usize),
}

/// Per-page observations, taken over the raw page before deduplication.
#[derive(Debug, Clone, Serialize)]
pub struct PageStats {
    /// 1-indexed page number
    pub page: usize,
    /// Records on the page as returned
    pub fetched: usize,
    /// First id on the page, in server order
    pub first_id: Option<i64>,
    /// Last id on the page, in server order
    pub last_id: Option<i64>,
    /// Ids on this page not seen on any earlier page
    pub new_ids: usize,
}

/// Everything one sweep observed.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// Pages the sweep was asked to fetch
    pub pages_requested: usize,
    /// Page size used for every request
    pub page_size: usize,
    /// The predicate under test
    pub predicate: Predicate,
    /// Total records fetched across pages, duplicates included
    pub total_fetched: usize,
    /// Distinct `id`s seen
    pub unique_ids: usize,
    /// Unique records with `lead_reject_id` non-null
    pub archived: usize,
    /// Unique records with `lead_reject_id` null
    pub active: usize,
    /// Unique records matching the predicate under test
    pub matched: usize,
    /// Server-reported total from page 1 (echoed, never trusted)
    pub server_count: i64,
    /// Per-page observations in request order
    pub pages: Vec<PageStats>,
    /// Up to [`MAX_SAMPLES`] records matching the predicate, in fetch order
    pub samples: Vec<Lead>,
    /// Set when the sweep stopped before page K
    pub stopped_early: Option<StopReason>,
}

impl SweepReport {
    /// Pagination-correctness verdict: every fetched record had a distinct
    /// id. Strict inequality is evidence the filter and pagination interact
    /// badly (the same rows being served on every page).
    pub fn pagination_consistent(&self) -> bool {
        self.unique_ids == self.total_fetched
    }
}
