//! The CRM probe: multi-page sweeps and filter investigations
//!
//! Control flow is strictly sequential. Every HTTP call is awaited to
//! completion before the next is issued, any transport or HTTP error aborts
//! the run, and a page with a missing/unparseable body arrives here as an
//! empty page.

use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use crate::client::ListingApi;
use crate::client::models::{CustomerFilter, LeadStatus, RejectReason};
use crate::error::Result;

pub mod report;

pub use report::{MAX_SAMPLES, PageStats, Predicate, StopReason, SweepReport};

/// Sweep parameters: how many pages to request and at what size.
#[derive(Debug, Clone, Copy)]
pub struct SweepOptions {
    /// Pages to request, 1..=pages
    pub pages: usize,
    /// Records per page
    pub page_size: usize,
}

impl Default for SweepOptions {
    fn default() -> Self {
        // The fixed probe: 4 pages of 50
        Self {
            pages: 4,
            page_size: 50,
        }
    }
}

/// Page sizes the page-size probe walks through.
pub const PAGE_SIZE_LADDER: [usize; 4] = [50, 100, 500, 1000];

/// Collect records from pages 1..=K under one filter and classify them.
///
/// Stops early on an empty page, or when a page past page 2 contributes no
/// ids that were not already seen. Classification and the unique count are
/// computed over the deduped record set; per-page stats over the raw pages.
pub async fn sweep<C: ListingApi + ?Sized>(
    client: &C,
    filter: &CustomerFilter,
    opts: &SweepOptions,
) -> Result<SweepReport> {
    let predicate = Predicate::for_filter(filter);

    let mut seen: HashSet<i64> = HashSet::new();
    let mut pages: Vec<PageStats> = Vec::new();
    let mut samples = Vec::new();
    let mut total_fetched = 0;
    let mut archived = 0;
    let mut matched = 0;
    let mut server_count = 0;
    let mut stopped_early = None;

    for page in 1..=opts.pages {
        let response = client.list_customers(filter, page, opts.page_size).await?;
        if page == 1 {
            server_count = response.count;
        }

        let fetched = response.items.len();
        total_fetched += fetched;

        let first_id = response.items.first().map(|l| l.id);
        let last_id = response.items.last().map(|l| l.id);

        let mut new_ids = 0;
        for lead in response.items {
            if !seen.insert(lead.id) {
                continue;
            }
            new_ids += 1;
            if lead.is_archived() {
                archived += 1;
            }
            if predicate.matches(&lead) {
                matched += 1;
                if samples.len() < MAX_SAMPLES {
                    samples.push(lead);
                }
            }
        }

        debug!(
            "page {}: fetched {}, new {}, unique so far {}, count={}",
            page,
            fetched,
            new_ids,
            seen.len(),
            server_count
        );

        pages.push(PageStats {
            page,
            fetched,
            first_id,
            last_id,
            new_ids,
        });

        if fetched == 0 {
            stopped_early = Some(StopReason::EmptyPage(page));
            break;
        }
        if new_ids == 0 && page > 2 {
            stopped_early = Some(StopReason::NoNewIds(page));
            break;
        }
    }

    let unique_ids = seen.len();
    Ok(SweepReport {
        pages_requested: opts.pages,
        page_size: opts.page_size,
        predicate,
        total_fetched,
        unique_ids,
        archived,
        active: unique_ids - archived,
        matched,
        server_count,
        pages,
        samples,
        stopped_early,
    })
}

/// One per-status sweep result.
#[derive(Debug, Serialize)]
pub struct StatusSweep {
    pub status: LeadStatus,
    pub report: SweepReport,
}

/// Sweep once per lead status, each time with that status as the filter.
pub async fn sweep_per_status<C: ListingApi + ?Sized>(
    client: &C,
    base_filter: &CustomerFilter,
    branch_id: Option<i64>,
    pipeline_id: Option<i64>,
    opts: &SweepOptions,
) -> Result<Vec<StatusSweep>> {
    let statuses = client.list_lead_statuses(branch_id, pipeline_id).await?;
    debug!("sweeping {} statuses", statuses.len());

    let mut outcomes = Vec::with_capacity(statuses.len());
    for status in statuses {
        let filter = base_filter.clone().with_status(status.id);
        let report = sweep(client, &filter, opts).await?;
        outcomes.push(StatusSweep { status, report });
    }
    Ok(outcomes)
}

/// Verdict on whether the server honored the `lead_reject_id` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "verdict")]
pub enum FilterVerdict {
    /// Every returned record carried the requested rejection id
    Honored,
    /// Some returned records did not match the requested rejection id
    Ignored { matched: usize, mismatched: usize },
    /// The sweep returned no records, so nothing can be concluded
    Inconclusive,
}

/// Outcome of the reject-filter probe.
#[derive(Debug, Serialize)]
pub struct RejectFilterProbe {
    /// The rejection reason used as the filter (first in the dictionary)
    pub reject: RejectReason,
    pub report: SweepReport,
}

impl RejectFilterProbe {
    pub fn verdict(&self) -> FilterVerdict {
        if self.report.unique_ids == 0 {
            FilterVerdict::Inconclusive
        } else if self.report.matched == self.report.unique_ids {
            FilterVerdict::Honored
        } else {
            FilterVerdict::Ignored {
                matched: self.report.matched,
                mismatched: self.report.unique_ids - self.report.matched,
            }
        }
    }
}

/// Pick the first rejection reason and probe whether filtering by it is
/// honored server-side. The filter is sent on the wire AND applied locally,
/// so either server behavior is detectable. Returns `None` when the CRM has
/// no rejection reasons at all.
pub async fn probe_reject_filter<C: ListingApi + ?Sized>(
    client: &C,
    base_filter: &CustomerFilter,
    opts: &SweepOptions,
) -> Result<Option<RejectFilterProbe>> {
    let rejects = client.list_lead_rejects().await?;
    let Some(reject) = rejects.into_iter().next() else {
        return Ok(None);
    };

    debug!(
        "probing reject filter with {} (id {})",
        reject.display_name(),
        reject.id
    );

    let filter = base_filter.clone().with_reject(reject.id);
    let report = sweep(client, &filter, opts).await?;
    Ok(Some(RejectFilterProbe { reject, report }))
}

/// One rung of the page-size ladder.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageSizeTrial {
    pub page_size: usize,
    /// Records actually returned for page 1
    pub fetched: usize,
    /// Server-reported total
    pub server_count: i64,
}

/// Request page 1 at each ladder size to discover the server's cap
/// empirically. A size whose `fetched` falls short of both the requested
/// size and `server_count` suggests the cap sits below it.
pub async fn probe_page_sizes<C: ListingApi + ?Sized>(
    client: &C,
    filter: &CustomerFilter,
) -> Result<Vec<PageSizeTrial>> {
    let mut trials = Vec::with_capacity(PAGE_SIZE_LADDER.len());
    for page_size in PAGE_SIZE_LADDER {
        let response = client.list_customers(filter, 1, page_size).await?;
        debug!(
            "page_size {}: fetched {}, count={}",
            page_size,
            response.items.len(),
            response.count
        );
        trials.push(PageSizeTrial {
            page_size,
            fetched: response.items.len(),
            server_count: response.count,
        });
    }
    Ok(trials)
}
