//! Console rendering for sweep reports
//!
//! The probe is diagnostic: output is human-readable lines on stdout, and
//! anything surprising (duplicate ids, an ignored filter, an empty page) has
//! to be impossible to miss.

use colored::Colorize;

use crate::probe::{
    FilterVerdict, PageSizeTrial, RejectFilterProbe, StatusSweep, StopReason, SweepReport,
};

fn opt(value: Option<i64>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Render a sweep report as console lines.
pub fn render_sweep(report: &SweepReport) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "{} {} pages x {} (predicate: {})",
        "Sweep:".bold(),
        report.pages_requested,
        report.page_size,
        report.predicate.describe()
    ));

    for page in &report.pages {
        if page.fetched == 0 {
            out.push(format!("  page {}: {}", page.page, "empty".yellow()));
            continue;
        }
        out.push(format!(
            "  page {}: {} records, ids {}..{}, new {}",
            page.page,
            page.fetched,
            page.first_id.unwrap_or_default(),
            page.last_id.unwrap_or_default(),
            page.new_ids
        ));
    }

    out.push(format!(
        "Total fetched: {}, unique ids: {}, server count: {}",
        report.total_fetched, report.unique_ids, report.server_count
    ));
    out.push(format!(
        "Archived: {}, active: {}",
        report.archived, report.active
    ));

    if report.pagination_consistent() {
        out.push(format!(
            "{} pagination consistent (every fetched record distinct)",
            "✓".green()
        ));
    } else {
        out.push(format!(
            "{} pagination anomaly: {} unique of {} fetched",
            "✗".red(),
            report.unique_ids,
            report.total_fetched
        ));
    }

    match report.stopped_early {
        Some(StopReason::EmptyPage(page)) => {
            out.push(format!("Stopped early: page {} empty", page));
        }
        Some(StopReason::NoNewIds(page)) => {
            out.push(format!("Stopped early: page {} added no new ids", page));
        }
        None => {}
    }

    if !report.samples.is_empty() {
        out.push(format!("Samples ({}):", report.samples.len()));
        for lead in &report.samples {
            out.push(format!(
                "  id {} \"{}\" status={} reject={}",
                lead.id,
                lead.name.as_deref().unwrap_or("-"),
                opt(lead.lead_status_id),
                opt(lead.lead_reject_id)
            ));
        }
    }

    out.join("\n")
}

/// Render the per-status sweep outcomes.
pub fn render_status_sweeps(outcomes: &[StatusSweep]) -> String {
    if outcomes.is_empty() {
        return "No lead statuses found.".to_string();
    }

    let mut out = Vec::new();
    for outcome in outcomes {
        out.push(format!(
            "{} {} (id {})",
            "Status:".bold(),
            outcome.status.display_name(),
            outcome.status.id
        ));
        out.push(render_sweep(&outcome.report));
        out.push(String::new());
    }
    out.join("\n")
}

/// Render the reject-filter probe with its verdict.
pub fn render_reject_probe(probe: &RejectFilterProbe) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "{} {} (id {})",
        "Reject filter under test:".bold(),
        probe.reject.display_name(),
        probe.reject.id
    ));
    out.push(render_sweep(&probe.report));
    out.push(match probe.verdict() {
        FilterVerdict::Honored => format!(
            "{} server honored lead_reject_id={}",
            "✓".green(),
            probe.reject.id
        ),
        FilterVerdict::Ignored {
            matched,
            mismatched,
        } => format!(
            "{} server IGNORED lead_reject_id={}: {} matched, {} did not",
            "✗".red(),
            probe.reject.id,
            matched,
            mismatched
        ),
        FilterVerdict::Inconclusive => {
            format!("{} no records returned, verdict inconclusive", "○".dimmed())
        }
    });
    out.join("\n")
}

/// Render the page-size ladder results.
pub fn render_page_sizes(trials: &[PageSizeTrial]) -> String {
    let mut out = Vec::new();
    out.push(format!("{}", "Page-size probe (page 1 at each size):".bold()));
    for trial in trials {
        let capped = trial.fetched < trial.page_size && (trial.fetched as i64) < trial.server_count;
        out.push(format!(
            "  page_size {:>5}: fetched {:>5}, server count {}{}",
            trial.page_size,
            trial.fetched,
            trial.server_count,
            if capped {
                format!("  {}", "(short page: cap may sit below this size)".yellow())
            } else {
                String::new()
            }
        ));
    }
    out.join("\n")
}
