//! Shared CLI argument types

use clap::{Args, ValueEnum};

use crate::client::models::CustomerFilter;
use crate::probe::SweepOptions;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console report
    Pretty,
    /// Pretty-printed JSON with metadata
    Json,
}

/// Global CLI options passed to all command handlers.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format
    pub format: OutputFormat,

    /// Branch (company) id override
    pub branch: Option<i64>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &super::Cli) -> Self {
        Self {
            format: cli.format,
            branch: cli.branch,
        }
    }
}

/// Shared sweep arguments for probe commands.
///
/// Flatten this into any command that runs a paginated sweep:
/// ```ignore
/// Sweep {
///     #[command(flatten)]
///     sweep: SweepArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct SweepArgs {
    /// Pages to request (1-indexed, sequential)
    #[arg(long, short = 'k', default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Records per page
    #[arg(long, short = 'p', default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,

    /// Filter by lead status id
    #[arg(long)]
    pub status: Option<i64>,

    /// Filter by lead rejection reason id
    #[arg(long)]
    pub reject: Option<i64>,

    /// Filter by sales pipeline id
    #[arg(long)]
    pub pipeline: Option<i64>,

    /// Omit branch_ids from the request body
    #[arg(long)]
    pub no_branch: bool,
}

impl SweepArgs {
    /// Convert CLI args to sweep options.
    pub fn to_options(&self) -> SweepOptions {
        SweepOptions {
            pages: self.pages as usize,
            page_size: self.page_size as usize,
        }
    }

    /// Build the server-side filter, scoped to the given branch unless
    /// `--no-branch` was passed.
    pub fn to_filter(&self, company_id: i64) -> CustomerFilter {
        let mut filter = if self.no_branch {
            CustomerFilter::default()
        } else {
            CustomerFilter::for_branch(company_id)
        };
        if let Some(status) = self.status {
            filter = filter.with_status(status);
        }
        if let Some(reject) = self.reject {
            filter = filter.with_reject(reject);
        }
        if let Some(pipeline) = self.pipeline {
            filter = filter.with_pipeline(pipeline);
        }
        filter
    }
}
