//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod probes;
pub mod rejects;
pub mod status;
pub mod statuses;
pub mod sweep;

pub use args::{GlobalOptions, OutputFormat, SweepArgs};
pub use context::CommandContext;

/// alfaprobe - diagnostic probe for the AlfaCRM lead-listing API
#[derive(Parser, Debug)]
#[command(name = "alfaprobe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "ALFAPROBE_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override the branch (company) id from ALFACRM_COMPANY_ID
    #[arg(long, global = true)]
    pub branch: Option<i64>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ALFAPROBE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which credentials are configured (no network access)
    Status,

    /// Display version information
    Version,

    /// Sweep the customer listing across pages and classify the records
    Sweep {
        #[command(flatten)]
        sweep: SweepArgs,
    },

    /// List lead statuses, optionally scoped to one pipeline
    Statuses {
        /// Restrict to one sales pipeline
        #[arg(long)]
        pipeline: Option<i64>,
    },

    /// List lead and customer rejection reasons
    Rejects,

    /// Filter and pagination investigations
    #[command(subcommand)]
    Probe(ProbeCommands),
}

/// Probe subcommands
#[derive(Subcommand, Debug)]
pub enum ProbeCommands {
    /// Check whether the server honors the lead_reject_id filter
    ///
    /// Picks the first rejection reason, sweeps with it as a server-side
    /// filter, and classifies the returned records locally so an ignored
    /// filter is visible either way.
    RejectFilter {
        #[command(flatten)]
        sweep: SweepArgs,
    },

    /// Run one bounded sweep per lead status
    StatusSweep {
        /// Restrict statuses to one sales pipeline
        #[arg(long)]
        pipeline: Option<i64>,

        #[command(flatten)]
        sweep: SweepArgs,
    },

    /// Request page 1 at sizes 50/100/500/1000 to find the server's cap
    PageSize,
}
