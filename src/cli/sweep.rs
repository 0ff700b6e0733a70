//! Sweep command handler

use crate::cli::args::{OutputFormat, SweepArgs};
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::output::{json, report};
use crate::probe;

/// Run one bounded sweep and print the report.
pub async fn handle_sweep(ctx: &CommandContext, args: &SweepArgs) -> Result<()> {
    let filter = args.to_filter(ctx.config.company_id);
    let sweep = probe::sweep(&ctx.client, &filter, &args.to_options()).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&sweep)?),
        OutputFormat::Pretty => println!("{}", report::render_sweep(&sweep)),
    }
    Ok(())
}
