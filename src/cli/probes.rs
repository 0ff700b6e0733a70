//! Probe subcommand handlers

use crate::cli::args::{OutputFormat, SweepArgs};
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::output::{json, report};
use crate::probe;

/// Handle `probe reject-filter`.
pub async fn handle_reject_filter(ctx: &CommandContext, args: &SweepArgs) -> Result<()> {
    let base_filter = args.to_filter(ctx.config.company_id);
    let outcome = probe::probe_reject_filter(&ctx.client, &base_filter, &args.to_options()).await?;

    let Some(outcome) = outcome else {
        match ctx.format {
            OutputFormat::Json => println!("{}", json::format_json(&serde_json::Value::Null)?),
            OutputFormat::Pretty => {
                println!("No rejection reasons defined, nothing to probe.")
            }
        }
        return Ok(());
    };

    match ctx.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "reject": outcome.reject,
                "report": outcome.report,
                "verdict": outcome.verdict(),
            });
            println!("{}", json::format_json(&payload)?);
        }
        OutputFormat::Pretty => println!("{}", report::render_reject_probe(&outcome)),
    }
    Ok(())
}

/// Handle `probe status-sweep`.
pub async fn handle_status_sweep(
    ctx: &CommandContext,
    pipeline: Option<i64>,
    args: &SweepArgs,
) -> Result<()> {
    let base_filter = args.to_filter(ctx.config.company_id);
    let outcomes = probe::sweep_per_status(
        &ctx.client,
        &base_filter,
        Some(ctx.config.company_id),
        pipeline,
        &args.to_options(),
    )
    .await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&outcomes)?),
        OutputFormat::Pretty => println!("{}", report::render_status_sweeps(&outcomes)),
    }
    Ok(())
}

/// Handle `probe page-size`.
///
/// The context for this command is built with the bulk timeout: a 1000-record
/// page can take the server well past the standard limit.
pub async fn handle_page_size(ctx: &CommandContext) -> Result<()> {
    let filter = crate::client::models::CustomerFilter::for_branch(ctx.config.company_id);
    let trials = probe::probe_page_sizes(&ctx.client, &filter).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&trials)?),
        OutputFormat::Pretty => println!("{}", report::render_page_sizes(&trials)),
    }
    Ok(())
}
