//! Statuses command: list the lead-status dictionary

use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::OutputFormat;
use crate::cli::context::CommandContext;
use crate::client::ListingApi;
use crate::client::models::LeadStatus;
use crate::error::Result;
use crate::output::{json, table};

#[derive(Debug, Serialize, Tabled)]
struct StatusRow {
    #[tabled(rename = "ID")]
    id: i64,

    #[tabled(rename = "NAME")]
    name: String,

    #[tabled(rename = "PIPELINE")]
    pipeline: String,
}

impl From<&LeadStatus> for StatusRow {
    fn from(status: &LeadStatus) -> Self {
        Self {
            id: status.id,
            name: status.display_name().to_string(),
            pipeline: status
                .pipeline_id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
        }
    }
}

/// Handle the statuses command.
pub async fn handle_statuses(ctx: &CommandContext, pipeline: Option<i64>) -> Result<()> {
    let statuses = ctx
        .client
        .list_lead_statuses(Some(ctx.config.company_id), pipeline)
        .await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&statuses)?),
        OutputFormat::Pretty => {
            let rows: Vec<StatusRow> = statuses.iter().map(StatusRow::from).collect();
            println!("{}", table::format_table(&rows));
        }
    }
    Ok(())
}
