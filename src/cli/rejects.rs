//! Rejects command: list both rejection-reason dictionaries

use serde::Serialize;
use tabled::Tabled;

use crate::cli::args::OutputFormat;
use crate::cli::context::CommandContext;
use crate::client::ListingApi;
use crate::client::models::RejectReason;
use crate::error::Result;
use crate::output::{json, table};

#[derive(Debug, Serialize, Tabled)]
struct RejectRow {
    #[tabled(rename = "ID")]
    id: i64,

    #[tabled(rename = "NAME")]
    name: String,
}

impl From<&RejectReason> for RejectRow {
    fn from(reason: &RejectReason) -> Self {
        Self {
            id: reason.id,
            name: reason.display_name().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RejectDictionaries {
    lead_rejects: Vec<RejectReason>,
    customer_rejects: Vec<RejectReason>,
}

/// Handle the rejects command.
///
/// Lead rejections mark archived leads; customer rejections are the separate
/// dictionary used for converted customers who later left.
pub async fn handle_rejects(ctx: &CommandContext) -> Result<()> {
    let lead_rejects = ctx.client.list_lead_rejects().await?;
    let customer_rejects = ctx.client.list_customer_rejects().await?;

    match ctx.format {
        OutputFormat::Json => {
            let dictionaries = RejectDictionaries {
                lead_rejects,
                customer_rejects,
            };
            println!("{}", json::format_json(&dictionaries)?);
        }
        OutputFormat::Pretty => {
            let lead_rows: Vec<RejectRow> = lead_rejects.iter().map(RejectRow::from).collect();
            let customer_rows: Vec<RejectRow> =
                customer_rejects.iter().map(RejectRow::from).collect();

            println!("Lead rejection reasons:");
            println!("{}", table::format_table(&lead_rows));
            println!();
            println!("Customer rejection reasons:");
            println!("{}", table::format_table(&customer_rows));
        }
    }
    Ok(())
}
