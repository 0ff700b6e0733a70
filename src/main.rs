//! alfaprobe - diagnostic probe for the AlfaCRM lead-listing API

use clap::Parser;
use env_logger::Env;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod probe;

use cli::{Cli, CommandContext, Commands, GlobalOptions, ProbeCommands};
use client::BULK_TIMEOUT;
use error::Result;

#[tokio::main]
async fn main() {
    // Credentials may live in a local .env; a missing file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = if cli.debug { "alfaprobe=debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(filter)).init();

    if let Err(err) = run(&cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let options = GlobalOptions::from_cli(cli);

    match &cli.command {
        Commands::Status => cli::status::handle_status(&options),
        Commands::Version => {
            println!("alfaprobe {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Sweep { sweep } => {
            let ctx = CommandContext::new(&options)?;
            cli::sweep::handle_sweep(&ctx, sweep).await
        }
        Commands::Statuses { pipeline } => {
            let ctx = CommandContext::new(&options)?;
            cli::statuses::handle_statuses(&ctx, *pipeline).await
        }
        Commands::Rejects => {
            let ctx = CommandContext::new(&options)?;
            cli::rejects::handle_rejects(&ctx).await
        }
        Commands::Probe(probe_command) => match probe_command {
            ProbeCommands::RejectFilter { sweep } => {
                let ctx = CommandContext::new(&options)?;
                cli::probes::handle_reject_filter(&ctx, sweep).await
            }
            ProbeCommands::StatusSweep { pipeline, sweep } => {
                let ctx = CommandContext::new(&options)?;
                cli::probes::handle_status_sweep(&ctx, *pipeline, sweep).await
            }
            ProbeCommands::PageSize => {
                let ctx = CommandContext::with_timeout(&options, BULK_TIMEOUT)?;
                cli::probes::handle_page_size(&ctx).await
            }
        },
    }
}
