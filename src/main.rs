mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::config::{FileStore, ZammadSettings};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::console::Console;
use crate::infra::git::GitCli;
use crate::infra::zammad::ZammadClient;
use crate::services::TicketSource;

#[derive(Parser)]
#[command(
    name = "zab",
    author,
    version,
    about = "Create Git branches from Zammad tickets"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick an open Zammad ticket and create a matching branch (default).
    Branch,
    /// Manage the stored Zammad URL and API token.
    Config(ConfigArgs),
    /// Show the Zammad user the stored credentials authenticate as.
    Whoami,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let mut ctx = build_context()?;

    match cli.command.unwrap_or(Commands::Branch) {
        Commands::Branch => {
            cmd::branch::run(&mut ctx).await?;
            Ok(())
        }
        Commands::Config(args) => config_cmd::run(&mut ctx, args.command),
        Commands::Whoami => cmd::whoami::run(&ctx).await,
    }
}

fn build_context() -> AppResult<AppContext> {
    let cwd = std::env::current_dir()?;
    let settings = ZammadSettings::new(Box::new(FileStore::open_default()?));

    Ok(AppContext::new(
        settings,
        Arc::new(GitCli::new(cwd)),
        Arc::new(Console),
        Arc::new(|credentials: &config::Credentials| {
            Ok(Arc::new(ZammadClient::new(credentials)?) as Arc<dyn TicketSource>)
        }),
    ))
}
