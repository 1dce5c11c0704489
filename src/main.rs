//! Launchpad Terminal - project detail pages in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use launchpad_app::config::{default_config_path, load_settings};
use launchpad_core::prelude::*;

/// Launchpad Terminal - inspect a launchpad listing and your allocations
#[derive(Parser, Debug)]
#[command(name = "lpad")]
#[command(about = "Inspect a launchpad listing and your allocations", long_about = None)]
struct Args {
    /// Project page path, e.g. /projects/<id>
    #[arg(value_name = "ROUTE")]
    route: String,

    /// Connected wallet account; overrides `wallet.account_id`
    #[arg(long, value_name = "ACCOUNT")]
    account: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    launchpad_terminal::init()?;

    let config_path = args.config.unwrap_or_else(default_config_path);
    let mut settings = load_settings(&config_path);
    if let Some(account) = args.account {
        settings.wallet.account_id = Some(account);
    }

    if args.headless {
        launchpad_terminal::run_headless(&args.route, settings).await
    } else {
        launchpad_terminal::run_with_route(&args.route, settings).await
    }
}
