//! Command-line surface of the dashboard.
//!
//! Each subcommand is the terminal rendition of one dashboard view:
//! `nodes` covers the node-management tab, `hosted` the pinned-content
//! listing.

pub mod hosted;
pub mod node;

use clap::{Parser, Subcommand};

use crate::api::ApiClient;
use crate::config::DashboardConfig;

pub type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal dashboard for an IPFS node fleet", long_about = None)]
pub struct Args {
    /// Backend API base URL (overrides API_URL and the config file)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage fleet nodes
    #[command(subcommand)]
    Nodes(node::NodeCommands),
    /// List content pinned on the fleet
    Hosted {
        /// Output format: table|json
        #[arg(long, value_name = "FORMAT", default_value = "table")]
        output: String,
    },
}

pub async fn run(args: Args) -> CliResult {
    let config = DashboardConfig::load(args.api_url.as_deref(), args.config.as_deref())?;
    let client = ApiClient::new(config.api_url);

    match args.cmd {
        Command::Nodes(cmd) => node::run_nodes(&client, cmd).await,
        Command::Hosted { output } => hosted::run_hosted(&client, &output).await,
    }
}
