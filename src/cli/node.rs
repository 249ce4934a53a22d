use crate::api::models::EnrichedNode;
use crate::api::{ApiClient, ApiError};
use crate::usage::format_usage;

use super::CliResult;

/// Node management commands for fleet administration.
#[derive(clap::Subcommand, Debug)]
pub enum NodeCommands {
    /// List nodes with their storage usage
    Ls {
        /// Output format: table|json
        #[arg(long, value_name = "FORMAT", default_value = "table")]
        output: String,
    },
    /// Register a new node with the backend
    Add {
        /// Display name (also used as the Docker container name)
        #[arg(long)]
        name: String,
        /// URL where the IPFS node is reachable, e.g. http://localhost:5001
        #[arg(long)]
        url: String,
    },
    /// Remove a node from the fleet
    Rm {
        /// Node id as shown by `nodes ls`
        id: String,
    },
    /// Print the number of nodes in the fleet
    Count,
}

pub async fn run_nodes(client: &ApiClient, cmd: NodeCommands) -> CliResult {
    match cmd {
        NodeCommands::Ls { output } => run_node_list(client, &output).await,
        NodeCommands::Add { name, url } => run_node_add(client, &name, &url).await,
        NodeCommands::Rm { id } => run_node_rm(client, &id).await,
        NodeCommands::Count => run_node_count(client).await,
    }
}

async fn run_node_list(client: &ApiClient, output: &str) -> CliResult {
    let nodes = client.fetch_enriched_nodes().await?;

    match output {
        "json" => println!("{}", serde_json::to_string_pretty(&nodes)?),
        _ => print_nodes_table(&nodes),
    }
    Ok(())
}

async fn run_node_add(client: &ApiClient, name: &str, url: &str) -> CliResult {
    client.add_node(name, url).await?;
    println!("IPFS node \"{name}\" added successfully.");
    Ok(())
}

async fn run_node_rm(client: &ApiClient, id: &str) -> CliResult {
    // Node 0 is the bootstrap node the rest of the fleet peers against.
    if id == "0" {
        return Err(Box::new(ApiError::MutationFailed(
            "the bootstrap node (id 0) cannot be removed".to_string(),
        )));
    }

    client.delete_node(id).await?;
    println!("Node {id} deleted.");
    Ok(())
}

async fn run_node_count(client: &ApiClient) -> CliResult {
    let count = client.count_nodes().await?;
    println!("{count}");
    Ok(())
}

fn print_nodes_table(nodes: &[EnrichedNode]) {
    if nodes.is_empty() {
        println!("No nodes available");
        return;
    }

    // Size the id and name columns to their longest entries.
    let id_width = nodes
        .iter()
        .map(|n| n.node.id.len())
        .max()
        .unwrap_or(2)
        .max(2);
    let name_width = nodes
        .iter()
        .map(|n| n.node.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "{:<id_width$}  {:<name_width$}  {:<10}  {:<28}  {}",
        "ID", "NAME", "TYPE", "URL", "STORAGE"
    );
    println!("{}", "-".repeat(id_width + name_width + 10 + 28 + 15));
    for n in nodes {
        let storage = n
            .usage
            .as_deref()
            .map(format_usage)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<id_width$}  {:<name_width$}  {:<10}  {:<28}  {}",
            n.node.id, n.node.name, n.node.node_type, n.node.url, storage
        );
    }

    println!();
    println!(
        "Summary: {} nodes, {} with usage data",
        nodes.len(),
        nodes.iter().filter(|n| n.usage.is_some()).count()
    );
}
