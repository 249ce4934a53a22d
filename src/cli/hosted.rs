use crate::api::hosted::gateway_url;
use crate::api::models::HostedUser;
use crate::api::ApiClient;
use crate::usage::format_file_size;

use super::CliResult;

pub async fn run_hosted(client: &ApiClient, output: &str) -> CliResult {
    let users = client.hosted_users().await?;

    match output {
        "json" => println!("{}", serde_json::to_string_pretty(&users)?),
        _ => print_hosted_list(&users),
    }
    Ok(())
}

fn print_hosted_list(users: &[HostedUser]) {
    if users.is_empty() {
        println!("No hosted users found");
        return;
    }

    for user in users {
        println!("{}", user.name);
        println!("  Node: {}", user.node);
        println!("  Hash: {}", user.hash);
        println!("  Size: {}", format_file_size(user.file_size as f64));
        println!("  View: {}", gateway_url(&user.hash));
        println!();
    }

    println!("{} hosted item(s)", users.len());
}
