//! `coolctl server` — servers Coolify deploys to.

use clap::{Args, Subcommand};
use colored::Colorize;
use coolify_api::{classify_proxy, proxy_status_text, CoolifyClient};

use super::{dash, health_cell, rule};

#[derive(Subcommand)]
pub enum ServerCommands {
    /// List all servers.
    List,

    /// Show one server.
    Get(UuidArgs),

    /// Trigger a server validation (also checks the proxy).
    Validate(UuidArgs),
}

#[derive(Args)]
pub struct UuidArgs {
    /// Server UUID.
    pub uuid: String,
}

pub async fn execute(cmd: ServerCommands, client: &CoolifyClient) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::List => list(client).await,
        ServerCommands::Get(args) => get(args, client).await,
        ServerCommands::Validate(args) => validate(args, client).await,
    }
}

async fn list(client: &CoolifyClient) -> anyhow::Result<()> {
    let servers = client.list_servers().await?;
    if servers.is_empty() {
        println!("(no servers)");
        return Ok(());
    }

    println!(
        "{:<38} {:<20} {:<22} PROXY",
        "UUID".bold(),
        "NAME".bold(),
        "ADDRESS".bold()
    );
    println!("{}", rule(96).dimmed());
    for server in &servers {
        let address = format!("{}@{}:{}", server.user, server.ip, server.port);
        println!(
            "{:<38} {:<20} {:<22} {}",
            server.uuid,
            server.name,
            address,
            health_cell(classify_proxy(server), &proxy_status_text(server))
        );
    }
    Ok(())
}

async fn get(args: UuidArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    let server = client.get_server(&args.uuid).await?;

    println!("{} {}", server.name.bold(), server.uuid.dimmed());
    if let Some(description) = &server.description {
        println!("{description}");
    }
    println!("address:   {}@{}:{}", server.user, server.ip, server.port);

    let reachable = server
        .settings
        .as_ref()
        .and_then(|s| s.is_reachable)
        .unwrap_or(false);
    println!(
        "reachable: {}",
        if reachable { "yes".green() } else { "no".red() }
    );

    let proxy_type = server
        .proxy
        .as_ref()
        .and_then(|p| p.proxy_type.clone());
    println!(
        "proxy:     {} ({})",
        health_cell(classify_proxy(&server), &proxy_status_text(&server)),
        dash(&proxy_type)
    );
    Ok(())
}

async fn validate(args: UuidArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    let response = client.validate_server(&args.uuid).await?;
    match response.message {
        Some(message) => println!("{message}"),
        None => println!("validation triggered for {}", args.uuid),
    }
    Ok(())
}
