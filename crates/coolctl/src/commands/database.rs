//! `coolctl database` — standalone databases.

use clap::{Args, Subcommand};
use colored::Colorize;
use coolify_api::CoolifyClient;

use super::{dash, resource_status_cell};

#[derive(Subcommand)]
pub enum DatabaseCommands {
    /// Show one database.
    Get(UuidArgs),

    /// Start the database.
    Start(UuidArgs),

    /// Stop the database.
    Stop(UuidArgs),

    /// Restart the database.
    Restart(UuidArgs),
}

#[derive(Args)]
pub struct UuidArgs {
    /// Database UUID.
    pub uuid: String,
}

pub async fn execute(cmd: DatabaseCommands, client: &CoolifyClient) -> anyhow::Result<()> {
    match cmd {
        DatabaseCommands::Get(args) => get(args, client).await,
        DatabaseCommands::Start(args) => {
            lifecycle(client.start_database(&args.uuid).await, "start")
        }
        DatabaseCommands::Stop(args) => lifecycle(client.stop_database(&args.uuid).await, "stop"),
        DatabaseCommands::Restart(args) => {
            lifecycle(client.restart_database(&args.uuid).await, "restart")
        }
    }
}

fn lifecycle(
    result: coolify_api::Result<coolify_api::ActionResponse>,
    action: &str,
) -> anyhow::Result<()> {
    let response = result?;
    match response.message {
        Some(message) => println!("{message}"),
        None => println!("{action} requested"),
    }
    Ok(())
}

async fn get(args: UuidArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    let detail = client.get_database(&args.uuid).await?;
    let db = &detail.database;

    println!("{} {}", db.name.bold(), db.uuid.dimmed());
    println!("status: {}", resource_status_cell(&db.status));
    println!("engine: {}", dash(&db.database_type));
    println!("image:  {}", dash(&detail.image));

    if detail.is_public {
        let port = detail
            .public_port
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("public: yes (port {port})");
    } else {
        println!("public: no");
    }
    if let Some(url) = &detail.internal_db_url {
        println!("internal url: {url}");
    }
    if let Some(url) = &detail.external_db_url {
        println!("external url: {url}");
    }
    Ok(())
}
