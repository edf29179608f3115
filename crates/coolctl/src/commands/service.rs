//! `coolctl service` — one-click services (compose stacks).

use clap::{Args, Subcommand};
use colored::Colorize;
use coolify_api::CoolifyClient;

use super::{dash, resource_status_cell, rule};

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// List all services.
    List,

    /// Show one service with its containers.
    Get(UuidArgs),

    /// Start the service.
    Start(UuidArgs),

    /// Stop the service.
    Stop(UuidArgs),

    /// Restart the service.
    Restart(UuidArgs),
}

#[derive(Args)]
pub struct UuidArgs {
    /// Service UUID.
    pub uuid: String,
}

pub async fn execute(cmd: ServiceCommands, client: &CoolifyClient) -> anyhow::Result<()> {
    match cmd {
        ServiceCommands::List => list(client).await,
        ServiceCommands::Get(args) => get(args, client).await,
        ServiceCommands::Start(args) => lifecycle(client.start_service(&args.uuid).await, "start"),
        ServiceCommands::Stop(args) => lifecycle(client.stop_service(&args.uuid).await, "stop"),
        ServiceCommands::Restart(args) => {
            lifecycle(client.restart_service(&args.uuid).await, "restart")
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

async fn list(client: &CoolifyClient) -> anyhow::Result<()> {
    let services = client.list_services().await?;
    if services.is_empty() {
        println!("(no services)");
        return Ok(());
    }

    println!(
        "{:<38} {:<24} {:<20} TYPE",
        "UUID".bold(),
        "NAME".bold(),
        "STATUS".bold()
    );
    println!("{}", rule(96).dimmed());
    for service in &services {
        println!(
            "{:<38} {:<24} {:<20} {}",
            service.uuid,
            service.name,
            resource_status_cell(&service.status),
            dash(&service.service_type)
        );
    }
    Ok(())
}

async fn get(args: UuidArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    let detail = client.get_service(&args.uuid).await?;
    let service = &detail.service;

    println!("{} {}", service.name.bold(), service.uuid.dimmed());
    println!("status: {}", resource_status_cell(&service.status));
    println!("type:   {}", dash(&service.service_type));

    if !detail.applications.is_empty() {
        println!("\n{}", "CONTAINERS".bold());
        for app in &detail.applications {
            println!(
                "  {:<24} {:<20} {}",
                app.name,
                resource_status_cell(&app.status),
                dash(&app.image)
            );
        }
    }
    if !detail.databases.is_empty() {
        println!("\n{}", "DATABASES".bold());
        for db in &detail.databases {
            println!(
                "  {:<24} {:<20} {}",
                db.name,
                resource_status_cell(&db.status),
                dash(&db.image)
            );
        }
    }
    Ok(())
}
