//! `coolctl app` — applications and their deployment history.

use clap::{Args, Subcommand};
use colored::Colorize;
use coolify_api::CoolifyClient;

use super::{dash, deployment_status_cell, resource_status_cell, rule, short_date};

#[derive(Subcommand)]
pub enum AppCommands {
    /// List all applications.
    List,

    /// Show one application.
    Get(UuidArgs),

    /// Tail the application's runtime logs.
    Logs(LogsArgs),

    /// Start the application.
    Start(UuidArgs),

    /// Stop the application.
    Stop(UuidArgs),

    /// Restart the application.
    Restart(UuidArgs),

    /// Deployment history of the application.
    Deployments(DeploymentsArgs),
}

#[derive(Args)]
pub struct UuidArgs {
    /// Application UUID.
    pub uuid: String,
}

#[derive(Args)]
pub struct LogsArgs {
    /// Application UUID.
    pub uuid: String,

    /// Number of log lines to fetch.
    #[arg(long, short = 'n')]
    pub lines: Option<u32>,
}

#[derive(Args)]
pub struct DeploymentsArgs {
    /// Application UUID.
    pub uuid: String,

    /// Number of records to skip.
    #[arg(long, default_value_t = 0)]
    pub skip: u32,

    /// Number of records to fetch.
    #[arg(long, default_value_t = 20)]
    pub take: u32,
}

pub async fn execute(cmd: AppCommands, client: &CoolifyClient) -> anyhow::Result<()> {
    match cmd {
        AppCommands::List => list(client).await,
        AppCommands::Get(args) => get(args, client).await,
        AppCommands::Logs(args) => logs(args, client).await,
        AppCommands::Start(args) => lifecycle(client.start_application(&args.uuid).await, "start"),
        AppCommands::Stop(args) => lifecycle(client.stop_application(&args.uuid).await, "stop"),
        AppCommands::Restart(args) => {
            lifecycle(client.restart_application(&args.uuid).await, "restart")
        }
        AppCommands::Deployments(args) => deployments(args, client).await,
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
    let apps = client.list_applications().await?;
    if apps.is_empty() {
        println!("(no applications)");
        return Ok(());
    }

    println!(
        "{:<38} {:<24} {:<20} FQDN",
        "UUID".bold(),
        "NAME".bold(),
        "STATUS".bold()
    );
    println!("{}", rule(100).dimmed());
    for app in &apps {
        println!(
            "{:<38} {:<24} {:<20} {}",
            app.uuid,
            app.name,
            resource_status_cell(&app.status),
            dash(&app.fqdn)
        );
    }
    Ok(())
}

async fn get(args: UuidArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    let app = client.get_application(&args.uuid).await?;

    println!("{} {}", app.name.bold(), app.uuid.dimmed());
    println!("status:     {}", resource_status_cell(&app.status));
    println!("fqdn:       {}", dash(&app.fqdn));
    println!("repository: {}", dash(&app.git_repository));
    println!("branch:     {}", dash(&app.git_branch));
    println!("build pack: {}", dash(&app.build_pack));
    println!("updated:    {}", short_date(&app.updated_at));
    Ok(())
}

async fn logs(args: LogsArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    let lines = client.get_application_logs(&args.uuid, args.lines).await?;
    if lines.is_empty() {
        println!("(no logs)");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

async fn deployments(args: DeploymentsArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    let deployments = client
        .list_deployments_by_app(&args.uuid, Some(args.skip), Some(args.take))
        .await?;
    if deployments.is_empty() {
        println!("(no deployments)");
        return Ok(());
    }

    println!(
        "{:<38} {:<14} {:<18} COMMIT",
        "UUID".bold(),
        "STATUS".bold(),
        "CREATED".bold()
    );
    println!("{}", rule(90).dimmed());
    for d in &deployments {
        let commit = d.commit.as_deref().map(|c| &c[..c.len().min(8)]).unwrap_or("-");
        println!(
            "{:<38} {:<14} {:<18} {}",
            d.deployment_uuid,
            deployment_status_cell(&d.status),
            short_date(&d.created_at),
            commit
        );
    }
    Ok(())
}
