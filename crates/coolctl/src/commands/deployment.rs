//! `coolctl deployment` — deployment runs across all applications.

use clap::{Args, Subcommand};
use colored::Colorize;
use coolify_api::{parse_deployment_logs, CoolifyClient};

use super::{dash, deployment_status_cell, rule, short_date};

#[derive(Subcommand)]
pub enum DeploymentCommands {
    /// List currently running and queued deployments.
    List,

    /// Show one deployment, including its build log.
    Get(UuidArgs),

    /// Cancel a running deployment.
    Cancel(UuidArgs),
}

#[derive(Args)]
pub struct UuidArgs {
    /// Deployment UUID.
    pub uuid: String,
}

pub async fn execute(cmd: DeploymentCommands, client: &CoolifyClient) -> anyhow::Result<()> {
    match cmd {
        DeploymentCommands::List => list(client).await,
        DeploymentCommands::Get(args) => get(args, client).await,
        DeploymentCommands::Cancel(args) => cancel(args, client).await,
    }
}

async fn list(client: &CoolifyClient) -> anyhow::Result<()> {
    let deployments = client.list_deployments().await?;
    if deployments.is_empty() {
        println!("(no active deployments)");
        return Ok(());
    }

    println!(
        "{:<38} {:<24} {:<14} CREATED",
        "UUID".bold(),
        "APPLICATION".bold(),
        "STATUS".bold()
    );
    println!("{}", rule(96).dimmed());
    for d in &deployments {
        println!(
            "{:<38} {:<24} {:<14} {}",
            d.deployment_uuid,
            dash(&d.application_name),
            deployment_status_cell(&d.status),
            short_date(&d.created_at)
        );
    }
    Ok(())
}

async fn get(args: UuidArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    let d = client.get_deployment(&args.uuid).await?;

    println!("{} {}", dash(&d.application_name).bold(), d.deployment_uuid.dimmed());
    println!("status:  {}", deployment_status_cell(&d.status));
    if let Some(commit) = &d.commit {
        println!("commit:  {} {}", commit, dash(&d.commit_message).dimmed());
    }
    println!("created: {}", short_date(&d.created_at));

    println!("\n{}", "LOGS".bold());
    println!("{}", parse_deployment_logs(d.logs.as_deref()));
    Ok(())
}

async fn cancel(args: UuidArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    client.cancel_deployment(&args.uuid).await?;
    println!("cancellation requested for {}", args.uuid);
    Ok(())
}
