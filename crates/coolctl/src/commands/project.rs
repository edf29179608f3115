//! `coolctl project` — projects and their environments.

use clap::{Args, Subcommand};
use colored::Colorize;
use coolify_api::CoolifyClient;

use super::{dash, resource_status_cell, rule};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects.
    List,

    /// Show one project with its environments.
    Get(GetArgs),

    /// Show an environment with its applications, services and databases.
    Env(EnvArgs),
}

#[derive(Args)]
pub struct GetArgs {
    /// Project UUID.
    pub uuid: String,
}

#[derive(Args)]
pub struct EnvArgs {
    /// Project UUID.
    pub uuid: String,

    /// Environment name, e.g. "production".
    pub name: String,
}

pub async fn execute(cmd: ProjectCommands, client: &CoolifyClient) -> anyhow::Result<()> {
    match cmd {
        ProjectCommands::List => list(client).await,
        ProjectCommands::Get(args) => get(args, client).await,
        ProjectCommands::Env(args) => environment(args, client).await,
    }
}

async fn list(client: &CoolifyClient) -> anyhow::Result<()> {
    let projects = client.list_projects().await?;
    if projects.is_empty() {
        println!("(no projects)");
        return Ok(());
    }

    println!("{:<38} {:<24} DESCRIPTION", "UUID".bold(), "NAME".bold());
    println!("{}", rule(80).dimmed());
    for project in &projects {
        println!(
            "{:<38} {:<24} {}",
            project.uuid,
            project.name,
            dash(&project.description)
        );
    }
    Ok(())
}

async fn get(args: GetArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    let project = client.get_project(&args.uuid).await?;

    println!("{} {}", project.name.bold(), project.uuid.dimmed());
    if let Some(description) = &project.description {
        println!("{description}");
    }

    if project.environments.is_empty() {
        println!("\n(no environments)");
    } else {
        println!("\n{}", "ENVIRONMENTS".bold());
        for env in &project.environments {
            println!("  {:<24} {}", env.name, env.uuid.dimmed());
        }
    }
    Ok(())
}

async fn environment(args: EnvArgs, client: &CoolifyClient) -> anyhow::Result<()> {
    let env = client.get_environment(&args.uuid, &args.name).await?;

    println!("{} {}", env.name.bold(), env.uuid.dimmed());

    if !env.applications.is_empty() {
        println!("\n{}", "APPLICATIONS".bold());
        for app in &env.applications {
            println!(
                "  {:<38} {:<24} {}",
                app.uuid,
                app.name,
                resource_status_cell(&app.status)
            );
        }
    }
    if !env.services.is_empty() {
        println!("\n{}", "SERVICES".bold());
        for service in &env.services {
            println!(
                "  {:<38} {:<24} {}",
                service.uuid,
                service.name,
                resource_status_cell(&service.status)
            );
        }
    }
    if !env.databases.is_empty() {
        println!("\n{}", "DATABASES".bold());
        for db in &env.databases {
            println!(
                "  {:<38} {:<24} {}",
                db.uuid,
                db.name,
                resource_status_cell(&db.status)
            );
        }
    }
    if env.applications.is_empty() && env.services.is_empty() && env.databases.is_empty() {
        println!("\n(empty environment)");
    }
    Ok(())
}
