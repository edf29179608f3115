//! CLI command definitions and dispatch.

pub mod application;
pub mod database;
pub mod deployment;
pub mod project;
pub mod proxy;
pub mod server;
pub mod service;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use colored::{ColoredString, Colorize};
use coolify_api::{
    classify_deployment, classify_resource, CoolifyClient, CredentialStore, Credentials,
    DeploymentClass, HealthClass, ResourceClass, TraefikClient,
};

/// coolctl — manage a self-hosted Coolify instance from the terminal.
#[derive(Parser)]
#[command(
    name = "coolctl",
    version,
    about = "Browse and control a self-hosted Coolify instance",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Coolify server URL (overrides COOLIFY_URL).
    #[arg(long, global = true, env = "COOLIFY_URL")]
    pub url: Option<String>,

    /// API token (overrides COOLIFY_TOKEN).
    #[arg(long, global = true, env = "COOLIFY_TOKEN")]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Projects and their environments.
    #[command(subcommand)]
    Project(project::ProjectCommands),

    /// Applications: list, logs, lifecycle, deployment history.
    #[command(subcommand)]
    App(application::AppCommands),

    /// Deployment runs: list, inspect logs, cancel.
    #[command(subcommand)]
    Deployment(deployment::DeploymentCommands),

    /// Servers Coolify deploys to.
    #[command(subcommand)]
    Server(server::ServerCommands),

    /// One-click services (compose stacks).
    #[command(subcommand)]
    Service(service::ServiceCommands),

    /// Standalone databases.
    #[command(subcommand)]
    Database(database::DatabaseCommands),

    /// Proxy overview: servers plus the Traefik routing table.
    Proxy,

    /// Show the Coolify version.
    Version,

    /// Print a browser-openable URL into the Coolify web UI.
    Open(OpenArgs),
}

#[derive(Args)]
pub struct OpenArgs {
    /// UI path, e.g. /project/<uuid>.
    pub path: String,
}

/// Credential store backed by CLI flags and the process environment.
/// The environment is re-read on every request, so exported changes take
/// effect without restarting anything that holds a client.
struct EnvCredentials {
    url_override: Option<String>,
    token_override: Option<String>,
}

impl CredentialStore for EnvCredentials {
    fn credentials(&self) -> Credentials {
        Credentials {
            server_url: self
                .url_override
                .clone()
                .or_else(|| std::env::var("COOLIFY_URL").ok())
                .unwrap_or_default(),
            api_token: self
                .token_override
                .clone()
                .or_else(|| std::env::var("COOLIFY_TOKEN").ok())
                .unwrap_or_default(),
            traefik_url: std::env::var("TRAEFIK_URL").ok(),
            traefik_user: std::env::var("TRAEFIK_USER").ok(),
            traefik_password: std::env::var("TRAEFIK_PASSWORD").ok(),
        }
    }
}

/// Execute the CLI command.
pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let store: Arc<dyn CredentialStore> = Arc::new(EnvCredentials {
        url_override: cli.url,
        token_override: cli.token,
    });
    let client = CoolifyClient::new(store.clone());

    match cli.command {
        Commands::Project(cmd) => project::execute(cmd, &client).await,
        Commands::App(cmd) => application::execute(cmd, &client).await,
        Commands::Deployment(cmd) => deployment::execute(cmd, &client).await,
        Commands::Server(cmd) => server::execute(cmd, &client).await,
        Commands::Service(cmd) => service::execute(cmd, &client).await,
        Commands::Database(cmd) => database::execute(cmd, &client).await,
        Commands::Proxy => proxy::execute(&client, &TraefikClient::new(store)).await,
        Commands::Version => {
            let version = client.get_version().await?;
            println!("{version}");
            Ok(())
        }
        Commands::Open(args) => {
            println!("{}", store.credentials().web_url(&args.path));
            Ok(())
        }
    }
}

// ── Shared rendering helpers ─────────────────────────────────

pub(crate) fn resource_status_cell(status: &str) -> ColoredString {
    let text = if status.is_empty() { "unknown" } else { status };
    match classify_resource(status) {
        ResourceClass::Healthy => text.green(),
        ResourceClass::Stopped => text.red(),
        ResourceClass::Transitioning => text.yellow(),
        ResourceClass::Unknown => text.dimmed(),
    }
}

pub(crate) fn deployment_status_cell(status: &str) -> ColoredString {
    let text = if status.is_empty() { "unknown" } else { status };
    match classify_deployment(status) {
        DeploymentClass::Success => text.green(),
        DeploymentClass::Failed => text.red(),
        DeploymentClass::Pending => text.yellow(),
        DeploymentClass::Cancelled => text.magenta(),
        DeploymentClass::Unknown => text.dimmed(),
    }
}

pub(crate) fn health_cell(class: HealthClass, text: &str) -> ColoredString {
    match class {
        HealthClass::Healthy => text.green(),
        HealthClass::Failed => text.red(),
        HealthClass::Unknown => text.dimmed(),
    }
}

pub(crate) fn short_date(timestamp: &Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

pub(crate) fn dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

pub(crate) fn rule(width: usize) -> String {
    "─".repeat(width)
}
