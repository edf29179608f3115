//! # coolify-api
//!
//! Client for the REST API of a self-hosted [Coolify](https://coolify.io)
//! instance, plus the raw-data endpoint of the Traefik dashboard that
//! usually fronts it.
//!
//! The crate has two layers:
//!
//! 1. **Transport** — [`CoolifyClient`] builds authenticated requests
//!    against `<server>/api/v1`, classifies HTTP and network failures, and
//!    decodes bodies tolerantly (several Coolify endpoints return plain
//!    text on a 2xx).
//! 2. **Normalizers** — pure functions that reconcile the shape variance
//!    in upstream payloads: deployment logs arriving as a serialized JSON
//!    array, a bare string, or nothing at all; deployment listings wrapped
//!    in an envelope or not; Traefik routers/services keyed by
//!    `"<name>@<provider>"` that have to be flattened into ordered lists.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use coolify_api::{CoolifyClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::new("https://coolify.example.com", "token");
//!     let client = CoolifyClient::new(Arc::new(creds));
//!
//!     for project in client.list_projects().await? {
//!         println!("{} ({})", project.name, project.uuid);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod credentials;
pub mod deployment;
pub mod error;
pub mod normalize;
pub mod project;
pub mod resource;
pub mod server;
pub mod status;
pub mod traefik;

// Re-export primary types
pub use client::{ActionResponse, CoolifyClient, DEFAULT_DEPLOYMENT_PAGE, DEFAULT_LOG_LINES};
pub use credentials::{CredentialStore, Credentials};
pub use deployment::Deployment;
pub use error::{CoolifyError, Result};
pub use normalize::{parse_deployment_logs, NO_LOGS_FALLBACK};
pub use project::{Environment, Project};
pub use resource::{
    Application, Database, DatabaseDetail, Service, ServiceApplication, ServiceDatabase,
    ServiceDetail,
};
pub use server::{Server, ServerProxy, ServerSettings};
pub use status::{
    classify_deployment, classify_proxy, classify_resource, classify_traefik,
    extract_host_from_rule, proxy_status_text, DeploymentClass, HealthClass, ResourceClass,
};
pub use traefik::{TraefikClient, TraefikRouter, TraefikService, TraefikSnapshot};
