//! Applications, services, and databases — the resources with a
//! start/stop/restart lifecycle.
//!
//! Every record keeps its `status` as the raw upstream string. The
//! vocabulary is open (`"running:healthy"`, `"exited"`, ...), so display
//! code classifies it with [`crate::status::classify_resource`] but never
//! discards the original text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An application deployed from a git repository or an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fqdn: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub git_repository: Option<String>,
    #[serde(default)]
    pub git_branch: Option<String>,
    #[serde(default)]
    pub build_pack: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A one-click service (compose stack) as returned by the listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A container belonging to a service stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceApplication {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub fqdn: Option<String>,
    #[serde(default)]
    pub ports: Option<String>,
    #[serde(default)]
    pub last_online_at: Option<String>,
}

/// A database container belonging to a service stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDatabase {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub last_online_at: Option<String>,
}

/// Service detail: the listing fields plus nested containers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: Service,

    #[serde(default)]
    pub applications: Vec<ServiceApplication>,
    #[serde(default)]
    pub databases: Vec<ServiceDatabase>,
}

/// A standalone database resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Engine, e.g. `standalone-postgresql`.
    #[serde(default, rename = "type")]
    pub database_type: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Database detail: connection and limit fields on top of [`Database`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseDetail {
    #[serde(flatten)]
    pub database: Database,

    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub public_port: Option<u16>,
    #[serde(default)]
    pub internal_db_url: Option<String>,
    #[serde(default)]
    pub external_db_url: Option<String>,
    #[serde(default)]
    pub limits_memory: Option<String>,
    #[serde(default)]
    pub limits_cpus: Option<String>,
}
