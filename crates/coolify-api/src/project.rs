//! Projects and the environments nested inside them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{Application, Database, Service};

/// A Coolify project — the top-level grouping of environments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,

    /// Present on the detail endpoint, absent on the listing.
    #[serde(default)]
    pub environments: Vec<Environment>,
}

/// A named environment (e.g. "production") grouping resources.
///
/// The environment detail endpoint does not return a `databases` field;
/// it splits databases into five per-engine arrays instead. The client
/// merges those into [`databases`](Environment::databases) — see
/// [`crate::normalize`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub databases: Vec<Database>,
}
