//! Servers managed by the Coolify instance.

use serde::{Deserialize, Serialize};

/// A server Coolify deploys to, with its proxy and reachability state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    #[serde(default)]
    pub id: i64,
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub port: u16,

    #[serde(default)]
    pub proxy: Option<ServerProxy>,
    #[serde(default)]
    pub settings: Option<ServerSettings>,
}

/// Proxy process state on a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerProxy {
    /// Proxy flavor, in practice `traefik`.
    #[serde(default, rename = "type")]
    pub proxy_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Server-level flags reported by Coolify's health checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default)]
    pub is_reachable: Option<bool>,
    #[serde(default)]
    pub is_usable: Option<bool>,
}
