//! Traefik dashboard snapshot.
//!
//! A separate code path from [`crate::client::CoolifyClient`]: the
//! dashboard lives on a different host and uses HTTP Basic auth instead
//! of a bearer token. The rawdata endpoint returns routers and services
//! as maps keyed by `"<name>@<provider>"`; they are flattened into
//! ordered lists here, with internally-generated entries dropped.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::credentials::CredentialStore;
use crate::error::{CoolifyError, Result};

/// Provider value marking configuration Traefik generated for itself
/// rather than anything user-supplied.
pub const INTERNAL_PROVIDER: &str = "internal";

/// A routing rule entry from the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraefikRouter {
    /// Map key the entry was filed under, e.g. `"my-app@docker"`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entry_points: Vec<String>,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub rule: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub middlewares: Vec<String>,
    #[serde(default)]
    pub tls: Option<TraefikTls>,
}

/// TLS settings attached to a router.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraefikTls {
    #[serde(default)]
    pub cert_resolver: Option<String>,
}

/// A backend service entry from the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraefikService {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default, rename = "type")]
    pub service_type: Option<String>,
    #[serde(default)]
    pub load_balancer: Option<TraefikLoadBalancer>,
    /// Per-backend health, keyed by backend URL.
    #[serde(default)]
    pub server_status: std::collections::BTreeMap<String, String>,
    #[serde(default)]
    pub used_by: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraefikLoadBalancer {
    #[serde(default)]
    pub servers: Vec<TraefikBackend>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraefikBackend {
    pub url: String,
}

/// Flattened point-in-time dump of the routing table.
#[derive(Debug, Clone, Default)]
pub struct TraefikSnapshot {
    pub routers: Vec<TraefikRouter>,
    pub services: Vec<TraefikService>,
}

/// The rawdata payload as Traefik serves it: keyed maps. `serde_json`'s
/// `preserve_order` feature keeps the enumeration order of the source.
#[derive(Debug, Default, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    routers: Map<String, Value>,
    #[serde(default)]
    services: Map<String, Value>,
}

/// Flatten a keyed map into records tagged with their key as `name`,
/// skipping internally-generated entries. Source order is preserved.
fn flatten_keyed<T: DeserializeOwned>(map: Map<String, Value>) -> Result<Vec<T>> {
    let mut out = Vec::new();
    for (name, mut value) in map {
        let provider = value.get("provider").and_then(Value::as_str);
        if provider == Some(INTERNAL_PROVIDER) {
            continue;
        }
        if let Some(fields) = value.as_object_mut() {
            fields.insert("name".to_string(), Value::String(name));
        }
        out.push(serde_json::from_value(value)?);
    }
    Ok(out)
}

/// Client for the Traefik dashboard API.
#[derive(Clone)]
pub struct TraefikClient {
    http: Client,
    store: Arc<dyn CredentialStore>,
}

impl TraefikClient {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            http: Client::new(),
            store,
        }
    }

    pub fn with_http_client(store: Arc<dyn CredentialStore>, http: Client) -> Self {
        Self { http, store }
    }

    /// Fetch and flatten `GET <dashboard>/api/rawdata`.
    ///
    /// Returns an empty snapshot without touching the network when no
    /// dashboard URL is configured. Basic auth is attached only when both
    /// username and password are present; a lone half of the pair is
    /// ignored.
    pub async fn fetch_raw_data(&self) -> Result<TraefikSnapshot> {
        let creds = self.store.credentials();
        let Some(base) = creds.traefik_base() else {
            return Ok(TraefikSnapshot::default());
        };

        let url = format!("{base}/api/rawdata");
        tracing::debug!(%url, "Traefik rawdata request");

        let mut request = self.http.get(&url);
        if let (Some(user), Some(password)) = (
            creds.traefik_user.as_deref().filter(|u| !u.is_empty()),
            creds.traefik_password.as_deref().filter(|p| !p.is_empty()),
        ) {
            let token = BASE64.encode(format!("{user}:{password}"));
            request = request.header(header::AUTHORIZATION, format!("Basic {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(CoolifyError::Traefik {
                status: status.as_u16(),
                body: text,
            });
        }

        let raw: RawSnapshot = serde_json::from_str(&text)?;
        Ok(TraefikSnapshot {
            routers: flatten_keyed(raw.routers)?,
            services: flatten_keyed(raw.services)?,
        })
    }
}

impl std::fmt::Debug for TraefikClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraefikClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_tags_name_and_drops_internal() {
        let raw: RawSnapshot = serde_json::from_value(json!({
            "routers": {
                "my-app@docker": {
                    "entryPoints": ["websecure"],
                    "service": "my-app",
                    "rule": "Host(`app.example.com`)",
                    "status": "enabled",
                    "provider": "docker",
                },
                "api@internal": {
                    "entryPoints": ["traefik"],
                    "service": "api@internal",
                    "rule": "PathPrefix(`/api`)",
                    "status": "enabled",
                    "provider": "internal",
                },
            },
        }))
        .unwrap();

        let routers: Vec<TraefikRouter> = flatten_keyed(raw.routers).unwrap();
        assert_eq!(routers.len(), 1);
        assert_eq!(routers[0].name, "my-app@docker");
        assert_eq!(routers[0].rule, "Host(`app.example.com`)");
        assert_eq!(routers[0].entry_points, vec!["websecure"]);
    }

    #[test]
    fn test_flatten_preserves_source_order() {
        let raw: RawSnapshot = serde_json::from_value(json!({
            "routers": {
                "zeta@docker": { "provider": "docker" },
                "alpha@docker": { "provider": "docker" },
                "mid@docker": { "provider": "docker" },
            },
        }))
        .unwrap();

        let routers: Vec<TraefikRouter> = flatten_keyed(raw.routers).unwrap();
        let names: Vec<&str> = routers.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zeta@docker", "alpha@docker", "mid@docker"]);
    }

    #[test]
    fn test_service_decode() {
        let raw: RawSnapshot = serde_json::from_value(json!({
            "services": {
                "my-svc@docker": {
                    "status": "enabled",
                    "provider": "docker",
                    "loadBalancer": { "servers": [{ "url": "http://10.0.0.1:8080" }] },
                    "serverStatus": { "http://10.0.0.1:8080": "UP" },
                    "usedBy": ["my-app@docker"],
                },
            },
        }))
        .unwrap();

        let services: Vec<TraefikService> = flatten_keyed(raw.services).unwrap();
        assert_eq!(services.len(), 1);
        let svc = &services[0];
        assert_eq!(svc.name, "my-svc@docker");
        assert_eq!(svc.load_balancer.as_ref().unwrap().servers[0].url, "http://10.0.0.1:8080");
        assert_eq!(svc.server_status["http://10.0.0.1:8080"], "UP");
        assert_eq!(svc.used_by, vec!["my-app@docker"]);
    }
}
