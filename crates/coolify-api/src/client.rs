//! Coolify client — authenticated requests against `<server>/api/v1`.
//!
//! One generic request primitive plus a thin typed wrapper per remote
//! operation. The primitive decodes tolerantly: some endpoints answer a
//! 2xx with plain text (the bare version string, log blobs), so malformed
//! JSON on success is never an error.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::credentials::CredentialStore;
use crate::deployment::Deployment;
use crate::error::{CoolifyError, Result};
use crate::normalize;
use crate::project::{Environment, Project};
use crate::resource::{Application, DatabaseDetail, Service, ServiceDetail};
use crate::server::Server;

/// Default `lines` parameter for application logs.
pub const DEFAULT_LOG_LINES: u32 = 100;

/// Default `take` parameter for per-application deployment listings.
pub const DEFAULT_DEPLOYMENT_PAGE: u32 = 20;

/// Response of lifecycle operations (`start`, `stop`, `restart`, ...).
/// Some instances answer these with an empty body, hence the default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Client for the Coolify REST API.
///
/// Credentials are re-read from the [`CredentialStore`] on every call, so
/// a changed token or server URL takes effect on the next request. The
/// client holds no other state; callers may clone it and fan out
/// concurrent requests freely.
#[derive(Clone)]
pub struct CoolifyClient {
    http: Client,
    store: Arc<dyn CredentialStore>,
}

impl CoolifyClient {
    /// Create a client with reqwest's default transport settings (no
    /// explicit timeout).
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            http: Client::new(),
            store,
        }
    }

    /// Create a client around a pre-built HTTP client.
    pub fn with_http_client(store: Arc<dyn CredentialStore>, http: Client) -> Self {
        Self { http, store }
    }

    /// Create a client with a request timeout.
    pub fn with_timeout(store: Arc<dyn CredentialStore>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, store })
    }

    // ── Request primitive ────────────────────────────────────

    /// Execute one authenticated request and decode the body tolerantly.
    ///
    /// Non-2xx responses fail with [`CoolifyError::Api`] carrying the body
    /// text. On success: empty body decodes to `{}`, valid JSON to its
    /// value, and anything else to a raw `Value::String`.
    pub async fn request(&self, path: &str, method: Method, body: Option<&Value>) -> Result<Value> {
        let creds = self.store.credentials();
        let url = format!("{}{}", creds.api_base(), path);
        tracing::debug!(%method, %url, "Coolify API request");

        let mut request = self
            .http
            .request(method, &url)
            .header(header::AUTHORIZATION, format!("Bearer {}", creds.api_token))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(CoolifyError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(text)),
        }
    }

    async fn get(&self, path: &str) -> Result<Value> {
        self.request(path, Method::GET, None).await
    }

    async fn post(&self, path: &str) -> Result<Value> {
        self.request(path, Method::POST, None).await
    }

    fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
        Ok(serde_json::from_value(value)?)
    }

    // ── Projects ─────────────────────────────────────────────

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.get("/projects").await.and_then(Self::decode)
    }

    pub async fn get_project(&self, uuid: &str) -> Result<Project> {
        self.get(&format!("/projects/{uuid}"))
            .await
            .and_then(Self::decode)
    }

    /// Environment detail, with the per-engine database arrays merged
    /// into a single `databases` list.
    pub async fn get_environment(&self, project_uuid: &str, env_name: &str) -> Result<Environment> {
        let value = self.get(&format!("/projects/{project_uuid}/{env_name}")).await?;
        let raw: normalize::RawEnvironment = serde_json::from_value(value)?;
        Ok(normalize::merge_environment_databases(raw))
    }

    // ── Applications ─────────────────────────────────────────

    pub async fn list_applications(&self) -> Result<Vec<Application>> {
        self.get("/applications").await.and_then(Self::decode)
    }

    pub async fn get_application(&self, uuid: &str) -> Result<Application> {
        self.get(&format!("/applications/{uuid}"))
            .await
            .and_then(Self::decode)
    }

    /// Runtime logs of an application, normalized to one line per entry.
    pub async fn get_application_logs(
        &self,
        uuid: &str,
        lines: Option<u32>,
    ) -> Result<Vec<String>> {
        let lines = lines.unwrap_or(DEFAULT_LOG_LINES);
        let value = self
            .get(&format!("/applications/{uuid}/logs?lines={lines}"))
            .await?;
        Ok(normalize::normalize_logs(&value))
    }

    pub async fn start_application(&self, uuid: &str) -> Result<ActionResponse> {
        self.post(&format!("/applications/{uuid}/start"))
            .await
            .and_then(Self::decode)
    }

    pub async fn stop_application(&self, uuid: &str) -> Result<ActionResponse> {
        self.post(&format!("/applications/{uuid}/stop"))
            .await
            .and_then(Self::decode)
    }

    pub async fn restart_application(&self, uuid: &str) -> Result<ActionResponse> {
        self.post(&format!("/applications/{uuid}/restart"))
            .await
            .and_then(Self::decode)
    }

    // ── Deployments ──────────────────────────────────────────

    pub async fn list_deployments(&self) -> Result<Vec<Deployment>> {
        self.get("/deployments").await.and_then(Self::decode)
    }

    pub async fn get_deployment(&self, uuid: &str) -> Result<Deployment> {
        self.get(&format!("/deployments/{uuid}"))
            .await
            .and_then(Self::decode)
    }

    /// Deployment history of one application. Depending on the Coolify
    /// version the response is a bare array or a `{ deployments }`
    /// envelope; both normalize to a plain list.
    pub async fn list_deployments_by_app(
        &self,
        app_uuid: &str,
        skip: Option<u32>,
        take: Option<u32>,
    ) -> Result<Vec<Deployment>> {
        let skip = skip.unwrap_or(0);
        let take = take.unwrap_or(DEFAULT_DEPLOYMENT_PAGE);
        let value = self
            .get(&format!(
                "/deployments/applications/{app_uuid}?skip={skip}&take={take}"
            ))
            .await?;
        normalize::normalize_deployment_list(value)
    }

    pub async fn cancel_deployment(&self, uuid: &str) -> Result<()> {
        self.post(&format!("/deployments/{uuid}/cancel")).await?;
        Ok(())
    }

    // ── Servers ──────────────────────────────────────────────

    pub async fn list_servers(&self) -> Result<Vec<Server>> {
        self.get("/servers").await.and_then(Self::decode)
    }

    pub async fn get_server(&self, uuid: &str) -> Result<Server> {
        self.get(&format!("/servers/{uuid}"))
            .await
            .and_then(Self::decode)
    }

    /// Trigger a server validation, which also checks the proxy. Coolify
    /// exposes this as a GET.
    pub async fn validate_server(&self, uuid: &str) -> Result<ActionResponse> {
        self.get(&format!("/servers/{uuid}/validate"))
            .await
            .and_then(Self::decode)
    }

    // ── Services ─────────────────────────────────────────────

    pub async fn list_services(&self) -> Result<Vec<Service>> {
        self.get("/services").await.and_then(Self::decode)
    }

    pub async fn get_service(&self, uuid: &str) -> Result<ServiceDetail> {
        self.get(&format!("/services/{uuid}"))
            .await
            .and_then(Self::decode)
    }

    pub async fn start_service(&self, uuid: &str) -> Result<ActionResponse> {
        self.post(&format!("/services/{uuid}/start"))
            .await
            .and_then(Self::decode)
    }

    pub async fn stop_service(&self, uuid: &str) -> Result<ActionResponse> {
        self.post(&format!("/services/{uuid}/stop"))
            .await
            .and_then(Self::decode)
    }

    pub async fn restart_service(&self, uuid: &str) -> Result<ActionResponse> {
        self.post(&format!("/services/{uuid}/restart"))
            .await
            .and_then(Self::decode)
    }

    // ── Databases ────────────────────────────────────────────

    pub async fn get_database(&self, uuid: &str) -> Result<DatabaseDetail> {
        self.get(&format!("/databases/{uuid}"))
            .await
            .and_then(Self::decode)
    }

    pub async fn start_database(&self, uuid: &str) -> Result<ActionResponse> {
        self.post(&format!("/databases/{uuid}/start"))
            .await
            .and_then(Self::decode)
    }

    pub async fn stop_database(&self, uuid: &str) -> Result<ActionResponse> {
        self.post(&format!("/databases/{uuid}/stop"))
            .await
            .and_then(Self::decode)
    }

    pub async fn restart_database(&self, uuid: &str) -> Result<ActionResponse> {
        self.post(&format!("/databases/{uuid}/restart"))
            .await
            .and_then(Self::decode)
    }

    // ── System ───────────────────────────────────────────────

    /// Coolify version. The endpoint answers with a bare text string,
    /// which the tolerant decoder surfaces unchanged.
    pub async fn get_version(&self) -> Result<String> {
        let value = self.get("/version").await?;
        Ok(match value {
            Value::String(version) => version,
            other => other.to_string(),
        })
    }
}

impl std::fmt::Debug for CoolifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoolifyClient").finish_non_exhaustive()
    }
}
