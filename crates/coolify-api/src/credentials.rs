//! Credential handling and URL derivation.
//!
//! Credentials are read through a [`CredentialStore`] before every request
//! so that a change in the backing store (environment, preferences file)
//! takes effect on the next call without any invalidation step. Derived
//! values like the API base URL are never cached across calls.

/// Connection settings for a Coolify instance and, optionally, the
/// Traefik dashboard in front of it.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Base URL of the Coolify instance, e.g. `https://coolify.example.com`.
    pub server_url: String,

    /// Static API bearer token.
    pub api_token: String,

    /// Traefik dashboard URL. Unset or empty disables the proxy snapshot.
    pub traefik_url: Option<String>,

    /// Traefik Basic auth username.
    pub traefik_user: Option<String>,

    /// Traefik Basic auth password.
    pub traefik_password: Option<String>,
}

impl Credentials {
    /// Create credentials for the Coolify API alone.
    pub fn new(server_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            api_token: api_token.into(),
            ..Self::default()
        }
    }

    /// Add Traefik dashboard settings.
    pub fn with_traefik(
        mut self,
        url: impl Into<String>,
        user: Option<String>,
        password: Option<String>,
    ) -> Self {
        self.traefik_url = Some(url.into());
        self.traefik_user = user;
        self.traefik_password = password;
        self
    }

    /// API base: server URL with all trailing slashes stripped, plus `/api/v1`.
    pub fn api_base(&self) -> String {
        format!("{}/api/v1", self.server_url.trim_end_matches('/'))
    }

    /// Build a browser-openable URL into the Coolify web UI (no `/api/v1`
    /// segment), e.g. `web_url("/project/abc")`.
    pub fn web_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), path)
    }

    /// Traefik dashboard base with trailing slashes stripped, or `None`
    /// when the proxy feature is not configured.
    pub fn traefik_base(&self) -> Option<String> {
        self.traefik_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
    }
}

/// Source of credentials, consulted synchronously before every request.
pub trait CredentialStore: Send + Sync {
    fn credentials(&self) -> Credentials;
}

/// A fixed set of credentials is itself a store.
impl CredentialStore for Credentials {
    fn credentials(&self) -> Credentials {
        self.clone()
    }
}
