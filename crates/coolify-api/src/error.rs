//! Error types for the Coolify API client.

use thiserror::Error;

/// Errors that can occur when talking to a Coolify instance.
///
/// The `Display` strings of [`Api`](CoolifyError::Api) and
/// [`Traefik`](CoolifyError::Traefik) are a contract: consumers match on
/// the `"API <status>: <body>"` prefix when deciding what to show.
#[derive(Debug, Error)]
pub enum CoolifyError {
    /// Non-2xx response from the Coolify REST API.
    #[error("API {status}: {body}")]
    Api { status: u16, body: String },

    /// Non-2xx response from the Traefik dashboard API.
    #[error("Traefik API {status}: {body}")]
    Traefik { status: u16, body: String },

    /// Connection-level failure (refused, DNS, timeout). Propagated
    /// verbatim, never wrapped in an HTTP classification.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A 2xx payload did not fit the record a typed wrapper promised.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, CoolifyError>;
