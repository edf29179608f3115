//! Deployment records — one build/release execution of an application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single deployment run.
///
/// Identity is `deployment_uuid`, not `uuid` as on other records. The
/// `logs` field carries a nested encoding: when present it is usually a
/// *serialized* JSON array of log entries, but older instances return a
/// plain text blob. [`crate::normalize::parse_deployment_logs`] renders
/// either form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub application_id: Option<String>,
    pub deployment_uuid: String,
    #[serde(default)]
    pub pull_request_id: Option<i64>,
    #[serde(default)]
    pub force_rebuild: bool,
    #[serde(default)]
    pub commit: Option<String>,
    #[serde(default)]
    pub commit_message: Option<String>,

    /// Closed vocabulary: `finished`, `failed`, `error`, `in_progress`,
    /// `queued`, `cancelled`. Classified by
    /// [`crate::status::classify_deployment`].
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub is_webhook: bool,
    #[serde(default)]
    pub is_api: bool,
    #[serde(default)]
    pub logs: Option<String>,
    #[serde(default)]
    pub restart_only: bool,
    #[serde(default)]
    pub rollback: bool,
    #[serde(default)]
    pub git_type: Option<String>,
    #[serde(default)]
    pub server_id: Option<i64>,
    #[serde(default)]
    pub server_name: Option<String>,
    #[serde(default)]
    pub application_name: Option<String>,
    #[serde(default)]
    pub deployment_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One entry of the serialized log array inside [`Deployment::logs`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentLogEntry {
    #[serde(default)]
    pub output: String,
    #[serde(default, rename = "type")]
    pub entry_type: Option<String>,
    /// Debug entries are flagged hidden but still shown in rendered logs.
    #[serde(default)]
    pub hidden: bool,
}
