//! Response-shape normalizers.
//!
//! The Coolify API returns the same logical data in several shapes
//! depending on version and endpoint. Everything in this module is pure:
//! it inspects a decoded value once and produces one canonical structure,
//! so no "could be array or object" type escapes the client boundary.

use serde::Deserialize;
use serde_json::Value;

use crate::deployment::{Deployment, DeploymentLogEntry};
use crate::error::Result;
use crate::project::Environment;
use crate::resource::Database;

/// Shown when a deployment has no usable log content.
pub const NO_LOGS_FALLBACK: &str = "No logs available.";

/// Render the `logs` field of a deployment into display text.
///
/// The field is nested-encoded: usually a serialized JSON array of
/// `{ output, type, hidden }` entries, sometimes a pre-formatted plain
/// text blob, sometimes absent. Entries with an empty or missing `output`
/// are dropped; `hidden` (debug) entries are kept.
pub fn parse_deployment_logs(logs: Option<&str>) -> String {
    let raw = match logs {
        Some(s) if !s.is_empty() => s,
        _ => return NO_LOGS_FALLBACK.to_string(),
    };

    // Not JSON, or JSON but not an array: treat as pre-formatted text.
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return raw.to_string(),
    };
    let Value::Array(entries) = value else {
        return raw.to_string();
    };

    let lines: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<DeploymentLogEntry>(entry).ok())
        .filter(|entry| !entry.output.is_empty())
        .map(|entry| entry.output)
        .collect();

    if lines.is_empty() {
        NO_LOGS_FALLBACK.to_string()
    } else {
        lines.join("\n")
    }
}

/// Normalize an application-logs response to a list of lines.
///
/// Observed shapes: a bare array, `{ "logs": [...] }`, or `{ "logs": "one
/// blob" }` which becomes a single-element list.
pub fn normalize_logs(value: &Value) -> Vec<String> {
    if let Value::Array(lines) = value {
        return lines.iter().map(render_line).collect();
    }
    match value.get("logs") {
        Some(Value::Array(lines)) => lines.iter().map(render_line).collect(),
        Some(other) => vec![render_line(other)],
        None => Vec::new(),
    }
}

fn render_line(line: &Value) -> String {
    match line {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Normalize a deployment listing that arrives either as a bare array or
/// as a `{ "deployments": [...] }` envelope. Anything else degrades to an
/// empty list.
pub fn normalize_deployment_list(value: Value) -> Result<Vec<Deployment>> {
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut envelope) => match envelope.remove("deployments") {
            Some(deployments) => Ok(serde_json::from_value(deployments)?),
            None => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}

/// Environment detail as the API actually returns it: databases split
/// into one array per engine family.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvironment {
    #[serde(flatten)]
    pub environment: Environment,

    #[serde(default)]
    pub postgresqls: Vec<Database>,
    #[serde(default)]
    pub mysqls: Vec<Database>,
    #[serde(default)]
    pub mariadbs: Vec<Database>,
    #[serde(default)]
    pub mongodbs: Vec<Database>,
    #[serde(default)]
    pub redis: Vec<Database>,
}

/// Merge the per-engine database arrays into the unified `databases`
/// list, preserving family order: postgres, mysql, mariadb, mongo, redis.
pub(crate) fn merge_environment_databases(raw: RawEnvironment) -> Environment {
    let mut environment = raw.environment;
    environment.databases.extend(raw.postgresqls);
    environment.databases.extend(raw.mysqls);
    environment.databases.extend(raw.mariadbs);
    environment.databases.extend(raw.mongodbs);
    environment.databases.extend(raw.redis);
    environment
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_logs_absent_or_empty() {
        assert_eq!(parse_deployment_logs(None), NO_LOGS_FALLBACK);
        assert_eq!(parse_deployment_logs(Some("")), NO_LOGS_FALLBACK);
    }

    #[test]
    fn test_parse_logs_joins_outputs() {
        let raw = r#"[{"output":"a"},{"output":"b","type":"stdout"}]"#;
        assert_eq!(parse_deployment_logs(Some(raw)), "a\nb");
    }

    #[test]
    fn test_parse_logs_keeps_hidden_entries() {
        let raw = r#"[{"output":"a","hidden":true}]"#;
        assert_eq!(parse_deployment_logs(Some(raw)), "a");
    }

    #[test]
    fn test_parse_logs_drops_empty_outputs() {
        let raw = r#"[{"output":""},{"hidden":false},{"output":"kept"}]"#;
        assert_eq!(parse_deployment_logs(Some(raw)), "kept");
    }

    #[test]
    fn test_parse_logs_all_filtered_falls_back() {
        assert_eq!(
            parse_deployment_logs(Some(r#"[{"output":""}]"#)),
            NO_LOGS_FALLBACK
        );
        assert_eq!(parse_deployment_logs(Some("[]")), NO_LOGS_FALLBACK);
    }

    #[test]
    fn test_parse_logs_plain_text_passthrough() {
        assert_eq!(parse_deployment_logs(Some("not json")), "not json");
    }

    #[test]
    fn test_parse_logs_non_array_json_passthrough() {
        // Do not re-stringify the parsed value; return the raw text.
        assert_eq!(parse_deployment_logs(Some(r#"{"k":"v"}"#)), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_normalize_logs_shapes() {
        assert_eq!(
            normalize_logs(&json!(["a", "b"])),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(
            normalize_logs(&json!({ "logs": ["a", "b"] })),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(
            normalize_logs(&json!({ "logs": "single log line" })),
            vec!["single log line".to_string()]
        );
        assert!(normalize_logs(&json!({})).is_empty());
    }

    #[test]
    fn test_normalize_deployment_list_shapes() {
        let deployment = json!({ "deployment_uuid": "d-1", "status": "finished" });

        let bare = normalize_deployment_list(json!([deployment])).unwrap();
        assert_eq!(bare.len(), 1);
        assert_eq!(bare[0].deployment_uuid, "d-1");

        let wrapped =
            normalize_deployment_list(json!({ "deployments": [deployment] })).unwrap();
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0].deployment_uuid, "d-1");

        assert!(normalize_deployment_list(json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_merge_environment_databases_order() {
        let raw: RawEnvironment = serde_json::from_value(json!({
            "id": 1,
            "uuid": "env-1",
            "name": "production",
            "project_id": 1,
            "mysqls": [{ "id": 2, "uuid": "db-mysql", "name": "mysql" }],
            "postgresqls": [{ "id": 3, "uuid": "db-pg", "name": "pg" }],
            "redis": [{ "id": 4, "uuid": "db-redis", "name": "redis" }],
        }))
        .unwrap();

        let env = merge_environment_databases(raw);
        let uuids: Vec<&str> = env.databases.iter().map(|d| d.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["db-pg", "db-mysql", "db-redis"]);
    }
}
