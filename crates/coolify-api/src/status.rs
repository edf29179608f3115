//! Status classification.
//!
//! Each status domain gets one pure function expressed as an ordered
//! predicate chain. Classification never consumes the raw string; callers
//! keep it for display.

use crate::server::Server;

/// Outcome class of a deployment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentClass {
    Success,
    Failed,
    Pending,
    Cancelled,
    Unknown,
}

/// Classify a deployment status. The vocabulary is closed, so matching is
/// exact and case-sensitive.
pub fn classify_deployment(status: &str) -> DeploymentClass {
    match status {
        "finished" => DeploymentClass::Success,
        "failed" | "error" => DeploymentClass::Failed,
        "in_progress" | "queued" => DeploymentClass::Pending,
        "cancelled" => DeploymentClass::Cancelled,
        _ => DeploymentClass::Unknown,
    }
}

/// Health class of a lifecycle resource (application, service, database).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceClass {
    Healthy,
    Stopped,
    Transitioning,
    Unknown,
}

/// Classify an open-vocabulary resource status such as
/// `"running:healthy"` or `"exited:unhealthy"`. Substring matching,
/// case-insensitive, first match wins.
pub fn classify_resource(status: &str) -> ResourceClass {
    if status.is_empty() {
        return ResourceClass::Unknown;
    }
    let s = status.to_lowercase();
    // "running"/"stopped" never co-occur as substrings, so their relative
    // order here is immaterial.
    if s.contains("running") || s.contains("healthy") || s == "finished" {
        ResourceClass::Healthy
    } else if s.contains("stopped") || s.contains("exited") {
        ResourceClass::Stopped
    } else if s.contains("starting") || s.contains("restarting") {
        ResourceClass::Transitioning
    } else {
        ResourceClass::Unknown
    }
}

/// Binary health class for proxy processes and Traefik entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthClass {
    Healthy,
    Failed,
    Unknown,
}

/// Classify the proxy on a server. An explicitly unreachable server is
/// failed regardless of what the proxy sub-status claims.
pub fn classify_proxy(server: &Server) -> HealthClass {
    let reachable = server.settings.as_ref().and_then(|s| s.is_reachable);
    if reachable == Some(false) {
        return HealthClass::Failed;
    }
    match server.proxy.as_ref().and_then(|p| p.status.as_deref()) {
        Some("running") => HealthClass::Healthy,
        Some("stopped") | Some("exited") => HealthClass::Failed,
        _ => HealthClass::Unknown,
    }
}

/// Display text for a server's proxy state.
pub fn proxy_status_text(server: &Server) -> String {
    let reachable = server.settings.as_ref().and_then(|s| s.is_reachable);
    if reachable == Some(false) {
        return "unreachable".to_string();
    }
    server
        .proxy
        .as_ref()
        .and_then(|p| p.status.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Classify a Traefik router or service status (exact match).
pub fn classify_traefik(status: &str) -> HealthClass {
    match status {
        "enabled" => HealthClass::Healthy,
        "disabled" => HealthClass::Failed,
        _ => HealthClass::Unknown,
    }
}

/// Extract the hostname from the first `` Host(`...`) `` matcher in a
/// Traefik routing rule, if any.
pub fn extract_host_from_rule(rule: &str) -> Option<&str> {
    let start = rule.find("Host(`")? + "Host(`".len();
    let rest = &rule[start..];
    let end = rest.find('`')?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{ServerProxy, ServerSettings};

    fn server(proxy_status: Option<&str>, is_reachable: Option<bool>) -> Server {
        Server {
            id: 1,
            uuid: "srv-1".into(),
            name: "srv".into(),
            description: None,
            ip: "10.0.0.1".into(),
            user: "root".into(),
            port: 22,
            proxy: Some(ServerProxy {
                proxy_type: Some("traefik".into()),
                status: proxy_status.map(Into::into),
            }),
            settings: Some(ServerSettings {
                is_reachable,
                is_usable: Some(true),
            }),
        }
    }

    #[test]
    fn test_deployment_classes() {
        assert_eq!(classify_deployment("finished"), DeploymentClass::Success);
        assert_eq!(classify_deployment("failed"), DeploymentClass::Failed);
        assert_eq!(classify_deployment("error"), DeploymentClass::Failed);
        assert_eq!(classify_deployment("in_progress"), DeploymentClass::Pending);
        assert_eq!(classify_deployment("queued"), DeploymentClass::Pending);
        assert_eq!(classify_deployment("cancelled"), DeploymentClass::Cancelled);
        assert_eq!(classify_deployment("whatever"), DeploymentClass::Unknown);
        assert_eq!(classify_deployment(""), DeploymentClass::Unknown);
        // Closed vocabulary: no case folding.
        assert_eq!(classify_deployment("Finished"), DeploymentClass::Unknown);
    }

    #[test]
    fn test_resource_classes() {
        assert_eq!(classify_resource(""), ResourceClass::Unknown);
        assert_eq!(classify_resource("running"), ResourceClass::Healthy);
        assert_eq!(classify_resource("running:healthy"), ResourceClass::Healthy);
        assert_eq!(classify_resource("Running (Healthy)"), ResourceClass::Healthy);
        assert_eq!(classify_resource("finished"), ResourceClass::Healthy);
        assert_eq!(classify_resource("stopped"), ResourceClass::Stopped);
        assert_eq!(classify_resource("exited:unhealthy"), ResourceClass::Stopped);
        assert_eq!(classify_resource("starting"), ResourceClass::Transitioning);
        assert_eq!(classify_resource("restarting"), ResourceClass::Transitioning);
        assert_eq!(classify_resource("degraded"), ResourceClass::Unknown);
    }

    // The substring chains don't overlap for real status strings, so
    // checking running-ish before stopped-ish and the reverse must agree.
    #[test]
    fn test_resource_precedence_is_immaterial() {
        for status in ["running", "running:healthy", "stopped", "exited", "starting"] {
            let forward = classify_resource(status);
            let s = status.to_lowercase();
            let reversed = if s.contains("stopped") || s.contains("exited") {
                ResourceClass::Stopped
            } else if s.contains("running") || s.contains("healthy") {
                ResourceClass::Healthy
            } else {
                ResourceClass::Transitioning
            };
            assert_eq!(forward, reversed, "status {status:?}");
        }
    }

    #[test]
    fn test_proxy_classification() {
        assert_eq!(
            classify_proxy(&server(Some("running"), Some(true))),
            HealthClass::Healthy
        );
        assert_eq!(
            classify_proxy(&server(Some("stopped"), Some(true))),
            HealthClass::Failed
        );
        assert_eq!(
            classify_proxy(&server(Some("exited"), None)),
            HealthClass::Failed
        );
        // Unreachable wins over a "running" proxy.
        assert_eq!(
            classify_proxy(&server(Some("running"), Some(false))),
            HealthClass::Failed
        );
        assert_eq!(
            classify_proxy(&server(None, Some(true))),
            HealthClass::Unknown
        );
    }

    #[test]
    fn test_proxy_status_text() {
        assert_eq!(proxy_status_text(&server(Some("running"), Some(false))), "unreachable");
        assert_eq!(proxy_status_text(&server(Some("running"), Some(true))), "running");
        assert_eq!(proxy_status_text(&server(None, None)), "unknown");
    }

    #[test]
    fn test_traefik_classes() {
        assert_eq!(classify_traefik("enabled"), HealthClass::Healthy);
        assert_eq!(classify_traefik("disabled"), HealthClass::Failed);
        assert_eq!(classify_traefik("warning"), HealthClass::Unknown);
    }

    #[test]
    fn test_extract_host_from_rule() {
        assert_eq!(
            extract_host_from_rule("Host(`a.com`) && PathPrefix(`/x`)"),
            Some("a.com")
        );
        assert_eq!(extract_host_from_rule("PathPrefix(`/x`)"), None);
        // First matcher wins.
        assert_eq!(
            extract_host_from_rule("Host(`a.com`) || Host(`b.com`)"),
            Some("a.com")
        );
        assert_eq!(extract_host_from_rule(""), None);
    }
}
