//! Contract tests for the Traefik dashboard snapshot path.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coolify_api::{Credentials, TraefikClient};

fn credentials(traefik_url: &str, user: Option<&str>, password: Option<&str>) -> Credentials {
    Credentials::new("https://coolify.example.com", "token").with_traefik(
        traefik_url,
        user.map(Into::into),
        password.map(Into::into),
    )
}

#[tokio::test]
async fn unconfigured_dashboard_returns_empty_snapshot() {
    // No URL at all.
    let client = TraefikClient::new(Arc::new(Credentials::new("https://c", "t")));
    let snapshot = client.fetch_raw_data().await.unwrap();
    assert!(snapshot.routers.is_empty());
    assert!(snapshot.services.is_empty());

    // Empty string counts as unconfigured too.
    let client = TraefikClient::new(Arc::new(credentials("", None, None)));
    let snapshot = client.fetch_raw_data().await.unwrap();
    assert!(snapshot.routers.is_empty());
}

#[tokio::test]
async fn sends_basic_auth_when_both_credentials_present() {
    let server = MockServer::start().await;
    // base64("admin:secret")
    Mock::given(method("GET"))
        .and(path("/api/rawdata"))
        .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "routers": {}, "services": {} })),
        )
        .mount(&server)
        .await;

    let client = TraefikClient::new(Arc::new(credentials(
        &server.uri(),
        Some("admin"),
        Some("secret"),
    )));
    client.fetch_raw_data().await.unwrap();
}

#[tokio::test]
async fn omits_auth_header_when_either_credential_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rawdata"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "routers": {}, "services": {} })),
        )
        .mount(&server)
        .await;

    let client = TraefikClient::new(Arc::new(credentials(&server.uri(), Some("admin"), None)));
    client.fetch_raw_data().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn flattens_maps_and_filters_internal_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rawdata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "routers": {
                "my-app@docker": {
                    "entryPoints": ["websecure"],
                    "service": "my-app",
                    "rule": "Host(`app.example.com`)",
                    "status": "enabled",
                    "provider": "docker",
                    "tls": { "certResolver": "letsencrypt" },
                },
                "api@internal": {
                    "entryPoints": ["traefik"],
                    "service": "api@internal",
                    "rule": "PathPrefix(`/api`)",
                    "status": "enabled",
                    "provider": "internal",
                },
            },
            "services": {
                "api@internal": { "status": "enabled", "provider": "internal" },
                "my-svc@docker": {
                    "status": "enabled",
                    "provider": "docker",
                    "loadBalancer": { "servers": [{ "url": "http://10.0.0.1:8080" }] },
                },
            },
        })))
        .mount(&server)
        .await;

    let client = TraefikClient::new(Arc::new(credentials(&server.uri(), None, None)));
    let snapshot = client.fetch_raw_data().await.unwrap();

    assert_eq!(snapshot.routers.len(), 1);
    let router = &snapshot.routers[0];
    assert_eq!(router.name, "my-app@docker");
    assert_eq!(router.rule, "Host(`app.example.com`)");
    assert_eq!(
        router.tls.as_ref().unwrap().cert_resolver.as_deref(),
        Some("letsencrypt")
    );

    assert_eq!(snapshot.services.len(), 1);
    assert_eq!(snapshot.services[0].name, "my-svc@docker");
    assert_eq!(
        snapshot.services[0].load_balancer.as_ref().unwrap().servers[0].url,
        "http://10.0.0.1:8080"
    );
}

#[tokio::test]
async fn non_2xx_fails_with_exact_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rawdata"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let client = TraefikClient::new(Arc::new(credentials(&server.uri(), None, None)));
    let err = client.fetch_raw_data().await.unwrap_err();
    assert_eq!(err.to_string(), "Traefik API 401: Unauthorized");
}

#[tokio::test]
async fn dashboard_url_trailing_slashes_are_stripped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rawdata"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "routers": {}, "services": {} })),
        )
        .mount(&server)
        .await;

    let url = format!("{}///", server.uri());
    let client = TraefikClient::new(Arc::new(credentials(&url, None, None)));
    client.fetch_raw_data().await.unwrap();
}
