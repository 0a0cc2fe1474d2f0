use crate::helpers::{header, spawn_app};

const ORIGIN: &str = "https://dashboard.example.com";

#[tokio::test]
async fn preflight_allows_any_origin_method_and_header() {
    let app = spawn_app().await;

    let response = app.preflight("/healthz", ORIGIN, "GET").await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(Some(ORIGIN), header(&response, "access-control-allow-origin"));
    assert_eq!(Some("true"), header(&response, "access-control-allow-credentials"));
    assert_eq!(Some("GET"), header(&response, "access-control-allow-methods"));
    assert_eq!(
        Some("content-type,x-custom-header"),
        header(&response, "access-control-allow-headers")
    );
}

#[tokio::test]
async fn preflight_mirrors_whatever_method_is_requested() {
    let app = spawn_app().await;

    for method in ["PATCH", "DELETE", "PUT"] {
        let response = app.preflight("/healthz", ORIGIN, method).await;

        assert_eq!(200, response.status().as_u16());
        assert_eq!(Some(method), header(&response, "access-control-allow-methods"));
    }
}

#[tokio::test]
async fn simple_cross_origin_get_carries_cors_headers() {
    let app = spawn_app().await;

    for origin in [ORIGIN, "http://localhost:3000", "null"] {
        let response = app
            .api_client
            .get(app.url("/healthz"))
            .header("Origin", origin)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(200, response.status().as_u16());
        assert_eq!(Some(origin), header(&response, "access-control-allow-origin"));
        assert_eq!(Some("true"), header(&response, "access-control-allow-credentials"));
        assert_eq!(
            Some("x-request-id"),
            header(&response, "access-control-expose-headers")
        );
    }
}

#[tokio::test]
async fn not_found_responses_carry_cors_headers() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(app.url("/unknown"))
        .header("Origin", ORIGIN)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
    assert_eq!(Some(ORIGIN), header(&response, "access-control-allow-origin"));
    assert_eq!(Some("true"), header(&response, "access-control-allow-credentials"));
}
