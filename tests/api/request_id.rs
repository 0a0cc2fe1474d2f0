use uuid::Uuid;

use crate::helpers::{header, spawn_app};

#[tokio::test]
async fn a_request_id_is_generated_when_missing() {
    let app = spawn_app().await;

    let response = app.get_health_check().await;

    let request_id = header(&response, "x-request-id").expect("No x-request-id header.");
    assert!(Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn a_supplied_request_id_is_echoed_back() {
    let app = spawn_app().await;
    let request_id = Uuid::new_v4().to_string();

    let response = app
        .api_client
        .get(app.url("/healthz"))
        .header("x-request-id", &request_id)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(Some(request_id.as_str()), header(&response, "x-request-id"));
}

#[tokio::test]
async fn each_request_gets_its_own_id() {
    let app = spawn_app().await;

    let first = app.get_health_check().await;
    let second = app.get_health_check().await;

    assert_ne!(
        header(&first, "x-request-id"),
        header(&second, "x-request-id")
    );
}
