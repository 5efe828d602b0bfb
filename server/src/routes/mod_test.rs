use super::*;

#[tokio::test]
async fn healthz_reports_ok() {
    let Json(health) = healthz().await;
    assert_eq!(health, Health { status: "ok" });
}

#[test]
fn health_serializes_as_status_object() {
    let body = serde_json::to_value(Health { status: "ok" }).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[test]
fn service_routes_build_without_leptos_config() {
    let _router: Router = service_routes();
}
