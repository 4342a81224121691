//! Route tests driven through `tower::ServiceExt::oneshot`.

mod support;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use skylark_core::GenerationError;
use skylark_domain::SkylarkError;
use support::{app, sample_snapshot, CannedBackend, StaticBoards};
use tower::ServiceExt;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn kpi_returns_kpis_and_quality() {
    let app = app(StaticBoards(Ok(sample_snapshot())), Vec::new());

    let (status, body) = send(app, get("/api/kpi")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kpis"]["dealsCount"], 2);
    assert_eq!(body["kpis"]["openDealsCount"], 1);
    assert_eq!(body["kpis"]["totalPipelineValue"], 100_000.0);
    assert_eq!(body["kpis"]["completedWorkOrders"], 1);
    assert_eq!(body["dataQuality"]["missingDealValueCount"], 1);
}

#[tokio::test]
async fn kpi_failure_reports_details() {
    let app = app(
        StaticBoards(Err(SkylarkError::Upstream("Could not find boards. Check IDs.".into()))),
        Vec::new(),
    );

    let (status, body) = send(app, get("/api/kpi")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch KPIs");
    assert_eq!(body["details"], "Could not find boards. Check IDs.");
}

#[tokio::test]
async fn chat_uses_first_successful_backend() {
    let app = app(
        StaticBoards(Ok(sample_snapshot())),
        vec![
            Arc::new(CannedBackend { name: "groq", reply: Err(GenerationError::Authentication("Invalid API key (401)".into())) }),
            Arc::new(CannedBackend { name: "huggingface", reply: Ok("Pipeline is $100k.".into()) }),
        ],
    );

    let (status, body) = send(
        app,
        post_json("/api/chat", &json!({ "message": "How is the pipeline?", "activeBoard": "deals" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Pipeline is $100k.");
    assert_eq!(body["source"], "huggingface");
    assert_eq!(body["stages"][0]["stage"], "groq");
    assert_eq!(body["stages"][0]["status"], "failed");
    assert_eq!(body["stages"][1]["status"], "succeeded");
    assert_eq!(body["kpis"]["dealsCount"], 2);
    assert_eq!(body["dataQuality"]["missingSectorCount"], 1);
}

#[tokio::test]
async fn chat_degrades_to_offline_summary() {
    let app = app(StaticBoards(Ok(sample_snapshot())), Vec::new());

    let (status, body) = send(
        app,
        post_json("/api/chat", &json!({ "message": "Status?", "activeBoard": "work_orders" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "offline");
    let reply = body["reply"].as_str().expect("reply string");
    assert!(reply.starts_with("**Operations Summary**"));
    assert!(reply.contains("Rail Survey"));
    assert!(reply.contains("AI services are currently unavailable"));
    assert_eq!(body["stages"][0]["status"], "skipped");
}

#[tokio::test]
async fn chat_fetch_failure_is_server_error() {
    let app = app(
        StaticBoards(Err(SkylarkError::Config("MONDAY_API_KEY is missing".into()))),
        Vec::new(),
    );

    let (status, body) = send(app, post_json("/api/chat", &json!({ "message": "Hi" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "MONDAY_API_KEY is missing");
    assert!(body.get("reply").is_none());
}

#[tokio::test]
async fn chat_rejects_malformed_body() {
    let app = app(StaticBoards(Ok(sample_snapshot())), Vec::new());

    let (status, body) = send(app, post_json("/api/chat", &json!({ "activeBoard": "deals" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|msg| msg.contains("message")));
}

#[tokio::test]
async fn health_reports_wiring_without_fetching() {
    let app = app(
        StaticBoards(Err(SkylarkError::Network("unreachable".into()))),
        vec![Arc::new(CannedBackend { name: "groq", reply: Ok("ok".into()) })],
    );

    let (status, body) = send(app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "dataSourceConfigured": true, "backends": ["groq"] }));
}
