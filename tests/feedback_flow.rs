use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use feedback_analyzer::api::{router, AppState};

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn batch_then_report_end_to_end() {
    let state = Arc::new(AppState::default());
    let app = router(state.clone());

    let (status, batch) = call(
        &app,
        post(
            "/feedback-batch",
            json!({"feedbacks": [
                {"user": "a", "message": "Wow, that's amazing!"},
                {"user": "b", "message": "It was fine."}
            ]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(batch["summary"]["total"], 2);
    assert_eq!(batch["summary"]["surprise_count"], 1);
    assert_eq!(batch["summary"]["normal_count"], 1);

    let stored = state.feedback.snapshot();
    assert_eq!(stored.len(), 2);
    assert_eq!((stored[0].user.as_str(), stored[1].user.as_str()), ("a", "b"));

    let (status, report) = call(&app, get("/report")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["summary"]["total_feedbacks"], 2);
    assert_eq!(report["summary"]["surprise_count"], batch["summary"]["surprise_count"]);
    assert_eq!(report["summary"]["normal_count"], batch["summary"]["normal_count"]);
    assert_eq!(report["summary"]["avg_sentiment"], batch["summary"]["avg_sentiment"]);
    assert_eq!(report["feedbacks"], batch["data"]);
    assert_eq!(report["comments"], json!([]));
}

#[tokio::test]
async fn rejected_batch_does_not_touch_report() {
    let state = Arc::new(AppState::default());
    let app = router(state.clone());

    let (status, body) = call(&app, post("/feedback-batch", json!({"feedbacks": "Wow"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Feedbacks must be an array");
    assert_eq!(state.feedback.len(), 0);

    let (_, report) = call(&app, get("/report")).await;
    assert_eq!(report["summary"]["total_feedbacks"], 0);
    assert_eq!(report["summary"]["avg_sentiment"], "0.00");
}

#[tokio::test]
async fn comments_are_listed_in_submission_order() {
    let state = Arc::new(AppState::default());
    let app = router(state);

    for (user, comment) in [("x", "first"), ("y", "second"), ("z", "third")] {
        let (status, _) = call(&app, post("/comment", json!({"user": user, "comment": comment}))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, report) = call(&app, get("/report")).await;
    let comments: Vec<&str> = report["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["comment"].as_str().unwrap())
        .collect();
    assert_eq!(comments, vec!["first", "second", "third"]);
    assert_eq!(report["summary"]["total_feedbacks"], 0);
}
