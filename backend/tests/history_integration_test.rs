//! Integration tests for the calculator save and history endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
#[ignore = "requires database"]
async fn test_save_mints_session_for_anonymous_caller() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let body = json!({
        "calculator_type": "bmi",
        "inputs": { "weight": 70.0, "height": 175.0 },
        "results": { "value": 22.9, "unit": "kg/m2" }
    });

    let (status, response) = app
        .post("/api/v1/calculators/save", &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    let session_id = parsed["session_id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(session_id).is_ok());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_saved_result_appears_in_session_history() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    let body = json!({
        "calculator_type": "bmr",
        "inputs": { "sex": "male", "age": 30, "weight": 80.0, "height": 180.0 },
        "results": { "value": 1805.0, "unit": "kcal/day" },
        "session_id": "11111111-1111-1111-1111-111111111111"
    });
    let (status, _) = app
        .post("/api/v1/calculators/save", &body.to_string())
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = app
        .get("/api/v1/calculators/history?session_id=11111111-1111-1111-1111-111111111111")
        .await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["items"][0]["calculator_type"], "bmr");
    assert_eq!(parsed["items"][0]["results"]["value"], 1805.0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_history_is_scoped_to_its_owner() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    for session in ["session-a", "session-b"] {
        let body = json!({
            "calculator_type": "bmi",
            "inputs": { "weight": 70.0, "height": 175.0 },
            "results": { "value": 22.9, "unit": "kg/m2" },
            "session_id": session
        });
        let (status, _) = app
            .post("/api/v1/calculators/save", &body.to_string())
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, response) = app
        .get("/api/v1/calculators/history?session_id=session-a")
        .await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["count"], 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_history_filters_by_calculator_type() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    for calculator_type in ["bmi", "bmr", "bmi"] {
        let body = json!({
            "calculator_type": calculator_type,
            "inputs": {},
            "results": { "value": 1.0, "unit": "x" },
            "session_id": "filter-test"
        });
        app.post("/api/v1/calculators/save", &body.to_string())
            .await;
    }

    let (status, response) = app
        .get("/api/v1/calculators/history?session_id=filter-test&calculator_type=bmi")
        .await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["count"], 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_history_respects_limit() {
    let app = common::TestApp::new().await;
    app.cleanup().await;

    for i in 0..5 {
        let body = json!({
            "calculator_type": "one-rep-max",
            "inputs": { "weight": 100.0 + i as f64, "reps": 5 },
            "results": { "value": 120.0, "unit": "kg" },
            "session_id": "limit-test"
        });
        app.post("/api/v1/calculators/save", &body.to_string())
            .await;
    }

    let (status, response) = app
        .get("/api/v1/calculators/history?session_id=limit-test&limit=3")
        .await;

    assert_eq!(status, StatusCode::OK);
    let parsed: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(parsed["count"], 3);
}
