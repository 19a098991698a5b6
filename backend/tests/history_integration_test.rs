//! Integration tests for the history summary endpoint

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

fn two_weeks_of_entries() -> serde_json::Value {
    let entries: Vec<serde_json::Value> = (1..=15)
        .map(|day| {
            let mut entry = json!({
                "date": format!("2026-01-{:02}", day),
                "calories": 2500.0,
                "steps": 9000,
                "workout_done": day % 2 == 0
            });
            if day == 1 {
                entry["weight_lbs"] = json!(187.2);
            }
            if day == 15 {
                entry["weight_lbs"] = json!(185.0);
            }
            entry
        })
        .collect();
    json!(entries)
}

#[tokio::test]
async fn test_summary_defaults_to_latest_week() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/v1/history/summary", &json!({ "entries": two_weeks_of_entries() }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["week"]["end_date"], "2026-01-15");
    assert_eq!(body["week"]["start_date"], "2026-01-09");
    assert_eq!(body["week"]["days_tracked"], 7);
    assert_eq!(body["week"]["avg_calories"], 2500.0);
    // days 10, 12, 14
    assert_eq!(body["week"]["total_workouts"], 3);
}

#[tokio::test]
async fn test_summary_derives_trend_input() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/v1/history/summary", &json!({ "entries": two_weeks_of_entries() }))
        .await;

    assert_eq!(status, StatusCode::OK);
    let trend = &body["weight_trend"];
    assert_eq!(trend["days"], 14);
    assert_eq!(trend["start_weight_lbs"], 187.2);
    assert_eq!(trend["end_weight_lbs"], 185.0);
    assert_eq!(trend["average_daily_calories"], 2500.0);
}

#[tokio::test]
async fn test_summary_window_without_entries() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/history/summary",
            &json!({ "entries": two_weeks_of_entries(), "end_date": "2026-03-01" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_summary_requires_entries() {
    let app = TestApp::new();

    let (status, _) = app
        .post_json("/api/v1/history/summary", &json!({ "entries": [] }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_summary_rejects_end_date_at_calendar_start() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/history/summary",
            &json!({
                "entries": [{ "date": "2026-01-01", "calories": 2500.0 }],
                "end_date": chrono::NaiveDate::MIN
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "end_date");
}
