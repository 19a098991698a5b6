//! Common test utilities for integration tests
//!
//! This module provides shared setup for integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tdee_backend::{config::AppConfig, routes, state::AppState};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a new test application with the default engine configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config).expect("Invalid test configuration");
        let app = routes::create_router(state);

        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// POST a JSON value and parse the JSON response
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let (status, body) = self.post(path, &body.to_string()).await;
        let value = serde_json::from_str(&body).unwrap_or(Value::Null);
        (status, value)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

/// 30-year-old male, 185 lbs, desk job, lifting four times a week
pub fn lifter_input(sleep_hours: f64, sleep_quality: &str) -> Value {
    json!({
        "profile": {
            "sex": "male",
            "age_years": 30,
            "height_inches": 70.0,
            "weight_lbs": 185.0
        },
        "diet": {
            "calories": 2300.0,
            "protein_g": 160.0,
            "carbs_g": 250.0,
            "fat_g": 70.0
        },
        "activity": {
            "daily_steps": 10000,
            "pace": "average",
            "job_type": "desk",
            "sedentary_hours": 8.0
        },
        "workout": {
            "workouts_per_week": 4.0,
            "workout_type": "heavy_lifting",
            "duration_minutes": 75.0,
            "intensity": "high",
            "rest_length": "moderate",
            "training_style": "traditional"
        },
        "sleep": {
            "hours": sleep_hours,
            "quality": sleep_quality
        },
        "goal": "maintenance"
    })
}
