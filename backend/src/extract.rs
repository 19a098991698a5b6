//! Request extractors
//!
//! `ApiJson` behaves like `axum::Json` but reports missing fields, type
//! mismatches and malformed bodies through `ApiError`, so every 4xx response
//! carries the same `{error: {code, message}}` body.

use crate::error::ApiError;
use axum::extract::FromRequest;

/// JSON body extractor with `ApiError` rejections
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
