//! Liveness endpoint

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::server::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
  pub status: String,
  pub version: String,
  pub records: usize,
  pub data_file: String,
}

/// GET /status - Health check endpoint
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
  let store = state.store.lock().await;
  Json(StatusResponse {
    status: "healthy".to_string(),
    version: env!("CARGO_PKG_VERSION").to_string(),
    records: store.len(),
    data_file: state.file.path().to_string_lossy().to_string(),
  })
}
