//! Axum router configuration for all endpoints

use axum::{
  routing::{get, post},
  Router,
};

use crate::server::handlers::{pages, records, status};
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    // Entry page: submission form plus the record list
    .route("/", get(pages::index))
    .route("/records", post(records::submit))
    // Detail view and its attachments, addressed by insertion-order index
    .route("/record", get(pages::record_detail))
    .route("/record/image", get(pages::record_image))
    .route("/qr/{index}", get(pages::qr_code))
    // Export and liveness
    .route("/export.csv", get(records::export_csv))
    .route("/status", get(status::status))
    .with_state(state)
}
