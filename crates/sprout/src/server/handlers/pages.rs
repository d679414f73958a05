//! Browsing handlers: entry page, detail view, stored images, QR codes

use axum::{
  extract::{Path, Query, State},
  http::{header, StatusCode},
  response::Html,
};
use serde::Deserialize;
use tracing::error;

use crate::qr;
use crate::server::html;
use crate::server::state::AppState;

type PageError = (StatusCode, Html<String>);

fn not_found(message: &str) -> PageError {
  (StatusCode::NOT_FOUND, Html(html::error_page(message)))
}

fn today() -> String {
  chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// GET / - form plus the record list
pub async fn index(State(state): State<AppState>) -> Html<String> {
  let store = state.store.lock().await;
  Html(html::index_page(&store, &today(), None))
}

#[derive(Deserialize)]
pub struct DetailQuery {
  #[serde(default)]
  pub index: Option<String>,
}

/// GET /record?index=N - detail view for one record
///
/// A malformed or out-of-range index is a user-visible error page, never a
/// crash; the message comes straight from the store's index validation.
pub async fn record_detail(
  State(state): State<AppState>,
  Query(query): Query<DetailQuery>,
) -> Result<Html<String>, PageError> {
  let store = state.store.lock().await;
  let raw = query.index.unwrap_or_default();

  let index = store.resolve_index(&raw).map_err(|e| not_found(&e.to_string()))?;
  let record = store.get(index).map_err(|e| not_found(&e.to_string()))?;
  Ok(Html(html::detail_page(index, record)))
}

#[derive(Deserialize)]
pub struct ImageQuery {
  #[serde(default)]
  pub index: Option<String>,
  #[serde(default)]
  pub kind: String,
}

/// GET /record/image?index=N&kind=thermal|visible - stored image bytes
pub async fn record_image(
  State(state): State<AppState>,
  Query(query): Query<ImageQuery>,
) -> Result<([(header::HeaderName, String); 1], Vec<u8>), PageError> {
  let store = state.store.lock().await;
  let raw = query.index.unwrap_or_default();

  let index = store.resolve_index(&raw).map_err(|e| not_found(&e.to_string()))?;
  let record = store.get(index).map_err(|e| not_found(&e.to_string()))?;

  let attachment = match query.kind.as_str() {
    "thermal" => record.thermal_image.as_ref(),
    "visible" => record.visible_image.as_ref(),
    other => return Err(not_found(&format!("unknown image kind '{other}'"))),
  };

  match attachment {
    Some(image) => {
      Ok(([(header::CONTENT_TYPE, image.mime_type.clone())], image.data.clone()))
    }
    None => Err(not_found(&format!("record {index} has no {} image", query.kind))),
  }
}

/// GET /qr/{index} - PNG QR code deep-linking to the detail view
///
/// The payload always encodes the raw insertion-order index, so a code
/// scanned today still resolves after new records push the row further
/// down the date-sorted list.
pub async fn qr_code(
  State(state): State<AppState>,
  Path(raw): Path<String>,
) -> Result<([(header::HeaderName, String); 1], Vec<u8>), PageError> {
  let store = state.store.lock().await;
  let index = store.resolve_index(&raw).map_err(|e| not_found(&e.to_string()))?;

  let url = qr::detail_url(&state.base_url, index);
  let png = qr::png(&url).map_err(|e| {
    error!(%e, "failed to render QR code");
    (StatusCode::INTERNAL_SERVER_ERROR, Html(html::error_page("failed to render QR code")))
  })?;

  Ok(([(header::CONTENT_TYPE, "image/png".to_string())], png))
}
