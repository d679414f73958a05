//! Mutation and export handlers: form submission and CSV download

use axum::{
  extract::{Multipart, State},
  http::{header, StatusCode},
  response::{Html, Redirect},
};
use tracing::{error, info};

use sprout_store::{render_csv, ImageAttachment, RecordInput, StoreError};

use crate::server::html;
use crate::server::state::AppState;

type PageError = (StatusCode, Html<String>);

fn bad_request(message: &str) -> PageError {
  (StatusCode::BAD_REQUEST, Html(html::error_page(message)))
}

/// POST /records - multipart form submission
///
/// A rejected submission re-renders the entry page with the validation
/// message and stores nothing; a storage failure is an operator problem
/// and surfaces as a 500.
pub async fn submit(
  State(state): State<AppState>,
  mut multipart: Multipart,
) -> Result<Redirect, PageError> {
  let mut input = RecordInput::default();

  while let Some(field) =
    multipart.next_field().await.map_err(|e| bad_request(&e.to_string()))?
  {
    let name = field.name().unwrap_or_default().to_string();
    match name.as_str() {
      "date" => input.date = field.text().await.map_err(|e| bad_request(&e.to_string()))?,
      "height" => input.height = field.text().await.map_err(|e| bad_request(&e.to_string()))?,
      "chlorophyll" => {
        input.chlorophyll = field.text().await.map_err(|e| bad_request(&e.to_string()))?
      }
      "nitrogen" => {
        input.nitrogen = field.text().await.map_err(|e| bad_request(&e.to_string()))?
      }
      "thermalImage" | "visibleImage" => {
        let mime_type =
          field.content_type().unwrap_or("application/octet-stream").to_string();
        let data = field.bytes().await.map_err(|e| bad_request(&e.to_string()))?;
        // A file input left empty still submits a zero-byte part
        if !data.is_empty() {
          let attachment = ImageAttachment { mime_type, data: data.to_vec() };
          if name == "thermalImage" {
            input.thermal_image = Some(attachment);
          } else {
            input.visible_image = Some(attachment);
          }
        }
      }
      _ => {}
    }
  }

  if input.date.trim().is_empty() {
    input.date = chrono::Local::now().format("%Y-%m-%d").to_string();
  }

  let mut store = state.store.lock().await;
  match state.file.append(&mut store, input) {
    Ok(index) => {
      info!(index, "recorded measurement");
      Ok(Redirect::to("/"))
    }
    Err(err @ StoreError::Validation { .. }) => {
      let today = chrono::Local::now().format("%Y-%m-%d").to_string();
      Err((
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(html::index_page(&store, &today, Some(&err.to_string()))),
      ))
    }
    Err(err) => {
      error!(%err, "failed to persist record");
      Err((StatusCode::INTERNAL_SERVER_ERROR, Html(html::error_page(&err.to_string()))))
    }
  }
}

/// GET /export.csv - all records as a CSV attachment
pub async fn export_csv(
  State(state): State<AppState>,
) -> Result<([(header::HeaderName, String); 2], String), PageError> {
  let store = state.store.lock().await;
  let csv = render_csv(&store).map_err(|e| {
    error!(%e, "CSV export failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Html(html::error_page(&e.to_string())))
  })?;

  Ok((
    [
      (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
      (header::CONTENT_DISPOSITION, "attachment; filename=\"measurements.csv\"".to_string()),
    ],
    csv,
  ))
}
