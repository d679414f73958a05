//! Web server startup and configuration

use anyhow::Result;
use axum::serve;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use sprout_store::StoreFile;

use crate::server::routing::create_router;
use crate::server::state::AppState;

/// Load the store and serve the web UI until the process exits.
pub async fn start_server(addr: SocketAddr, data_file: PathBuf, base_url: String) -> Result<()> {
  let file = StoreFile::new(data_file);
  let store = file.load()?;
  info!(
    data_file = %file.path().display(),
    records = store.len(),
    "loaded measurement store"
  );

  let state = AppState::new(file, store, base_url);
  let app = create_router(state)
    .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()));

  let listener = TcpListener::bind(addr).await?;
  info!("sprout listening on http://{addr}");
  serve(listener, app).await?;
  Ok(())
}
