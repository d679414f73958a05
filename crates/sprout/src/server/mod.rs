//! Web presentation layer: form, record list, detail views, CSV export and
//! QR links, all backed by the record store.

pub mod handlers;
pub mod html;
pub mod routing;
pub mod server;
pub mod state;

pub use server::start_server;
pub use state::AppState;
