//! Sprout - Plant Growth Measurement Log
//!
//! Records plant growth measurements (height, chlorophyll, nitrogen) with
//! optional thermal/visible images, persisted through `sprout-store`.
//! Exposes a terminal CLI and a small web UI with CSV export and a QR deep
//! link per record.

pub mod cli;
pub mod config;
pub mod qr;
pub mod server;
