//! Data file path resolution

use std::path::PathBuf;

/// Environment variable overriding the data file location.
pub const DATA_ENV: &str = "SPROUT_DATA";

/// Resolve the store file path: an explicit `--data-file`/`SPROUT_DATA`
/// value wins, otherwise `~/.sprout/records.json`.
pub fn data_file_path(explicit: Option<PathBuf>) -> PathBuf {
  explicit.unwrap_or_else(default_data_file)
}

fn default_data_file() -> PathBuf {
  dirs::home_dir()
    .unwrap_or_else(|| std::path::Path::new("/tmp").to_path_buf())
    .join(".sprout")
    .join("records.json")
}
