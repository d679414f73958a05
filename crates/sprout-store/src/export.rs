//! CSV rendering of the measurement columns

use crate::error::StoreError;
use crate::store::Store;

/// Column order for exports. No index column, no image columns.
const HEADER: [&str; 4] = ["date", "height(cm)", "chlorophyll(mg/g)", "nitrogen(%)"];

/// Render every record as CSV, one row per record in insertion order,
/// header row first.
pub fn render_csv(store: &Store) -> Result<String, StoreError> {
  let mut writer = csv::Writer::from_writer(Vec::new());

  writer.write_record(HEADER).map_err(|e| StoreError::encode(e.to_string()))?;
  for record in &store.records {
    writer
      .write_record([&record.timestamp, &record.height, &record.chlorophyll, &record.nitrogen])
      .map_err(|e| StoreError::encode(e.to_string()))?;
  }

  let bytes = writer.into_inner().map_err(|e| StoreError::encode(e.to_string()))?;
  String::from_utf8(bytes).map_err(|e| StoreError::encode(e.to_string()))
}
