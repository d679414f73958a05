//! Measurement records and submission validation

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// An image carried inline in the store file. The bytes are base64-encoded
/// in the JSON so the store stays a single self-contained file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
  pub mime_type: String,
  #[serde(with = "base64_bytes")]
  pub data: Vec<u8>,
}

/// One measurement event. `timestamp` is the user-chosen date (`YYYY-MM-DD`)
/// and is immutable once stored; the measurement values are kept as the
/// strings the user entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
  pub timestamp: String,
  /// Height in centimeters.
  pub height: String,
  /// Chlorophyll content in mg/g.
  pub chlorophyll: String,
  /// Nitrogen content in %.
  pub nitrogen: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub thermal_image: Option<ImageAttachment>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub visible_image: Option<ImageAttachment>,
}

/// An unvalidated submission, as it arrives from a form or the CLI.
#[derive(Debug, Clone, Default)]
pub struct RecordInput {
  pub date: String,
  pub height: String,
  pub chlorophyll: String,
  pub nitrogen: String,
  pub thermal_image: Option<ImageAttachment>,
  pub visible_image: Option<ImageAttachment>,
}

impl RecordInput {
  /// Check the required fields. Every missing field is reported, not just
  /// the first one, so the form can flag them all at once. A present height
  /// must also parse as a non-negative number.
  pub fn validate(&self) -> Result<(), StoreError> {
    let mut problems = Vec::new();

    for (name, value) in [
      ("height", &self.height),
      ("chlorophyll", &self.chlorophyll),
      ("nitrogen", &self.nitrogen),
    ] {
      if value.trim().is_empty() {
        problems.push(format!("missing required field: {name}"));
      }
    }

    if !self.height.trim().is_empty() {
      match self.height.trim().parse::<f64>() {
        Ok(value) if value >= 0.0 => {}
        _ => problems.push(format!("height must be a non-negative number, got '{}'", self.height)),
      }
    }

    if problems.is_empty() {
      Ok(())
    } else {
      Err(StoreError::validation(problems))
    }
  }

  /// Consume the validated input into a stored record.
  pub(crate) fn into_record(self) -> Record {
    Record {
      timestamp: self.date,
      height: self.height,
      chlorophyll: self.chlorophyll,
      nitrogen: self.nitrogen,
      thermal_image: self.thermal_image,
      visible_image: self.visible_image,
    }
  }
}

mod base64_bytes {
  use base64::engine::general_purpose::STANDARD;
  use base64::Engine;
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(bytes))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    STANDARD.decode(encoded.as_bytes()).map_err(serde::de::Error::custom)
  }
}
