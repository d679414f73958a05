//! QR deep links
//!
//! Each record gets a scannable link encoding the base application address
//! plus the record's insertion-order index as a query parameter. The index
//! in the payload is always the raw stored index, never the position in the
//! date-sorted display list.

use anyhow::Result;
use image::Luma;
use qrcode::QrCode;
use std::io::Cursor;

/// Build the detail-view URL a QR code points at.
pub fn detail_url(base_url: &str, index: usize) -> String {
  format!("{}/record?index={index}", base_url.trim_end_matches('/'))
}

/// Render a URL as a PNG QR code.
pub fn png(url: &str) -> Result<Vec<u8>> {
  let code = QrCode::new(url.as_bytes())?;
  let rendered = code.render::<Luma<u8>>().min_dimensions(240, 240).build();

  let mut bytes = Vec::new();
  image::DynamicImage::ImageLuma8(rendered)
    .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
  Ok(bytes)
}
