//! Terminal commands operating directly on the store file

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

use sprout_store::{render_csv, ImageAttachment, RecordInput, StoreFile};

/// Record one measurement.
pub fn add(
  data_file: &Path,
  date: Option<String>,
  height: String,
  chlorophyll: String,
  nitrogen: String,
  thermal_image: Option<&Path>,
  visible_image: Option<&Path>,
) -> Result<()> {
  let file = StoreFile::new(data_file);
  let mut store = file.load()?;

  let input = RecordInput {
    date: date.unwrap_or_else(today),
    height,
    chlorophyll,
    nitrogen,
    thermal_image: thermal_image.map(load_attachment).transpose()?,
    visible_image: visible_image.map(load_attachment).transpose()?,
  };

  let date = input.date.clone();
  let index = file.append(&mut store, input)?;
  println!("{} Recorded measurement #{} for {}", "✓".green(), index, date.cyan());
  Ok(())
}

/// Print all records, newest first. The index shown is the stored
/// insertion-order index, so it stays valid for `show` and QR links.
pub fn list(data_file: &Path) -> Result<()> {
  let file = StoreFile::new(data_file);
  let store = file.load()?;

  if store.is_empty() {
    println!("No measurements recorded yet.");
    return Ok(());
  }

  let mut rows: Vec<(usize, _)> = store.records.iter().enumerate().collect();
  rows.sort_by(|a, b| b.1.timestamp.cmp(&a.1.timestamp));

  for (index, record) in rows {
    let mut images = Vec::new();
    if record.thermal_image.is_some() {
      images.push("thermal");
    }
    if record.visible_image.is_some() {
      images.push("visible");
    }
    let images = if images.is_empty() { String::new() } else { format!(" [{}]", images.join(", ")) };

    println!(
      "#{} {} height {} cm, chlorophyll {} mg/g, nitrogen {} %{}",
      index.to_string().bold(),
      record.timestamp.cyan(),
      record.height,
      record.chlorophyll,
      record.nitrogen,
      images.dimmed(),
    );
  }

  println!("\n{} record(s), last updated {}", store.len(), store.last_updated);
  Ok(())
}

/// Print one record in full.
pub fn show(data_file: &Path, raw_index: &str) -> Result<()> {
  let file = StoreFile::new(data_file);
  let store = file.load()?;

  let index = store.resolve_index(raw_index)?;
  let record = store.get(index)?;

  println!("{} Record #{}", "✓".green(), index);
  println!("  date:        {}", record.timestamp.cyan());
  println!("  height:      {} cm", record.height);
  println!("  chlorophyll: {} mg/g", record.chlorophyll);
  println!("  nitrogen:    {} %", record.nitrogen);
  if let Some(thermal) = &record.thermal_image {
    println!("  thermal:     {} ({} bytes)", thermal.mime_type, thermal.data.len());
  }
  if let Some(visible) = &record.visible_image {
    println!("  visible:     {} ({} bytes)", visible.mime_type, visible.data.len());
  }
  Ok(())
}

/// Export every record as CSV to stdout or a file.
pub fn export(data_file: &Path, output: Option<&Path>) -> Result<()> {
  let file = StoreFile::new(data_file);
  let store = file.load()?;
  let csv = render_csv(&store)?;

  match output {
    Some(path) => {
      fs::write(path, &csv).with_context(|| format!("failed to write {}", path.display()))?;
      println!("{} Exported {} record(s) to {}", "✓".green(), store.len(), path.display());
    }
    None => print!("{csv}"),
  }
  Ok(())
}

fn today() -> String {
  chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Read an image file into an inline attachment, guessing the MIME type
/// from the extension.
fn load_attachment(path: &Path) -> Result<ImageAttachment> {
  let data = fs::read(path).with_context(|| format!("failed to read image {}", path.display()))?;
  Ok(ImageAttachment { mime_type: mime_for(path).to_string(), data })
}

fn mime_for(path: &Path) -> &'static str {
  match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
    Some("png") => "image/png",
    Some("jpg") | Some("jpeg") => "image/jpeg",
    Some("gif") => "image/gif",
    Some("webp") => "image/webp",
    Some("tif") | Some("tiff") => "image/tiff",
    _ => "application/octet-stream",
  }
}
