//! HTML rendering helpers
//!
//! Pages are assembled from plain strings; every user-entered value goes
//! through [`escape`] before it lands in markup or an attribute.

use sprout_store::{Record, Store};

/// Escape text for use in HTML content and attribute values.
pub fn escape(raw: &str) -> String {
  let mut out = String::with_capacity(raw.len());
  for c in raw.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

fn page(title: &str, body: &str) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
  body {{ font-family: sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; color: #233; }}
  h1 {{ color: #2a6f2a; }}
  form.measurement {{ display: grid; grid-template-columns: 12rem 1fr; gap: .5rem 1rem; max-width: 36rem; }}
  table {{ border-collapse: collapse; width: 100%; }}
  th, td {{ border-bottom: 1px solid #cdc; padding: .4rem .6rem; text-align: left; vertical-align: middle; }}
  img.qr {{ width: 72px; height: 72px; image-rendering: pixelated; }}
  .error {{ background: #fdd; border: 1px solid #c66; padding: .6rem 1rem; }}
  .muted {{ color: #687; font-size: .85rem; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
    title = escape(title),
  )
}

/// The entry page: submission form on top, record list below, sorted by
/// date descending. Sorting is display-only; each row keeps its raw
/// insertion index for the detail link and the QR payload.
pub fn index_page(store: &Store, today: &str, error: Option<&str>) -> String {
  let mut body = String::from("<h1>Sprout</h1>\n<p class=\"muted\">Plant growth measurement log</p>\n");

  if let Some(message) = error {
    body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(message)));
  }

  body.push_str(&format!(
    r#"<h2>New measurement</h2>
<form class="measurement" method="post" action="/records" enctype="multipart/form-data">
  <label for="date">Date</label>
  <input type="date" id="date" name="date" value="{today}">
  <label for="height">Height (cm)</label>
  <input type="number" id="height" name="height" step="0.1" min="0">
  <label for="chlorophyll">Chlorophyll (mg/g)</label>
  <input type="text" id="chlorophyll" name="chlorophyll">
  <label for="nitrogen">Nitrogen (%)</label>
  <input type="text" id="nitrogen" name="nitrogen">
  <label for="thermalImage">Thermal image</label>
  <input type="file" id="thermalImage" name="thermalImage" accept="image/*">
  <label for="visibleImage">Visible image</label>
  <input type="file" id="visibleImage" name="visibleImage" accept="image/*">
  <span></span>
  <button type="submit">Save measurement</button>
</form>
"#,
    today = escape(today),
  ));

  body.push_str("<h2>Measurements</h2>\n");
  if store.is_empty() {
    body.push_str("<p>No measurements recorded yet.</p>\n");
  } else {
    let mut rows: Vec<(usize, &Record)> = store.records.iter().enumerate().collect();
    rows.sort_by(|a, b| b.1.timestamp.cmp(&a.1.timestamp));

    body.push_str(
      "<table>\n<tr><th>Date</th><th>Height (cm)</th><th>Chlorophyll (mg/g)</th><th>Nitrogen (%)</th><th></th><th>QR</th></tr>\n",
    );
    for (index, record) in rows {
      body.push_str(&format!(
        "<tr><td>{date}</td><td>{height}</td><td>{chlorophyll}</td><td>{nitrogen}</td>\
<td><a href=\"/record?index={index}\">details</a></td>\
<td><img class=\"qr\" src=\"/qr/{index}\" alt=\"QR link to record {index}\"></td></tr>\n",
        date = escape(&record.timestamp),
        height = escape(&record.height),
        chlorophyll = escape(&record.chlorophyll),
        nitrogen = escape(&record.nitrogen),
      ));
    }
    body.push_str("</table>\n");
    body.push_str(&format!(
      "<p class=\"muted\">{} record(s), last updated {} &middot; <a href=\"/export.csv\">Export CSV</a></p>\n",
      store.len(),
      store.last_updated.format("%Y-%m-%d %H:%M:%S UTC"),
    ));
  }

  page("Sprout", &body)
}

/// Detail view for one record.
pub fn detail_page(index: usize, record: &Record) -> String {
  let mut body = format!(
    r#"<h1>Measurement #{index}</h1>
<table>
<tr><th>Date</th><td>{date}</td></tr>
<tr><th>Height (cm)</th><td>{height}</td></tr>
<tr><th>Chlorophyll (mg/g)</th><td>{chlorophyll}</td></tr>
<tr><th>Nitrogen (%)</th><td>{nitrogen}</td></tr>
</table>
"#,
    date = escape(&record.timestamp),
    height = escape(&record.height),
    chlorophyll = escape(&record.chlorophyll),
    nitrogen = escape(&record.nitrogen),
  );

  if record.thermal_image.is_some() {
    body.push_str(&format!(
      "<h2>Thermal image</h2>\n<img src=\"/record/image?index={index}&amp;kind=thermal\" alt=\"thermal image\">\n",
    ));
  }
  if record.visible_image.is_some() {
    body.push_str(&format!(
      "<h2>Visible image</h2>\n<img src=\"/record/image?index={index}&amp;kind=visible\" alt=\"visible image\">\n",
    ));
  }

  body.push_str("<p><a href=\"/\">Back to all measurements</a></p>\n");
  page(&format!("Measurement #{index}"), &body)
}

/// A readable error page, used for bad indices and storage failures.
pub fn error_page(message: &str) -> String {
  let body = format!(
    "<h1>Something went wrong</h1>\n<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to all measurements</a></p>\n",
    escape(message),
  );
  page("Sprout", &body)
}
