#[cfg(test)]
mod store_tests {
  use sprout_store::{ImageAttachment, RecordInput, StoreError, StoreFile};
  use tempfile::TempDir;

  fn temp_store() -> (TempDir, StoreFile) {
    let temp = TempDir::new().unwrap();
    let file = StoreFile::new(temp.path().join("records.json"));
    (temp, file)
  }

  fn sample_input() -> RecordInput {
    RecordInput {
      date: "2024-05-01".to_string(),
      height: "12.5".to_string(),
      chlorophyll: "2.1".to_string(),
      nitrogen: "1.8".to_string(),
      ..RecordInput::default()
    }
  }

  #[test]
  fn test_load_initializes_missing_file() {
    let (_temp, file) = temp_store();

    let store = file.load().unwrap();
    assert!(store.is_empty());
    assert!(file.path().exists());
  }

  #[test]
  fn test_append_assigns_next_index() {
    let (_temp, file) = temp_store();
    let mut store = file.load().unwrap();

    let index = file.append(&mut store, sample_input()).unwrap();
    assert_eq!(index, 0);
    assert_eq!(store.len(), 1);

    let mut second = sample_input();
    second.date = "2024-05-02".to_string();
    let index = file.append(&mut store, second).unwrap();
    assert_eq!(index, 1);
    assert_eq!(store.len(), 2);
  }

  #[test]
  fn test_get_returns_appended_record() {
    let (_temp, file) = temp_store();
    let mut store = file.load().unwrap();
    file.append(&mut store, sample_input()).unwrap();

    let record = store.get(0).unwrap();
    assert_eq!(record.timestamp, "2024-05-01");
    assert_eq!(record.height, "12.5");
    assert_eq!(record.chlorophyll, "2.1");
    assert_eq!(record.nitrogen, "1.8");

    assert!(store.get(1).is_err());
  }

  #[test]
  fn test_resolve_index_rejects_bad_values() {
    let (_temp, file) = temp_store();
    let mut store = file.load().unwrap();
    file.append(&mut store, sample_input()).unwrap();

    assert_eq!(store.resolve_index("0").unwrap(), 0);

    for raw in ["1", "-1", "abc", "0.5", ""] {
      let err = store.resolve_index(raw).unwrap_err();
      assert!(matches!(err, StoreError::InvalidIndex { .. }), "expected InvalidIndex for '{raw}'");
    }
  }

  #[test]
  fn test_validation_lists_every_missing_field() {
    let (_temp, file) = temp_store();
    let mut store = file.load().unwrap();

    let mut input = sample_input();
    input.chlorophyll = String::new();
    input.nitrogen = "  ".to_string();

    let err = file.append(&mut store, input).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("chlorophyll"));
    assert!(message.contains("nitrogen"));
    assert!(!message.contains("height"));

    // Rejected submission leaves the store untouched
    assert_eq!(store.len(), 0);
    let reloaded = file.load().unwrap();
    assert_eq!(reloaded.len(), 0);
  }

  #[test]
  fn test_height_must_be_non_negative_number() {
    let (_temp, file) = temp_store();
    let mut store = file.load().unwrap();

    for bad in ["-3", "tall"] {
      let mut input = sample_input();
      input.height = bad.to_string();
      let err = file.append(&mut store, input).unwrap_err();
      assert!(err.is_validation(), "expected validation failure for height '{bad}'");
    }
    assert_eq!(store.len(), 0);
  }

  #[test]
  fn test_save_load_round_trip_preserves_records() {
    let (_temp, file) = temp_store();
    let mut store = file.load().unwrap();

    let mut input = sample_input();
    input.thermal_image = Some(ImageAttachment {
      mime_type: "image/png".to_string(),
      data: vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a],
    });
    file.append(&mut store, input).unwrap();

    let mut second = sample_input();
    second.date = "2024-05-03".to_string();
    second.height = "13.0".to_string();
    file.append(&mut store, second).unwrap();

    let reloaded = file.load().unwrap();
    assert_eq!(reloaded.records, store.records);

    let thermal = reloaded.get(0).unwrap().thermal_image.as_ref().unwrap();
    assert_eq!(thermal.mime_type, "image/png");
    assert_eq!(thermal.data, vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a]);
    assert!(reloaded.get(0).unwrap().visible_image.is_none());
  }

  #[test]
  fn test_corrupt_file_surfaces_error() {
    let (_temp, file) = temp_store();
    std::fs::write(file.path(), "{not json").unwrap();

    let err = file.load().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));

    // The broken file is left alone, never reinitialized
    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "{not json");
  }

  #[test]
  fn test_wrong_shape_is_corrupt_too() {
    let (_temp, file) = temp_store();
    std::fs::write(file.path(), r#"{"records": 42}"#).unwrap();

    let err = file.load().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
  }
}

#[cfg(test)]
mod export_tests {
  use sprout_store::{render_csv, RecordInput, StoreFile};
  use tempfile::TempDir;

  #[test]
  fn test_csv_header_and_row_per_record() {
    let temp = TempDir::new().unwrap();
    let file = StoreFile::new(temp.path().join("records.json"));
    let mut store = file.load().unwrap();

    for (date, height) in [("2024-05-01", "12.5"), ("2024-05-02", "13.1")] {
      let input = RecordInput {
        date: date.to_string(),
        height: height.to_string(),
        chlorophyll: "2.1".to_string(),
        nitrogen: "1.8".to_string(),
        ..RecordInput::default()
      };
      file.append(&mut store, input).unwrap();
    }

    let csv = render_csv(&store).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "date,height(cm),chlorophyll(mg/g),nitrogen(%)");
    assert_eq!(lines[1], "2024-05-01,12.5,2.1,1.8");
    assert_eq!(lines[2], "2024-05-02,13.1,2.1,1.8");
  }

  #[test]
  fn test_csv_of_empty_store_is_header_only() {
    let temp = TempDir::new().unwrap();
    let file = StoreFile::new(temp.path().join("records.json"));
    let store = file.load().unwrap();

    let csv = render_csv(&store).unwrap();
    assert_eq!(csv.lines().count(), 1);
  }
}
