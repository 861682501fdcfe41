use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{CellValue, PersonalityDataset, LABEL_COLUMN};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a personality dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with column names, one observation per record
/// * `.json` – records-oriented array: `[{ "Feature": 1.0, ..., "Personality": "Introvert" }, ...]`
///
/// Every file must carry a `Personality` column (the label) plus at least
/// one feature column. Any failure here is fatal at start-up.
pub fn load_file(path: &Path) -> Result<PersonalityDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<PersonalityDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let label_idx = headers
        .iter()
        .position(|h| h == LABEL_COLUMN)
        .with_context(|| format!("CSV missing '{LABEL_COLUMN}' column"))?;

    let feature_columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != label_idx)
        .map(|(_, h)| h.clone())
        .collect();
    if feature_columns.is_empty() {
        bail!("CSV has no feature columns besides '{LABEL_COLUMN}'");
    }

    let mut columns: BTreeMap<String, Vec<CellValue>> = feature_columns
        .iter()
        .map(|c| (c.clone(), Vec::new()))
        .collect();
    let mut labels = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let label = record
            .get(label_idx)
            .with_context(|| format!("CSV row {row_no}: missing label cell"))?;
        labels.push(label.to_string());

        for (col_idx, value) in record.iter().enumerate() {
            if col_idx == label_idx {
                continue;
            }
            let col_name = &headers[col_idx];
            columns
                .get_mut(col_name)
                .with_context(|| format!("CSV row {row_no}: unexpected extra cell"))?
                .push(guess_cell_type(value));
        }
    }

    Ok(PersonalityDataset::from_columns(
        feature_columns,
        columns,
        labels,
    ))
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Time_spent_Alone": 4.0, "Stage_fear": "No", "Personality": "Extrovert" },
///   ...
/// ]
/// ```
///
/// Keys missing from a record become null cells. Column order follows the
/// sorted key set.
fn load_json(path: &Path) -> Result<PersonalityDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    // First pass: the union of keys across all records.
    let mut key_set: BTreeSet<String> = BTreeSet::new();
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        key_set.extend(obj.keys().cloned());
    }

    if !key_set.remove(LABEL_COLUMN) {
        bail!("JSON records missing '{LABEL_COLUMN}' key");
    }
    let feature_columns: Vec<String> = key_set.into_iter().collect();
    if feature_columns.is_empty() {
        bail!("JSON has no feature columns besides '{LABEL_COLUMN}'");
    }

    let mut columns: BTreeMap<String, Vec<CellValue>> = feature_columns
        .iter()
        .map(|c| (c.clone(), Vec::new()))
        .collect();
    let mut labels = Vec::new();

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let label = obj
            .get(LABEL_COLUMN)
            .and_then(|v| v.as_str())
            .with_context(|| format!("Row {i}: '{LABEL_COLUMN}' is missing or not a string"))?;
        labels.push(label.to_string());

        for col in &feature_columns {
            let cell = obj.get(col).map(json_to_cell).unwrap_or(CellValue::Null);
            columns
                .get_mut(col)
                .with_context(|| format!("Row {i}: unknown column '{col}'"))?
                .push(cell);
        }
    }

    Ok(PersonalityDataset::from_columns(
        feature_columns,
        columns,
        labels,
    ))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("persona-dash-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn csv_feature_columns_exclude_label() {
        let path = write_temp(
            "ok.csv",
            "Time_spent_Alone,Stage_fear,Personality\n4.0,No,Extrovert\n9.0,Yes,Introvert\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.feature_columns, vec!["Time_spent_Alone", "Stage_fear"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.labels, vec!["Extrovert", "Introvert"]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn csv_missing_label_column_fails() {
        let path = write_temp("nolabel.csv", "a,b\n1,2\n");
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("Personality"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn csv_ragged_row_fails() {
        let path = write_temp("ragged.csv", "a,Personality\n1,Introvert\n2\n");
        assert!(load_file(&path).is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn csv_only_label_column_fails() {
        let path = write_temp("onlylabel.csv", "Personality\nIntrovert\n");
        assert!(load_file(&path).is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_fails() {
        assert!(load_file(Path::new("/nonexistent/data.csv")).is_err());
    }

    #[test]
    fn unsupported_extension_fails() {
        let path = write_temp("data.parquet", "");
        assert!(load_file(&path).is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn json_records_load() {
        let path = write_temp(
            "ok.json",
            r#"[
                {"Going_outside": 5, "Personality": "Extrovert"},
                {"Going_outside": 1, "Personality": "Introvert"}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.feature_columns, vec!["Going_outside"]);
        assert_eq!(ds.numeric_column("Going_outside").unwrap(), &[5.0, 1.0]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn json_missing_key_becomes_null() {
        let path = write_temp(
            "gap.json",
            r#"[
                {"Friends_circle_size": 10, "Post_frequency": 3, "Personality": "Extrovert"},
                {"Friends_circle_size": 2, "Personality": "Introvert"}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        let view = ds.numeric_column("Post_frequency").unwrap();
        assert_eq!(view[0], 3.0);
        assert!(view[1].is_nan());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn cell_type_guessing() {
        assert_eq!(guess_cell_type("3"), CellValue::Integer(3));
        assert_eq!(guess_cell_type("2.5"), CellValue::Float(2.5));
        assert_eq!(guess_cell_type("true"), CellValue::Bool(true));
        assert_eq!(guess_cell_type("Yes"), CellValue::Text("Yes".to_string()));
        assert_eq!(guess_cell_type(""), CellValue::Null);
    }
}
