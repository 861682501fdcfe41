use std::collections::{BTreeMap, BTreeSet};

/// Name of the label column every dataset must carry.
pub const LABEL_COLUMN: &str = "Personality";

// ---------------------------------------------------------------------------
// CellValue – a single cell in a feature column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value covering the dtypes seen in the source CSV.
/// Using `BTreeMap` / `BTreeSet` downstream so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                Text(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for axis placement.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// PersonalityDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed per-column numeric views.
///
/// Rows are observations; `feature_columns` keeps the source header order
/// (label column excluded). Categorical columns get a stable ordinal
/// encoding so every feature column can be placed on a plot axis.
#[derive(Debug, Clone)]
pub struct PersonalityDataset {
    /// Ordered list of feature-column names (excludes the label column).
    pub feature_columns: Vec<String>,
    /// Per-row label value, one entry per observation.
    pub labels: Vec<String>,
    /// Sorted distinct label values present in the data.
    pub label_values: Vec<String>,
    /// For each feature column the sorted set of unique values.
    pub unique_values: BTreeMap<String, BTreeSet<CellValue>>,
    /// Per-column numeric view: raw numbers, or ordinal codes for
    /// categorical columns. Nulls become NaN.
    numeric: BTreeMap<String, Vec<f64>>,
}

impl PersonalityDataset {
    /// Build the dataset from column-major cells plus the label column.
    ///
    /// All columns in `columns` must have `labels.len()` entries; the
    /// loaders guarantee this by construction.
    pub fn from_columns(
        feature_columns: Vec<String>,
        columns: BTreeMap<String, Vec<CellValue>>,
        labels: Vec<String>,
    ) -> Self {
        let mut unique_values: BTreeMap<String, BTreeSet<CellValue>> = BTreeMap::new();
        for (col, cells) in &columns {
            unique_values.insert(col.clone(), cells.iter().cloned().collect());
        }

        let label_values: Vec<String> = {
            let set: BTreeSet<&String> = labels.iter().collect();
            set.into_iter().cloned().collect()
        };

        let mut numeric = BTreeMap::new();
        for (col, cells) in &columns {
            numeric.insert(col.clone(), numeric_view(cells, &unique_values[col]));
        }

        PersonalityDataset {
            feature_columns,
            labels,
            label_values,
            unique_values,
            numeric,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the dataset has no observations.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The numeric view of a feature column, one value per row.
    pub fn numeric_column(&self, column: &str) -> Option<&[f64]> {
        self.numeric.get(column).map(|v| v.as_slice())
    }
}

/// Compute the numeric view of one column.
///
/// A column where every non-null cell parses as a number keeps its raw
/// values. Anything else is treated as categorical: each cell maps to the
/// index of its value in the sorted unique set. Nulls become NaN either way.
fn numeric_view(cells: &[CellValue], unique: &BTreeSet<CellValue>) -> Vec<f64> {
    let all_numeric = cells
        .iter()
        .all(|c| matches!(c, CellValue::Null) || c.as_f64().is_some());

    if all_numeric {
        return cells
            .iter()
            .map(|c| c.as_f64().unwrap_or(f64::NAN))
            .collect();
    }

    let codes: BTreeMap<&CellValue, f64> = unique
        .iter()
        .filter(|v| !matches!(v, CellValue::Null))
        .enumerate()
        .map(|(i, v)| (v, i as f64))
        .collect();

    cells
        .iter()
        .map(|c| match c {
            CellValue::Null => f64::NAN,
            other => codes.get(other).copied().unwrap_or(f64::NAN),
        })
        .collect()
}
