use serde::Serialize;

use crate::data::model::PersonalityDataset;

use super::{humanize, ChartError};

// ---------------------------------------------------------------------------
// ScatterSpec – value object describing the scatter chart
// ---------------------------------------------------------------------------

/// Render-independent description of the scatter plot. Rebuilt from scratch
/// on every interaction; the previous spec is simply dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_column: String,
    pub y_column: String,
    pub color_encoded: bool,
    /// One unnamed series, or one per label value when color-encoded.
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    /// Label value behind this series; `None` for the single plain series.
    pub label: Option<String>,
    pub points: Vec<[f64; 2]>,
}

impl ScatterSpec {
    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the scatter spec for the selected axes.
///
/// One point per observation at (x, y); rows whose numeric view is not
/// finite on either axis are skipped. With `color_encode` the points are
/// partitioned into one series per label value (sorted label order),
/// otherwise they all land in a single unnamed series.
pub fn build_scatter(
    dataset: &PersonalityDataset,
    x_column: &str,
    y_column: &str,
    color_encode: bool,
) -> Result<ScatterSpec, ChartError> {
    let xs = dataset
        .numeric_column(x_column)
        .ok_or_else(|| ChartError::UnknownColumn(x_column.to_string()))?;
    let ys = dataset
        .numeric_column(y_column)
        .ok_or_else(|| ChartError::UnknownColumn(y_column.to_string()))?;

    let series = if color_encode {
        dataset
            .label_values
            .iter()
            .map(|label| ScatterSeries {
                label: Some(label.clone()),
                points: collect_points(xs, ys, Some((label, &dataset.labels))),
            })
            .collect()
    } else {
        vec![ScatterSeries {
            label: None,
            points: collect_points(xs, ys, None),
        }]
    };

    Ok(ScatterSpec {
        title: format!("{} vs. {}", humanize(x_column), humanize(y_column)),
        x_label: humanize(x_column),
        y_label: humanize(y_column),
        x_column: x_column.to_string(),
        y_column: y_column.to_string(),
        color_encoded: color_encode,
        series,
    })
}

fn collect_points(
    xs: &[f64],
    ys: &[f64],
    group: Option<(&str, &[String])>,
) -> Vec<[f64; 2]> {
    xs.iter()
        .zip(ys.iter())
        .enumerate()
        .filter(|(i, (x, y))| {
            if !x.is_finite() || !y.is_finite() {
                return false;
            }
            match group {
                Some((label, labels)) => labels[*i] == label,
                None => true,
            }
        })
        .map(|(_, (&x, &y))| [x, y])
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::data::model::CellValue;

    use super::*;

    fn sample_dataset() -> PersonalityDataset {
        let mut columns = BTreeMap::new();
        columns.insert(
            "Time_spent_Alone".to_string(),
            vec![
                CellValue::Float(9.0),
                CellValue::Float(2.0),
                CellValue::Float(8.0),
                CellValue::Float(1.0),
            ],
        );
        columns.insert(
            "Social_event_attendance".to_string(),
            vec![
                CellValue::Integer(1),
                CellValue::Integer(7),
                CellValue::Integer(2),
                CellValue::Integer(9),
            ],
        );
        let labels = ["Introvert", "Extrovert", "Introvert", "Extrovert"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        PersonalityDataset::from_columns(
            vec![
                "Time_spent_Alone".to_string(),
                "Social_event_attendance".to_string(),
            ],
            columns,
            labels,
        )
    }

    #[test]
    fn point_count_equals_row_count() {
        let ds = sample_dataset();
        let spec =
            build_scatter(&ds, "Time_spent_Alone", "Social_event_attendance", false).unwrap();
        assert_eq!(spec.point_count(), ds.len());
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].label, None);
    }

    #[test]
    fn color_encoding_splits_series_without_moving_points() {
        let ds = sample_dataset();
        let plain =
            build_scatter(&ds, "Time_spent_Alone", "Social_event_attendance", false).unwrap();
        let colored =
            build_scatter(&ds, "Time_spent_Alone", "Social_event_attendance", true).unwrap();

        assert_eq!(colored.series.len(), ds.label_values.len());
        assert_eq!(colored.point_count(), plain.point_count());

        // Same multiset of positions either way.
        let mut plain_points: Vec<[f64; 2]> =
            plain.series.iter().flat_map(|s| s.points.clone()).collect();
        let mut colored_points: Vec<[f64; 2]> =
            colored.series.iter().flat_map(|s| s.points.clone()).collect();
        plain_points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        colored_points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(plain_points, colored_points);
    }

    #[test]
    fn series_follow_sorted_label_order() {
        let ds = sample_dataset();
        let spec =
            build_scatter(&ds, "Time_spent_Alone", "Social_event_attendance", true).unwrap();
        let names: Vec<_> = spec.series.iter().map(|s| s.label.clone().unwrap()).collect();
        assert_eq!(names, vec!["Extrovert", "Introvert"]);
        // Extroverts are rows 1 and 3.
        assert_eq!(spec.series[0].points, vec![[2.0, 7.0], [1.0, 9.0]]);
    }

    #[test]
    fn title_uses_humanized_column_names() {
        let ds = sample_dataset();
        let spec =
            build_scatter(&ds, "Time_spent_Alone", "Social_event_attendance", false).unwrap();
        assert_eq!(spec.title, "Time Spent Alone vs. Social Event Attendance");
        assert_eq!(spec.x_label, "Time Spent Alone");
        assert_eq!(spec.y_label, "Social Event Attendance");
    }

    #[test]
    fn unknown_column_is_rejected() {
        let ds = sample_dataset();
        let err = build_scatter(&ds, "Nope", "Social_event_attendance", false).unwrap_err();
        assert_eq!(err, ChartError::UnknownColumn("Nope".to_string()));
    }

    #[test]
    fn spec_serializes_to_json() {
        let ds = sample_dataset();
        let spec =
            build_scatter(&ds, "Time_spent_Alone", "Social_event_attendance", true).unwrap();
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"x_column\":\"Time_spent_Alone\""));
        assert!(json.contains("\"color_encoded\":true"));
        assert!(json.contains("\"label\":\"Extrovert\""));
    }

    #[test]
    fn non_finite_rows_are_skipped() {
        let mut columns = BTreeMap::new();
        columns.insert(
            "a".to_string(),
            vec![CellValue::Float(1.0), CellValue::Null, CellValue::Float(3.0)],
        );
        columns.insert(
            "b".to_string(),
            vec![
                CellValue::Float(1.0),
                CellValue::Float(2.0),
                CellValue::Float(3.0),
            ],
        );
        let labels = vec!["Introvert".to_string(); 3];
        let ds = PersonalityDataset::from_columns(
            vec!["a".to_string(), "b".to_string()],
            columns,
            labels,
        );
        let spec = build_scatter(&ds, "a", "b", false).unwrap();
        assert_eq!(spec.point_count(), 2);
    }
}
