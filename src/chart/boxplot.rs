use serde::Serialize;

use crate::data::model::PersonalityDataset;

use super::{humanize, ChartError};

// ---------------------------------------------------------------------------
// BoxplotSpec – value object describing the box plot
// ---------------------------------------------------------------------------

/// Render-independent description of the box plot: one box per label value,
/// summarizing the selected y column within that group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxplotSpec {
    pub title: String,
    pub y_label: String,
    pub y_column: String,
    /// One group per distinct label value, sorted label order.
    pub groups: Vec<BoxGroup>,
}

/// Five-number summary of one label group, Tukey style: whiskers sit on the
/// most extreme data points within 1.5 × IQR of the quartiles, everything
/// beyond is an outlier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxGroup {
    pub label: String,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the box-plot spec for the selected y column, grouped by label.
///
/// Groups with no finite values are dropped; quartiles use the
/// linear-interpolation quantile method.
pub fn build_boxplot(
    dataset: &PersonalityDataset,
    y_column: &str,
) -> Result<BoxplotSpec, ChartError> {
    let ys = dataset
        .numeric_column(y_column)
        .ok_or_else(|| ChartError::UnknownColumn(y_column.to_string()))?;

    let groups = dataset
        .label_values
        .iter()
        .filter_map(|label| {
            let mut values: Vec<f64> = ys
                .iter()
                .zip(dataset.labels.iter())
                .filter(|(y, l)| y.is_finite() && *l == label)
                .map(|(&y, _)| y)
                .collect();
            if values.is_empty() {
                return None;
            }
            values.sort_by(|a, b| a.total_cmp(b));
            Some(summarize(label, &values))
        })
        .collect();

    Ok(BoxplotSpec {
        title: format!("{} by Personality Type", humanize(y_column)),
        y_label: humanize(y_column),
        y_column: y_column.to_string(),
        groups,
    })
}

/// Five-number summary of a sorted, non-empty value slice.
fn summarize(label: &str, sorted: &[f64]) -> BoxGroup {
    let q1 = quantile(sorted, 0.25);
    let median = quantile(sorted, 0.5);
    let q3 = quantile(sorted, 0.75);
    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|&v| v >= low_fence)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_fence)
        .unwrap_or(q3);
    let outliers = sorted
        .iter()
        .copied()
        .filter(|&v| v < low_fence || v > high_fence)
        .collect();

    BoxGroup {
        label: label.to_string(),
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
        outliers,
    }
}

/// Linear-interpolation quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
