/// Chart builders: pure functions mapping (dataset, selections) to
/// render-independent chart specifications.
///
/// The specs carry everything the plot panels need (titles, axis labels,
/// point series, box groups) without referencing egui, so the builders can
/// be tested head-to-head against the dataset.
pub mod boxplot;
pub mod scatter;

pub use boxplot::{build_boxplot, BoxGroup, BoxplotSpec};
pub use scatter::{build_scatter, ScatterSeries, ScatterSpec};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The only failure a builder can produce. The interaction layer constrains
/// dropdown options to the dataset's feature columns, so hitting this means
/// a programming error upstream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("unknown feature column '{0}'")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// Axis titles
// ---------------------------------------------------------------------------

/// Humanize a column name for titles and axis labels:
/// `"Time_spent_Alone"` → `"Time Spent Alone"`.
pub fn humanize(column: &str) -> String {
    column
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
