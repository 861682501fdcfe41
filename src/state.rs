use crate::chart::{build_boxplot, build_scatter, BoxplotSpec, ScatterSpec};
use crate::color::ColorMap;
use crate::data::model::PersonalityDataset;

/// Default axis columns, used when present in the dataset.
const DEFAULT_X: &str = "Time_spent_Alone";
const DEFAULT_Y: &str = "Social_event_attendance";

// ---------------------------------------------------------------------------
// Selection – the current control values
// ---------------------------------------------------------------------------

/// What the user has picked in the controls. Mutated only through the
/// [`AppState`] setters so the cached specs stay in sync.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub x_column: String,
    pub y_column: String,
    pub color_encode: bool,
}

impl Selection {
    /// Initial selection for a freshly loaded dataset: the original
    /// dashboard's defaults when those columns exist, else the first
    /// feature columns.
    fn defaults(dataset: &PersonalityDataset) -> Self {
        let pick = |preferred: &str, fallback: usize| -> String {
            if dataset.feature_columns.iter().any(|c| c == preferred) {
                preferred.to_string()
            } else {
                dataset
                    .feature_columns
                    .get(fallback)
                    .or_else(|| dataset.feature_columns.first())
                    .cloned()
                    .unwrap_or_default()
            }
        };
        Selection {
            x_column: pick(DEFAULT_X, 0),
            y_column: pick(DEFAULT_Y, 1),
            color_encode: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is immutable after load; `scatter` and `boxplot` are the
/// cached chart specs the plot panels render, replaced whenever a control
/// that feeds them changes.
pub struct AppState {
    pub dataset: PersonalityDataset,
    pub selection: Selection,
    pub scatter: ScatterSpec,
    pub boxplot: BoxplotSpec,
    /// Label value → color, used by the color-encoded scatter series.
    pub color_map: ColorMap,
    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state from the dataset loaded at start-up.
    ///
    /// The loader guarantees at least one feature column, so the initial
    /// builds cannot hit an unknown column.
    pub fn new(dataset: PersonalityDataset) -> Self {
        let selection = Selection::defaults(&dataset);
        let scatter = build_scatter(
            &dataset,
            &selection.x_column,
            &selection.y_column,
            selection.color_encode,
        )
        .unwrap_or_else(|e| {
            // Unreachable with loader-validated input; keep an empty spec
            // rather than crashing the UI.
            log::error!("initial scatter build failed: {e}");
            empty_scatter()
        });
        let boxplot = build_boxplot(&dataset, &selection.y_column).unwrap_or_else(|e| {
            log::error!("initial boxplot build failed: {e}");
            empty_boxplot()
        });
        let color_map = ColorMap::new(&dataset.label_values);

        AppState {
            dataset,
            selection,
            scatter,
            boxplot,
            color_map,
            status_message: None,
        }
    }

    /// Replace the dataset at runtime (File → Open…). Resets the selection
    /// to the new dataset's defaults and rebuilds both charts.
    pub fn set_dataset(&mut self, dataset: PersonalityDataset) {
        *self = AppState::new(dataset);
    }

    /// X-axis change: rebuilds the scatter spec only.
    pub fn set_x_column(&mut self, column: String) {
        if self.selection.x_column == column {
            return;
        }
        self.selection.x_column = column;
        self.rebuild_scatter();
    }

    /// Y-axis change: rebuilds both the scatter and box specs.
    pub fn set_y_column(&mut self, column: String) {
        if self.selection.y_column == column {
            return;
        }
        self.selection.y_column = column;
        self.rebuild_scatter();
        self.rebuild_boxplot();
    }

    /// Color-encode toggle: rebuilds the scatter spec only.
    pub fn set_color_encode(&mut self, color_encode: bool) {
        if self.selection.color_encode == color_encode {
            return;
        }
        self.selection.color_encode = color_encode;
        self.rebuild_scatter();
    }

    fn rebuild_scatter(&mut self) {
        match build_scatter(
            &self.dataset,
            &self.selection.x_column,
            &self.selection.y_column,
            self.selection.color_encode,
        ) {
            Ok(spec) => self.scatter = spec,
            Err(e) => log::error!("scatter build failed: {e}"),
        }
    }

    fn rebuild_boxplot(&mut self) {
        match build_boxplot(&self.dataset, &self.selection.y_column) {
            Ok(spec) => self.boxplot = spec,
            Err(e) => log::error!("boxplot build failed: {e}"),
        }
    }
}

fn empty_scatter() -> ScatterSpec {
    ScatterSpec {
        title: String::new(),
        x_label: String::new(),
        y_label: String::new(),
        x_column: String::new(),
        y_column: String::new(),
        color_encoded: false,
        series: Vec::new(),
    }
}

fn empty_boxplot() -> BoxplotSpec {
    BoxplotSpec {
        title: String::new(),
        y_label: String::new(),
        y_column: String::new(),
        groups: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::data::model::CellValue;

    use super::*;

    fn sample_dataset() -> PersonalityDataset {
        let mut columns = BTreeMap::new();
        for (name, values) in [
            ("Time_spent_Alone", [9.0, 2.0, 8.0, 1.0]),
            ("Social_event_attendance", [1.0, 7.0, 2.0, 9.0]),
            ("Going_outside", [2.0, 6.0, 1.0, 7.0]),
        ] {
            columns.insert(
                name.to_string(),
                values.iter().map(|&v| CellValue::Float(v)).collect(),
            );
        }
        let labels = ["Introvert", "Extrovert", "Introvert", "Extrovert"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        PersonalityDataset::from_columns(
            vec![
                "Time_spent_Alone".to_string(),
                "Social_event_attendance".to_string(),
                "Going_outside".to_string(),
            ],
            columns,
            labels,
        )
    }

    #[test]
    fn defaults_prefer_the_original_dashboard_columns() {
        let state = AppState::new(sample_dataset());
        assert_eq!(state.selection.x_column, "Time_spent_Alone");
        assert_eq!(state.selection.y_column, "Social_event_attendance");
        assert!(!state.selection.color_encode);
    }

    #[test]
    fn defaults_fall_back_to_first_columns() {
        let mut columns = BTreeMap::new();
        columns.insert("a".to_string(), vec![CellValue::Integer(1)]);
        columns.insert("b".to_string(), vec![CellValue::Integer(2)]);
        let ds = PersonalityDataset::from_columns(
            vec!["a".to_string(), "b".to_string()],
            columns,
            vec!["Introvert".to_string()],
        );
        let state = AppState::new(ds);
        assert_eq!(state.selection.x_column, "a");
        assert_eq!(state.selection.y_column, "b");
    }

    #[test]
    fn x_change_rebuilds_only_the_scatter() {
        let mut state = AppState::new(sample_dataset());
        let old_scatter = state.scatter.clone();
        let old_boxplot = state.boxplot.clone();

        state.set_x_column("Going_outside".to_string());

        assert_ne!(state.scatter, old_scatter);
        assert_eq!(state.scatter.x_column, "Going_outside");
        assert_eq!(state.boxplot, old_boxplot);
    }

    #[test]
    fn y_change_rebuilds_both_charts() {
        let mut state = AppState::new(sample_dataset());
        let old_scatter = state.scatter.clone();
        let old_boxplot = state.boxplot.clone();

        state.set_y_column("Going_outside".to_string());

        assert_ne!(state.scatter, old_scatter);
        assert_ne!(state.boxplot, old_boxplot);
        assert_eq!(state.boxplot.y_column, "Going_outside");
    }

    #[test]
    fn color_toggle_rebuilds_only_the_scatter() {
        let mut state = AppState::new(sample_dataset());
        let old_scatter = state.scatter.clone();
        let old_boxplot = state.boxplot.clone();

        state.set_color_encode(true);

        assert!(state.scatter.color_encoded);
        assert_eq!(state.scatter.point_count(), old_scatter.point_count());
        assert_eq!(state.boxplot, old_boxplot);
    }

    #[test]
    fn unchanged_selection_is_a_no_op() {
        let mut state = AppState::new(sample_dataset());
        let old_scatter = state.scatter.clone();
        state.set_x_column("Time_spent_Alone".to_string());
        assert_eq!(state.scatter, old_scatter);
    }
}
