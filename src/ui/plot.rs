use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{BoxElem, BoxPlot, BoxSpread, Legend, MarkerShape, Plot, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (left chart panel)
// ---------------------------------------------------------------------------

/// Render the cached scatter spec.
pub fn scatter_panel(ui: &mut Ui, state: &AppState) {
    let spec = &state.scatter;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
    });

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let color = match &series.label {
                    Some(label) => state.color_map.color_for(label),
                    None => Color32::LIGHT_BLUE,
                };

                let mut points = Points::new(series.points.clone())
                    .color(color)
                    .radius(2.5)
                    .shape(MarkerShape::Circle);
                if let Some(label) = &series.label {
                    points = points.name(label);
                }
                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Box plot (right chart panel)
// ---------------------------------------------------------------------------

/// Render the cached box-plot spec: one box per personality type at integer
/// x positions, outliers drawn as loose points.
pub fn boxplot_panel(ui: &mut Ui, state: &AppState) {
    let spec = &state.boxplot;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
    });

    let group_labels: Vec<String> = spec.groups.iter().map(|g| g.label.clone()).collect();

    Plot::new("box_plot")
        .legend(Legend::default())
        .x_axis_label("Personality Type")
        .y_axis_label(spec.y_label.clone())
        .x_axis_formatter(move |mark, _range| {
            let nearest = mark.value.round();
            if (mark.value - nearest).abs() > 1e-6 || nearest < 0.0 {
                return String::new();
            }
            group_labels
                .get(nearest as usize)
                .cloned()
                .unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, group) in spec.groups.iter().enumerate() {
                let color = state.color_map.color_for(&group.label);
                let x = i as f64;

                let elem = BoxElem::new(
                    x,
                    BoxSpread::new(
                        group.lower_whisker,
                        group.q1,
                        group.median,
                        group.q3,
                        group.upper_whisker,
                    ),
                )
                .fill(color.gamma_multiply(0.35))
                .stroke(Stroke::new(1.5, color))
                .box_width(0.5);

                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&group.label));

                if !group.outliers.is_empty() {
                    let outliers: Vec<[f64; 2]> =
                        group.outliers.iter().map(|&y| [x, y]).collect();
                    plot_ui.points(
                        Points::new(outliers)
                            .color(color)
                            .radius(2.0)
                            .shape(MarkerShape::Circle),
                    );
                }
            }
        });
}
