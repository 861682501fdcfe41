use eframe::egui::{self, Color32, RichText, Ui};

use crate::chart::humanize;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart controls
// ---------------------------------------------------------------------------

/// Render the control panel: the two axis selectors and the color-encode
/// checkbox. Options come straight from the dataset's feature columns, so
/// an invalid column can never be selected.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let columns = state.dataset.feature_columns.clone();

    ui.strong("X-Axis for Scatter Plot");
    let current_x = state.selection.x_column.clone();
    egui::ComboBox::from_id_salt("x_axis_selector")
        .selected_text(humanize(&current_x))
        .show_ui(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui
                    .selectable_label(current_x == *col, humanize(col))
                    .clicked()
                {
                    state.set_x_column(col.clone());
                }
            }
        });
    ui.add_space(8.0);

    ui.strong("Y-Axis for Plots");
    let current_y = state.selection.y_column.clone();
    egui::ComboBox::from_id_salt("y_axis_selector")
        .selected_text(humanize(&current_y))
        .show_ui(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui
                    .selectable_label(current_y == *col, humanize(col))
                    .clicked()
                {
                    state.set_y_column(col.clone());
                }
            }
        });
    ui.add_space(8.0);

    let mut color_encode = state.selection.color_encode;
    if ui
        .checkbox(&mut color_encode, "Color by Personality")
        .changed()
    {
        state.set_color_encode(color_encode);
    }

    ui.separator();
    ui.label(format!(
        "{} observations, {} personality types",
        state.dataset.len(),
        state.dataset.label_values.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / title bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(RichText::new("Human Personality Dashboard").strong());
        ui.label("Explore relationships between human traits and their personalities");

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user point the dashboard at a different dataset file. A failed
/// load keeps the current dataset and surfaces the error in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open personality dataset")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} observations with features {:?}",
                    dataset.len(),
                    dataset.feature_columns
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
