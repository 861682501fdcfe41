use eframe::egui;

use crate::data::model::PersonalityDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PersonaDashApp {
    pub state: AppState,
}

impl PersonaDashApp {
    pub fn new(dataset: PersonalityDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for PersonaDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu / title bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: chart controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the two charts side by side ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                plot::scatter_panel(&mut columns[0], &self.state);
                plot::boxplot_panel(&mut columns[1], &self.state);
            });
        });
    }
}
