mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::PersonaDashApp;
use eframe::egui;

/// Dataset loaded at start-up; missing or malformed is fatal.
const DEFAULT_DATASET: &str = "dataset/processed_data.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let dataset = match data::loader::load_file(Path::new(DEFAULT_DATASET)) {
        Ok(ds) => {
            log::info!(
                "Loaded {} observations with features {:?}",
                ds.len(),
                ds.feature_columns
            );
            ds
        }
        Err(e) => {
            log::error!("Failed to load {DEFAULT_DATASET}: {e:#}");
            eprintln!("Cannot start without a dataset: {e:#}");
            eprintln!("Hint: run `cargo run --bin generate_sample` to create one.");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Human Personality Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(PersonaDashApp::new(dataset)))),
    )
}
