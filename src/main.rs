mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::LaunchBoardApp;
use eframe::egui;

/// Dataset read when no path is given on the command line.
const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // The dataset is loaded exactly once; a malformed file is fatal.
    let dataset = data::loader::load_csv(&path)
        .with_context(|| format!("loading launch records from {}", path.display()))?;
    log::info!(
        "Loaded {} launch records across {} sites from {}",
        dataset.len(),
        dataset.sites.len(),
        path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchBoardApp::new(dataset)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the dashboard window: {err}"))
}
