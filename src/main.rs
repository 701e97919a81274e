mod app;
mod chart;
mod config;
mod data;
mod state;
mod ui;

use app::DropScopeApp;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::load();
    let state = AppState::new(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "DropScope – Pressure & Sizing Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(DropScopeApp::new(state)))),
    )
}
