use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DropScopeApp {
    pub state: AppState,
}

impl DropScopeApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Drag-and-drop loading. Native drops carry a path; drops forwarded
    /// without one (e.g. from a browser) carry the raw bytes instead.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = &file.path {
                let is_csv = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false);
                if is_csv {
                    self.state.load_from_path(path);
                }
            } else if let Some(bytes) = &file.bytes {
                self.state.load_from_bytes(&file.name, bytes);
            }
        }
    }
}

impl eframe::App for DropScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: files and time window ----
        egui::SidePanel::left("data_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::timeseries_plot(ui, &self.state);
        });
    }
}
