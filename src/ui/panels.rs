use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::model::format_timestamp;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – file selector and time window
// ---------------------------------------------------------------------------

/// Render the left data panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data Files");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("Refresh").clicked() {
            state.refresh_file_list();
        }
        ui.label(
            RichText::new(state.data_dir.display().to_string())
                .monospace()
                .weak(),
        );
    });
    ui.separator();

    if state.available_files.is_empty() {
        ui.label("No .csv files in the data directory.");
    }

    // Clone so the click handler can mutate state inside the loop.
    let files = state.available_files.clone();
    ScrollArea::vertical()
        .auto_shrink([false, true])
        .max_height(240.0)
        .show(ui, |ui: &mut Ui| {
            for name in &files {
                if ui
                    .selectable_label(state.file_name == *name, name)
                    .clicked()
                {
                    state.select_file(name);
                }
            }
        });

    ui.separator();
    ui.heading("Time Window");

    let Some(full_range) = state.full_range else {
        ui.label("Load a file to enable the window slider.");
        return;
    };

    let (lo, hi) = (full_range.start_secs(), full_range.end_secs());

    let start_changed = ui
        .add(
            Slider::new(&mut state.window_start, lo..=hi)
                .text("Start")
                .custom_formatter(|v, _| format_timestamp(v)),
        )
        .changed();
    let end_changed = ui
        .add(
            Slider::new(&mut state.window_end, lo..=hi)
                .text("End")
                .custom_formatter(|v, _| format_timestamp(v)),
        )
        .changed();
    if start_changed || end_changed {
        state.clamp_window();
    }

    if ui.button("Full Range").clicked() {
        state.reset_window();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Refresh List").clicked() {
                state.refresh_file_list();
                ui.close_menu();
            }
        });

        ui.separator();

        match &state.dataset {
            Some(ds) => {
                ui.label(format!("{}: {} rows", state.file_name, ds.len()));
            }
            None => {
                ui.label("No data loaded");
            }
        }

        ui.separator();

        if ui
            .selectable_label(state.show_sizing, "Sizing Trace")
            .clicked()
        {
            state.show_sizing = !state.show_sizing;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open measurement CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_from_path(&path);
    }
}
