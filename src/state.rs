use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::data::error::DataError;
use crate::data::loader;
use crate::data::model::{derive_range, Dataset, TimeRange};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// A new file load replaces the dataset and re-derives the window; window
/// and toggle changes only affect what gets rendered.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Display name of the loaded file, embedded in the chart title.
    pub file_name: String,

    /// Full time span of the loaded dataset.
    pub full_range: Option<TimeRange>,

    /// Selected window, in epoch seconds (the slider's unit).
    pub window_start: f64,
    pub window_end: f64,

    /// Whether the sizing scatter is drawn.
    pub show_sizing: bool,

    /// Directory scanned for selectable files.
    pub data_dir: PathBuf,

    /// `.csv` files found in `data_dir`, sorted.
    pub available_files: Vec<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mut state = Self {
            dataset: None,
            file_name: String::new(),
            full_range: None,
            window_start: 0.0,
            window_end: 0.0,
            show_sizing: true,
            data_dir: config.data_dir.clone(),
            available_files: Vec::new(),
            status_message: None,
        };
        state.refresh_file_list();
        state
    }

    /// Re-scan the data directory. An unreadable directory just empties the
    /// selector; it is not a load error.
    pub fn refresh_file_list(&mut self) {
        match loader::list_csv_files(&self.data_dir) {
            Ok(files) => self.available_files = files,
            Err(e) => {
                log::warn!("Could not list {}: {e}", self.data_dir.display());
                self.available_files.clear();
            }
        }
    }

    /// Load a file picked from the data-directory listing.
    pub fn select_file(&mut self, name: &str) {
        let path = self.data_dir.join(name);
        self.ingest(name.to_string(), loader::load_path(&path));
    }

    /// Load a file from an absolute path (Open dialog, native drag-and-drop).
    pub fn load_from_path(&mut self, path: &Path) {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed.csv")
            .to_string();
        self.ingest(name, loader::load_path(path));
    }

    /// Load a file that arrived as raw bytes plus a display name.
    pub fn load_from_bytes(&mut self, name: &str, bytes: &[u8]) {
        self.ingest(name.to_string(), loader::load_bytes(bytes));
    }

    /// A failed load leaves the previous dataset and selection untouched.
    fn ingest(&mut self, name: String, result: Result<Dataset, DataError>) {
        let loaded = result.and_then(|ds| derive_range(&ds).map(|range| (ds, range)));
        match loaded {
            Ok((dataset, range)) => {
                log::info!("Loaded {} rows from {name}", dataset.len());
                self.window_start = range.start_secs();
                self.window_end = range.end_secs();
                self.full_range = Some(range);
                self.dataset = Some(dataset);
                self.file_name = name;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load {name}: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// The active window. Falls back to the full range when the slider
    /// values cannot be converted back to timestamps.
    pub fn selected_range(&self) -> Option<TimeRange> {
        let full = self.full_range?;
        Some(TimeRange::from_epoch_secs(self.window_start, self.window_end).unwrap_or(full))
    }

    /// Keep the two slider handles inside the full span and ordered.
    pub fn clamp_window(&mut self) {
        if let Some(range) = &self.full_range {
            let (lo, hi) = (range.start_secs(), range.end_secs());
            self.window_start = self.window_start.clamp(lo, hi);
            self.window_end = self.window_end.clamp(lo, hi);
            if self.window_start > self.window_end {
                self.window_end = self.window_start;
            }
        }
    }

    /// Snap the window back to the dataset's full span.
    pub fn reset_window(&mut self) {
        if let Some(range) = &self.full_range {
            self.window_start = range.start_secs();
            self.window_end = range.end_secs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Date_Time,AQ Press [mbar],Oil Press [mbar],Droplet Dia From Area [um]
20240101 00:00:00.000000,1000,1010,50
20240101 00:00:01.000000,1002,1012,52
";

    fn empty_state() -> AppState {
        AppState::new(&Config {
            data_dir: PathBuf::from("no_such_dir"),
        })
    }

    #[test]
    fn successful_load_replaces_dataset_and_window() {
        let mut state = empty_state();
        state.load_from_bytes("run.csv", SAMPLE.as_bytes());

        assert_eq!(state.file_name, "run.csv");
        assert_eq!(state.dataset.as_ref().unwrap().len(), 2);
        assert!(state.status_message.is_none());

        let range = state.selected_range().unwrap();
        assert_eq!(range, state.full_range.unwrap());
    }

    #[test]
    fn failed_load_keeps_previous_dataset() {
        let mut state = empty_state();
        state.load_from_bytes("run.csv", SAMPLE.as_bytes());
        let before = state.selected_range();

        state.load_from_bytes("broken.csv", b"not,a,measurement\n1,2,3\n");

        assert_eq!(state.file_name, "run.csv");
        assert_eq!(state.dataset.as_ref().unwrap().len(), 2);
        assert_eq!(state.selected_range(), before);
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn clamping_keeps_handles_ordered_and_in_span() {
        let mut state = empty_state();
        state.load_from_bytes("run.csv", SAMPLE.as_bytes());
        let full = state.full_range.unwrap();

        state.window_start = full.end_secs() + 100.0;
        state.window_end = full.start_secs() - 100.0;
        state.clamp_window();

        assert_eq!(state.window_start, full.end_secs());
        assert_eq!(state.window_end, full.end_secs());
    }
}
