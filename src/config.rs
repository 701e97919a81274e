use std::path::PathBuf;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "dropscope.json";

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "DROPSCOPE_DATA_DIR";

/// Startup settings. Read once in `main`, never reloaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned for selectable `.csv` files.
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// Defaults, then `dropscope.json` when present, then the
    /// `DROPSCOPE_DATA_DIR` environment variable on top.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring malformed {CONFIG_FILE}: {e}");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        };

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_falls_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn data_dir_is_configurable() {
        let config: Config = serde_json::from_str(r#"{"data_dir": "/srv/runs"}"#).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/runs"));
    }
}
