use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default form-relay endpoint (Formspree).
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/xovnlblo";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    pub relay_endpoint: String,
    pub show_matrix_background: bool,
    pub window_width: f64,
    pub window_height: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            show_matrix_background: true,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    pub fn new(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    pub fn load(&self) -> Settings {
        if !self.settings_path.exists() {
            return Settings::default();
        }

        fs::read_to_string(&self.settings_path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, settings: &Settings) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(settings)?;
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.settings_path, content)
    }
}
