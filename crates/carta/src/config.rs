use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartaConfig {
    pub api_base_url: String,
}

impl Default for CartaConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl CartaConfig {
    /// Get the config file path (~/.carta/config.json)
    fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".carta").join("config.json"))
    }

    /// Load config from disk, returning defaults if not found or unreadable
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let path =
            Self::config_path().ok_or_else(|| "Could not determine home directory".to_string())?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, contents).map_err(|e| format!("Failed to write config: {}", e))
    }
}
