//! Table layout configuration
//!
//! Stores defaults for synthesized column layouts in
//! `~/.config/textgrid/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Defaults used when a view has to invent its own column layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Width for columns with no content to measure
    pub default_width: usize,
    /// Narrowest synthesized column
    pub min_width: usize,
    /// Widest synthesized column; longer values are truncated
    pub max_width: usize,
    /// How many rows to sample when sizing columns
    pub sample_rows: usize,
    /// Spaces between adjacent columns
    pub column_margin: usize,
    /// Right-align columns whose sampled values are all numeric
    pub right_align_numbers: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_width: 10,
            min_width: 4,
            max_width: 40,
            sample_rows: 100,
            column_margin: 1,
            right_align_numbers: false,
        }
    }
}

impl TableConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
