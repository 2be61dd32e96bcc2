use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "LIGHT_CURVE_VIEWER_CONFIG";

/// Presentation settings. Every field has a default, so a config file only
/// needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Rows shown in the data preview table.
    pub preview_rows: usize,
    pub dark_mode: bool,
    /// RGB colour of the light-curve line.
    pub line_color: [u8; 3],
    pub line_width: f32,
    pub window_size: [f32; 2],
    /// Decimal places for the statistics panel.
    pub decimals: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            dark_mode: true,
            line_color: [0, 255, 0],
            line_width: 2.0,
            window_size: [1200.0, 800.0],
            decimals: 3,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("parsing viewer config")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Load from `$LIGHT_CURVE_VIEWER_CONFIG`, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::from_file(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ViewerConfig::from_json(r#"{ "preview_rows": 10, "dark_mode": false }"#).unwrap();
        assert_eq!(config.preview_rows, 10);
        assert!(!config.dark_mode);
        assert_eq!(config.line_color, [0, 255, 0]);
        assert_eq!(config.decimals, 3);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ViewerConfig::from_json("{ preview_rows: ").is_err());
        assert!(ViewerConfig::from_json(r#"{ "preview_rows": "many" }"#).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = ViewerConfig::from_file(Path::new("/nonexistent/viewer.json")).unwrap_err();
        assert!(format!("{err:#}").contains("reading config"));
    }
}
