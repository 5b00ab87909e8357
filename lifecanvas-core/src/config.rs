// config.rs - optional TOML configuration with built-in defaults

use std::path::Path;

use serde::Deserialize;

/// Errors from explicit config loading. The app boundary degrades these to
/// logged defaults so the file stays optional.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunables. Extend this struct whenever a new knob is needed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid extents in cells.
    pub rows: usize,
    pub cols: usize,
    /// Probability that a cell starts alive.
    pub fill_density: f64,
    /// Initial pixels per cell, and the zoom clamp range.
    pub cell_size: f32,
    pub min_cell_size: f32,
    pub max_cell_size: f32,
    /// Playback period in milliseconds.
    pub interval_ms: u64,
    /// Fixed seed for the initial fill; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 500,
            cols: 500,
            fill_density: 0.1,
            cell_size: 20.0,
            min_cell_size: 2.0,
            max_cell_size: 50.0,
            interval_ms: 100,
            seed: None,
        }
    }
}

pub const DEFAULT_CONFIG_FILE: &str = "lifecanvas.toml";

impl Config {
    /// Load from an explicit TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Load `lifecanvas.toml` from the cwd (or `path` when given). A missing
    /// file is normal; a broken one logs a warning. Either way the defaults
    /// apply, so the file never blocks startup.
    pub fn load(path: Option<&str>) -> Self {
        let path = path.unwrap_or(DEFAULT_CONFIG_FILE);
        match Self::from_path(Path::new(path)) {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => Self::default(),
            Err(err) => {
                log::warn!("{path}: {err}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_setup() {
        let config = Config::default();
        assert_eq!((config.rows, config.cols), (500, 500));
        assert_eq!(config.fill_density, 0.1);
        assert_eq!(config.cell_size, 20.0);
        assert_eq!((config.min_cell_size, config.max_cell_size), (2.0, 50.0));
        assert_eq!(config.interval_ms, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("rows = 64\ncols = 48\nseed = 9").unwrap();
        assert_eq!((config.rows, config.cols), (64, 48));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.interval_ms, 100);
        assert_eq!(config.cell_size, 20.0);
    }

    #[test]
    fn broken_file_is_a_parse_error() {
        let err = toml::from_str::<Config>("rows = \"many\"").unwrap_err();
        let err = ConfigError::from(err);
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Some("/definitely/not/here/lifecanvas.toml"));
        assert_eq!((config.rows, config.cols), (500, 500));
    }
}
