//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{OtrError, OtrResult};

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ingestion defaults for sensor exports.
    #[serde(default)]
    pub ingest: IngestDefaults,

    /// Levels used when none is given on the command line.
    #[serde(default)]
    pub levels: LevelDefaults,

    /// Optional JSON file replacing the built-in benchmark table.
    #[serde(default)]
    pub benchmarks_file: Option<PathBuf>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default ingestion parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestDefaults {
    /// Preamble lines before the header row of a bat-speed export.
    pub bat_speed_skip_rows: usize,

    /// Preamble lines before the header row of an exit-velocity export.
    pub exit_velocity_skip_rows: usize,

    /// Field delimiter.
    pub delimiter: char,
}

/// Default competition levels, as display labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDefaults {
    pub bat_speed: String,
    pub exit_velocity: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "otr_metrics_core=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ingest: IngestDefaults::default(),
            levels: LevelDefaults::default(),
            benchmarks_file: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for IngestDefaults {
    fn default() -> Self {
        Self {
            bat_speed_skip_rows: 8,
            exit_velocity_skip_rows: 0,
            delimiter: ',',
        }
    }
}

impl Default for LevelDefaults {
    fn default() -> Self {
        Self {
            bat_speed: "High School".to_string(),
            exit_velocity: "Var/18u".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl IngestDefaults {
    /// Delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> OtrResult<u8> {
        u8::try_from(self.delimiter)
            .map_err(|_| OtrError::config(format!("delimiter {:?} is not ASCII", self.delimiter)))
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit file. Errors are returned, not defaulted.
    pub fn load_from(path: &Path) -> OtrResult<Self> {
        if !path.exists() {
            return Err(OtrError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("otr-metrics").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sensor_exports() {
        let config = AppConfig::default();
        assert_eq!(config.ingest.bat_speed_skip_rows, 8);
        assert_eq!(config.ingest.exit_velocity_skip_rows, 0);
        assert_eq!(config.ingest.delimiter_byte().unwrap(), b',');
        assert!(config.benchmarks_file.is_none());
    }

    #[test]
    fn partial_config_fills_missing_sections() {
        let raw = r#"{ "logging": { "level": "debug", "json": true } }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.levels.exit_velocity, "Var/18u");
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let ingest = IngestDefaults {
            delimiter: '§',
            ..Default::default()
        };
        assert!(ingest.delimiter_byte().is_err());
    }

    #[test]
    fn load_from_missing_file_reports_path() {
        let err = AppConfig::load_from(Path::new("/nonexistent/otr/config.json")).unwrap_err();
        assert!(matches!(err, OtrError::FileNotFound { .. }));
    }
}
