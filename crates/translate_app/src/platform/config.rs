use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::{engine_info, parse_level, LogDestination, LogSettings};
use serde::{Deserialize, Serialize};
use translate_core::{Locale, ModelSummary};
use translate_engine::{load_ron, save_ron, ClientSettings, ModelConfig, PersistError};

pub const CONFIG_FILENAME: &str = "translate_app.ron";
const HOME_ENV: &str = "TRANSLATE_APP_HOME";
const LOG_FILENAME: &str = "translate.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: String,
    /// Bundled local model; hides the model settings link.
    pub local_ai: bool,
    pub translate_model: Option<ModelConfig>,
    pub log_destination: String,
    pub log_level: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub temperature: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            locale: Locale::default().code().to_string(),
            local_ai: false,
            translate_model: None,
            log_destination: "both".to_string(),
            log_level: "info".to_string(),
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            temperature: client.temperature,
        }
    }
}

impl AppConfig {
    pub fn locale(&self) -> Locale {
        Locale::from_code(&self.locale).unwrap_or_default()
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs.max(1)),
            request_timeout: Duration::from_secs(self.request_timeout_secs.max(1)),
            temperature: self.temperature,
        }
    }

    pub fn log_settings(&self, home: &Path) -> LogSettings {
        LogSettings {
            destination: LogDestination::from_name(&self.log_destination)
                .unwrap_or(LogDestination::Both),
            level: parse_level(&self.log_level),
            file_path: home.join(LOG_FILENAME),
        }
    }

    pub fn model_summary(&self) -> Option<ModelSummary> {
        self.translate_model.as_ref().map(|model| ModelSummary {
            name: model.display_name().to_string(),
            provider: model.provider.clone(),
        })
    }
}

/// Directory holding the config file, settings and the log.
pub fn app_home() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(home);
    }
    dirs::config_dir()
        .map(|dir| dir.join("translate_app"))
        .unwrap_or_else(|| PathBuf::from(".translate_app"))
}

/// Loads the config; a missing file yields the defaults.
pub fn load_config(home: &Path) -> Result<AppConfig, PersistError> {
    Ok(load_ron(home, CONFIG_FILENAME)?.unwrap_or_default())
}

pub fn save_config(home: &Path, config: &AppConfig) -> Result<(), PersistError> {
    let path = save_ron(home, CONFIG_FILENAME, config)?;
    engine_info!("saved configuration to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn model() -> ModelConfig {
        ModelConfig {
            id: "qwen2.5:7b".to_string(),
            provider: "ollama".to_string(),
            name: String::new(),
            base_url: "http://localhost:11434/v1".to_string(),
            api_key: None,
            api_key_env: None,
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.locale(), Locale::EnUs);
        assert!(config.model_summary().is_none());
    }

    #[test]
    fn saved_config_round_trips() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig {
            locale: "zh-CN".to_string(),
            translate_model: Some(model()),
            ..AppConfig::default()
        };
        save_config(temp.path(), &config).unwrap();

        let loaded = load_config(temp.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.locale(), Locale::ZhCn);
        assert_eq!(
            loaded.model_summary(),
            Some(ModelSummary {
                name: "qwen2.5:7b".to_string(),
                provider: "ollama".to_string(),
            })
        );
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "(local_ai: true)").unwrap();

        let config = load_config(temp.path()).unwrap();
        assert!(config.local_ai);
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "(local_ai: ").unwrap();
        assert!(load_config(temp.path()).is_err());
    }

    #[test]
    fn zero_timeouts_are_raised_and_unknown_names_fall_back() {
        let config = AppConfig {
            connect_timeout_secs: 0,
            locale: "tlh".to_string(),
            log_destination: "syslog".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.client_settings().connect_timeout, Duration::from_secs(1));
        assert_eq!(config.locale(), Locale::EnUs);
        let temp = TempDir::new().unwrap();
        let log = config.log_settings(temp.path());
        assert_eq!(log.destination, LogDestination::Both);
        assert_eq!(log.file_path, temp.path().join(LOG_FILENAME));
    }
}
