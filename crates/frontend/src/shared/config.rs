use serde::Deserialize;
use thiserror::Error;

use super::dom::read_data_island;

/// id блока `<script type="application/json">` с настройками страницы
pub const CONFIG_ELEMENT_ID: &str = "wishlist-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Заголовок над галереей
    pub title: String,
    /// Уровень логирования в консоль браузера: error, warn, info, debug, trace
    pub log_level: String,
    /// id блока с каталогом подарков
    pub catalog_element_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Wishlist".to_string(),
            log_level: "debug".to_string(),
            catalog_element_id: "gift-catalog".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the page
    ///
    /// Without a `#wishlist-config` block the defaults are used.
    /// Fields missing from the block keep their default values.
    pub fn load() -> Result<Self, ConfigError> {
        match read_data_island(CONFIG_ELEMENT_ID) {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.level()?;
        Ok(config)
    }

    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.level().unwrap(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{"title": "Вишлист Маши", "logLevel": "WARN"}"#).unwrap();
        assert_eq!(config.title, "Вишлист Маши");
        assert_eq!(config.level().unwrap(), log::Level::Warn);
        assert_eq!(config.catalog_element_id, "gift-catalog");
    }

    #[test]
    fn test_invalid_log_level() {
        let err = AppConfig::from_json(r#"{"logLevel": "loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref level) if level == "loud"));
    }

    #[test]
    fn test_malformed_config() {
        let err = AppConfig::from_json("title = 'toml'").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }
}
