use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calendar::classification::{
    ClassificationPolicy, DEFAULT_DAILY_CAPACITY, DEFAULT_HOLIDAY_WEEKDAY,
};
use crate::ui::month_view::GridOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Unknown holiday weekday: {0}")]
    InvalidWeekday(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub calendar: CalendarConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Sent as a bearer token when non-empty.
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    pub holiday_weekday: String,
    pub daily_capacity: u32,
    pub pad_trailing_week: bool,
    /// Lawyer or office whose availability is shown. Empty means all.
    pub resource_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub theme: String,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_at(&Self::config_path())
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lawdesk-cal")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        non_empty(&self.api.token)
    }

    pub fn resource_id(&self) -> Option<String> {
        non_empty(&self.calendar.resource_id)
    }

    pub fn holiday_weekday(&self) -> Result<Weekday, ConfigError> {
        self.calendar
            .holiday_weekday
            .trim()
            .parse::<Weekday>()
            .map_err(|_| ConfigError::InvalidWeekday(self.calendar.holiday_weekday.clone()))
    }

    pub fn grid_options(&self) -> Result<GridOptions, ConfigError> {
        let policy = ClassificationPolicy::default()
            .with_holiday(self.holiday_weekday()?)
            .with_daily_capacity(self.calendar.daily_capacity);

        Ok(GridOptions {
            policy,
            pad_trailing_week: self.calendar.pad_trailing_week,
        })
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000/api".to_string(),
                token: String::new(),
            },
            calendar: CalendarConfig {
                holiday_weekday: weekday_name(DEFAULT_HOLIDAY_WEEKDAY).to_string(),
                daily_capacity: DEFAULT_DAILY_CAPACITY,
                pad_trailing_week: false,
                resource_id: String::new(),
            },
            ui: UiConfig {
                theme: "default".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_config_uses_friday_holiday() {
        let config = Config::default();
        assert_eq!(config.holiday_weekday().unwrap(), Weekday::Fri);
    }

    #[test]
    fn default_holiday_is_written_as_full_name() {
        let config = Config::default();
        assert_eq!(config.calendar.holiday_weekday, "Friday");
    }

    #[test]
    fn default_config_has_six_daily_slots() {
        let config = Config::default();
        assert_eq!(config.calendar.daily_capacity, 6);
    }

    #[test]
    fn empty_token_and_resource_are_absent() {
        let config = Config::default();
        assert_eq!(config.token(), None);
        assert_eq!(config.resource_id(), None);
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [api]
            base_url = "https://booking.example.com/api"
            token = "abc"

            [calendar]
            holiday_weekday = "Sunday"
            daily_capacity = 8
            pad_trailing_week = true
            resource_id = "17"

            [ui]
            theme = "nord"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.api.base_url, "https://booking.example.com/api");
        assert_eq!(config.token(), Some("abc".to_string()));
        assert_eq!(config.resource_id(), Some("17".to_string()));
        assert_eq!(config.ui.theme, "nord");

        let options = config.grid_options().unwrap();
        assert_eq!(options.policy.holiday.weekday, Weekday::Sun);
        assert_eq!(options.policy.daily_capacity, 8);
        assert!(options.pad_trailing_week);
    }

    #[test]
    fn short_weekday_names_are_accepted() {
        let mut config = Config::default();
        config.calendar.holiday_weekday = "sat".to_string();

        assert_eq!(config.holiday_weekday().unwrap(), Weekday::Sat);
    }

    #[test]
    fn unknown_weekday_is_rejected() {
        let mut config = Config::default();
        config.calendar.holiday_weekday = "Caturday".to_string();

        assert!(matches!(
            config.grid_options(),
            Err(ConfigError::InvalidWeekday(name)) if name == "Caturday"
        ));
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let result = Config::from_toml("this is not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create_at(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_config_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut config = Config::default();
        config.calendar.resource_id = "lawyer-3".to_string();
        config.ui.theme = "gruvbox".to_string();

        config.save_to(&path).unwrap();
        let loaded = Config::load_or_create_at(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
