//! Configuration management module.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::roles::Role;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub festival: FestivalConfig,
    pub booking: BookingConfig,
    pub ui: UiConfig,
}

/// Festival identity and schedule framing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FestivalConfig {
    pub name: String,
    pub tagline: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Gates-open time on opening night (24h "HH:MM").
    pub opening_time: String,
    pub venue_label: String,
    pub currency_symbol: String,
}

/// Simulated payment processor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Booking id prefix, e.g. "GF2024".
    pub id_prefix: String,
    /// Settlement delay in milliseconds (default: 3000).
    pub settle_delay_ms: u64,
    /// Settlement timeout in seconds (default: 30).
    #[serde(default = "default_settle_timeout_secs")]
    pub settle_timeout_secs: u64,
    /// Amounts above this are declined by the simulated processor.
    #[serde(default = "default_decline_above")]
    pub decline_above: u32,
}

fn default_settle_timeout_secs() -> u64 {
    30
}

fn default_decline_above() -> u32 {
    200_000
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub show_countdown: bool,
    /// Role preselected for the admin view ("super-admin", "admin",
    /// "manager", or "staff"). Overridable with --role.
    pub default_admin_role: String,
}

impl AppConfig {
    /// Get config file path in the platform config directory.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "festival-desk")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.festival.name.trim().is_empty() {
            return Err(ConfigError::Validation("Festival name cannot be empty".to_string()));
        }
        if self.festival.end_date < self.festival.start_date {
            return Err(ConfigError::Validation(
                "Festival end date cannot be before the start date".to_string(),
            ));
        }
        if NaiveTime::parse_from_str(&self.festival.opening_time, "%H:%M").is_err() {
            return Err(ConfigError::Validation(
                "Opening time must be in 24h HH:MM format".to_string(),
            ));
        }
        if self.festival.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Validation("Currency symbol cannot be empty".to_string()));
        }
        if self.booking.id_prefix.trim().is_empty() {
            return Err(ConfigError::Validation("Booking id prefix cannot be empty".to_string()));
        }
        if self.booking.id_prefix.contains(char::is_whitespace) {
            return Err(ConfigError::Validation(
                "Booking id prefix cannot contain whitespace".to_string(),
            ));
        }
        if self.booking.settle_delay_ms < 1 {
            return Err(ConfigError::Validation(
                "Settlement delay must be at least 1 ms".to_string(),
            ));
        }
        if self.booking.settle_delay_ms > 60_000 {
            return Err(ConfigError::Validation(
                "Settlement delay cannot exceed 60 seconds".to_string(),
            ));
        }
        if self.booking.settle_timeout_secs < 5 {
            return Err(ConfigError::Validation(
                "Settlement timeout must be at least 5 seconds".to_string(),
            ));
        }
        if self.booking.decline_above < 1 {
            return Err(ConfigError::Validation(
                "Decline threshold must be at least 1".to_string(),
            ));
        }
        match Role::parse(&self.ui.default_admin_role) {
            Some(role) if role.has_admin_access() => {}
            Some(_) => {
                return Err(ConfigError::Validation(
                    "Default admin role has no admin access".to_string(),
                ));
            }
            None => {
                return Err(ConfigError::Validation(format!(
                    "Unknown admin role: {}",
                    self.ui.default_admin_role
                )));
            }
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl FestivalConfig {
    /// Gates-open moment on opening night.
    pub fn opening_datetime(&self) -> Option<NaiveDateTime> {
        let time = NaiveTime::parse_from_str(&self.opening_time, "%H:%M").ok()?;
        Some(self.start_date.and_time(time))
    }

    /// Days, hours, minutes, seconds until opening night.
    /// Clamps to zero once the gates have opened.
    pub fn countdown_from(&self, now: NaiveDateTime) -> (i64, i64, i64, i64) {
        let Some(opening) = self.opening_datetime() else {
            return (0, 0, 0, 0);
        };
        let remaining = opening - now;
        if remaining <= chrono::Duration::zero() {
            return (0, 0, 0, 0);
        }
        let secs = remaining.num_seconds();
        (secs / 86_400, (secs % 86_400) / 3_600, (secs % 3_600) / 60, secs % 60)
    }

    /// Human date range, e.g. "October 15 - 19, 2024".
    pub fn date_line(&self) -> String {
        if self.start_date.year() == self.end_date.year() && self.start_date.month() == self.end_date.month() {
            format!(
                "{} - {}, {}",
                self.start_date.format("%B %-d"),
                self.end_date.format("%-d"),
                self.start_date.format("%Y")
            )
        } else {
            format!(
                "{} - {}",
                self.start_date.format("%B %-d, %Y"),
                self.end_date.format("%B %-d, %Y")
            )
        }
    }

    /// Number of festival days, inclusive of both ends.
    pub fn day_count(&self) -> u32 {
        (self.end_date - self.start_date).num_days().max(0) as u32 + 1
    }
}

impl Default for FestivalConfig {
    fn default() -> Self {
        Self {
            name: "Garba Festival 2024".to_string(),
            tagline: "Experience the Grandest Garba Celebration".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 10, 15).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2024, 10, 19).unwrap_or_default(),
            opening_time: "19:00".to_string(),
            venue_label: "Sardar Patel Stadium, Ahmedabad".to_string(),
            currency_symbol: "\u{20B9}".to_string(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            id_prefix: "GF2024".to_string(),
            settle_delay_ms: 3000,
            settle_timeout_secs: default_settle_timeout_secs(),
            decline_above: default_decline_above(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_countdown: true,
            default_admin_role: "super-admin".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_festival_name() {
        let mut config = AppConfig::default();
        config.festival.name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_end_before_start() {
        let mut config = AppConfig::default();
        config.festival.end_date = config.festival.start_date - chrono::Duration::days(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_opening_time() {
        let mut config = AppConfig::default();
        config.festival.opening_time = "7 pm".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_settle_delay_bounds() {
        let mut config = AppConfig::default();

        config.booking.settle_delay_ms = 0;
        assert!(config.validate().is_err());

        config.booking.settle_delay_ms = 61_000;
        assert!(config.validate().is_err());

        config.booking.settle_delay_ms = 3000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_prefix_whitespace() {
        let mut config = AppConfig::default();
        config.booking.id_prefix = "GF 2024".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_admin_role() {
        let mut config = AppConfig::default();
        config.ui.default_admin_role = "overlord".to_string();
        assert!(config.validate().is_err());

        config.ui.default_admin_role = "customer".to_string();
        assert!(config.validate().is_err());

        config.ui.default_admin_role = "manager".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_countdown_clamps_after_opening() {
        let config = FestivalConfig::default();
        let after = config.opening_datetime().unwrap() + chrono::Duration::hours(2);
        assert_eq!(config.countdown_from(after), (0, 0, 0, 0));
    }

    #[test]
    fn test_countdown_before_opening() {
        let config = FestivalConfig::default();
        let before = config.opening_datetime().unwrap() - chrono::Duration::days(2) - chrono::Duration::hours(3);
        let (days, hours, minutes, seconds) = config.countdown_from(before);
        assert_eq!((days, hours, minutes, seconds), (2, 3, 0, 0));
    }

    #[test]
    fn test_day_count() {
        let config = FestivalConfig::default();
        assert_eq!(config.day_count(), 5);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.festival.name, config.festival.name);
        assert_eq!(parsed.booking.settle_delay_ms, config.booking.settle_delay_ms);
        assert_eq!(parsed.ui.default_admin_role, config.ui.default_admin_role);
    }
}
