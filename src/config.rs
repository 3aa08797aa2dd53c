//! Environment-sourced run configuration.
//!
//! Everything arrives through `CALVAULT_*` variables so CI and cron
//! invocations need no config file. Absent or malformed settings are fatal
//! before any network or file activity happens.

use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use config::{Config, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Feed URLs, comma-separated in `CALVAULT_FEEDS`
    pub feeds: Vec<String>,
    /// Hex-encoded 128-bit AES key from `CALVAULT_KEY`
    pub key: String,
    /// IANA zone that floating feed times resolve in (`CALVAULT_TIMEZONE`)
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Settings {
    pub fn load() -> Result<Self> {
        Config::builder()
            .add_source(
                Environment::with_prefix("CALVAULT")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("feeds"),
            )
            .build()
            .context("reading environment configuration")?
            .try_deserialize()
            .context("CALVAULT_FEEDS and CALVAULT_KEY must be set")
    }

    pub fn reference_zone(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| anyhow!("unknown timezone '{}' in CALVAULT_TIMEZONE", self.timezone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_zone(zone: &str) -> Settings {
        Settings {
            feeds: vec![],
            key: String::new(),
            timezone: zone.to_string(),
        }
    }

    #[test]
    fn default_timezone_is_utc() {
        let settings = settings_with_zone(&default_timezone());
        assert_eq!(settings.reference_zone().unwrap(), Tz::UTC);
    }

    #[test]
    fn named_timezone_parses() {
        let settings = settings_with_zone("Europe/Helsinki");
        assert!(settings.reference_zone().is_ok());
    }

    #[test]
    fn bogus_timezone_is_rejected() {
        let settings = settings_with_zone("Atlantis/Capital");
        assert!(settings.reference_zone().is_err());
    }
}
