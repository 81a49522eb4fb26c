use crate::codec::DEFAULT_PAGE_ROWS;
use std::{env, fmt::Display, str::FromStr, time::Duration};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_QURAN_API_URL: &str = "https://api.alquran.cloud/v1";
pub const DEFAULT_PRAYER_API_URL: &str = "https://api.aladhan.com/v1";
/// Islamic Society of North America calculation method.
pub const DEFAULT_PRAYER_METHOD: u8 = 2;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub quran_api_url: String,
    pub prayer_api_url: String,
    pub prayer_method: u8,
    pub report_page_rows: usize,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            quran_api_url: DEFAULT_QURAN_API_URL.to_string(),
            prayer_api_url: DEFAULT_PRAYER_API_URL.to_string(),
            prayer_method: DEFAULT_PRAYER_METHOD,
            report_page_rows: DEFAULT_PAGE_ROWS,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads every setting through `lookup`; unset or invalid values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let url = |key: &str, default: String| {
            lookup(key)
                .map(|value| value.trim().trim_end_matches('/').to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
        };

        Self {
            port: parsed(&lookup, "PORT", defaults.port),
            quran_api_url: url("QURAN_API_URL", defaults.quran_api_url),
            prayer_api_url: url("PRAYER_API_URL", defaults.prayer_api_url),
            prayer_method: parsed(&lookup, "PRAYER_METHOD", defaults.prayer_method),
            report_page_rows: match parsed(&lookup, "REPORT_PAGE_ROWS", defaults.report_page_rows) {
                0 => {
                    warn!("REPORT_PAGE_ROWS must be positive, using {DEFAULT_PAGE_ROWS}");
                    DEFAULT_PAGE_ROWS
                }
                rows => rows,
            },
            http_timeout: Duration::from_secs(parsed(
                &lookup,
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
        }
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("ignoring invalid {key}={raw:?}, using {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config(&[]), Config::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config(&[
            ("PORT", "9000"),
            ("QURAN_API_URL", "http://localhost:1234/v1/"),
            ("REPORT_PAGE_ROWS", "12"),
            ("HTTP_TIMEOUT_SECS", "3"),
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.quran_api_url, "http://localhost:1234/v1");
        assert_eq!(config.report_page_rows, 12);
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.prayer_api_url, DEFAULT_PRAYER_API_URL);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config(&[("PORT", "not-a-port"), ("REPORT_PAGE_ROWS", "0")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.report_page_rows, DEFAULT_PAGE_ROWS);
    }
}
