use chrono_tz::Tz;
use std::env;

/// Reference timezone when none is configured: the tracked market's local
/// wall-clock zone.
const DEFAULT_TIMEZONE: &str = "Europe/London";
const DEFAULT_CURRENCIES: &str = "USD,EUR,GBP,JPY";

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub calendar_url: String,
    pub market_tz: Tz,
    /// Currency allow-list for the shell filter. Empty means unrestricted.
    pub currencies: Vec<String>,
    pub default_min_impact: u32,
    pub window_start: String,
    pub window_end: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVariable(String),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVariable(var) => write!(f, "Missing environment variable: {}", var),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let calendar_url = env::var("CALENDAR_API_URL")
            .map_err(|_| ConfigError::MissingVariable("CALENDAR_API_URL".to_string()))?;

        if !calendar_url.starts_with("http://") && !calendar_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "CALENDAR_API_URL must start with http:// or https://".to_string(),
            ));
        }

        let tz_str = env::var("MARKET_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        let market_tz = match tz_str.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                log::warn!(
                    "Invalid MARKET_TIMEZONE '{}', defaulting to {}",
                    tz_str,
                    DEFAULT_TIMEZONE
                );
                DEFAULT_TIMEZONE
                    .parse::<Tz>()
                    .map_err(|_| ConfigError::InvalidValue("default timezone".to_string()))?
            }
        };

        let currencies = parse_currency_list(
            &env::var("CURRENCY_FILTER").unwrap_or_else(|_| DEFAULT_CURRENCIES.to_string()),
        );

        let default_min_impact = env::var("DEFAULT_MIN_IMPACT")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<u32>()
            .unwrap_or(2);

        let window_start = env::var("WINDOW_START").unwrap_or_else(|_| "09:00".to_string());
        let window_end = env::var("WINDOW_END").unwrap_or_else(|_| "19:00".to_string());

        Ok(Self {
            calendar_url,
            market_tz,
            currencies,
            default_min_impact,
            window_start,
            window_end,
        })
    }
}

fn parse_currency_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency_list() {
        assert_eq!(
            parse_currency_list("usd, eur ,GBP"),
            vec!["USD".to_string(), "EUR".to_string(), "GBP".to_string()]
        );
    }

    #[test]
    fn test_blank_currency_list_is_empty() {
        assert!(parse_currency_list("").is_empty());
        assert!(parse_currency_list(" , ,").is_empty());
    }
}
