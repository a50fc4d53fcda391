/*
 * Responsibility
 * - read settings from the environment (PORT, upstream weather API, CORS, thresholds)
 * - validate them (startup fails on missing/invalid values)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use url::Url;

use crate::services::anomaly::Thresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    pub url: Url,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    /// Exact origins to allow. Empty means any origin.
    pub cors_allowed_origins: Vec<HeaderValue>,
    pub request_timeout: Duration,

    pub weather_api: WeatherApiConfig,
    pub thresholds: Thresholds,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or(&lookup, "PORT", 8000)?;
        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let cors_allowed_origins = parse_origins(&lookup("CORS_ALLOWED_ORIGINS").unwrap_or_default())?;

        let request_timeout = seconds_or(&lookup, "REQUEST_TIMEOUT_SECONDS", 30)?;

        let url = lookup("WEATHER_API_URL").ok_or(ConfigError::Missing("WEATHER_API_URL"))?;
        let url = Url::parse(url.trim()).map_err(|_| ConfigError::Invalid("WEATHER_API_URL"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid("WEATHER_API_URL"));
        }

        let weather_api = WeatherApiConfig {
            url,
            api_key: lookup("WEATHER_API_KEY").filter(|k| !k.trim().is_empty()),
            timeout: seconds_or(&lookup, "WEATHER_TIMEOUT_SECONDS", 10)?,
        };
        // The upstream must give up first, or a hung upstream surfaces as a
        // request timeout instead of UpstreamUnavailable.
        if weather_api.timeout >= request_timeout {
            return Err(ConfigError::Invalid("WEATHER_TIMEOUT_SECONDS"));
        }

        let defaults = Thresholds::default();
        let thresholds = Thresholds {
            temperature_min: parse_or(&lookup, "ANOMALY_TEMPERATURE_MIN", defaults.temperature_min)?,
            temperature_max: parse_or(&lookup, "ANOMALY_TEMPERATURE_MAX", defaults.temperature_max)?,
            wind_warning: parse_or(&lookup, "ANOMALY_WIND_WARNING", defaults.wind_warning)?,
            wind_critical: parse_or(&lookup, "ANOMALY_WIND_CRITICAL", defaults.wind_critical)?,
            tide_warning: parse_or(&lookup, "ANOMALY_TIDE_WARNING", defaults.tide_warning)?,
            tide_critical: parse_or(&lookup, "ANOMALY_TIDE_CRITICAL", defaults.tide_critical)?,
        };
        thresholds.validate().map_err(ConfigError::Invalid)?;

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            request_timeout,
            weather_api,
            thresholds,
        })
    }
}

// Comma-separated `scheme://host[:port]` list. A `*` entry means any origin.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if entries.contains(&"*") {
        return Ok(Vec::new());
    }

    entries
        .into_iter()
        .map(|origin| {
            let url = Url::parse(origin).map_err(|_| ConfigError::Invalid("CORS_ALLOWED_ORIGINS"))?;
            // Browsers send the bare origin; anything else would never match.
            if !matches!(url.scheme(), "http" | "https")
                || url.origin().ascii_serialization() != origin
            {
                return Err(ConfigError::Invalid("CORS_ALLOWED_ORIGINS"));
            }
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid("CORS_ALLOWED_ORIGINS"))
        })
        .collect()
}

// Unset falls back to the default; set but unparsable is an error.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ConfigError::Invalid(key))
        }
        _ => Ok(default),
    }
}

fn seconds_or<F>(lookup: &F, key: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, key, default)? {
        0 => Err(ConfigError::Invalid(key)),
        secs => Ok(Duration::from_secs(secs)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_upstream_is_set() {
        let config = load(&[("WEATHER_API_URL", "http://localhost:9000/current")]).unwrap();

        assert_eq!(config.addr.port(), 8000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.weather_api.timeout, Duration::from_secs(10));
        assert_eq!(config.weather_api.api_key, None);
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn upstream_url_is_required() {
        assert_eq!(load(&[]).unwrap_err(), ConfigError::Missing("WEATHER_API_URL"));
    }

    #[test]
    fn upstream_url_must_be_http() {
        let err = load(&[("WEATHER_API_URL", "ftp://example.com/data")]).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("WEATHER_API_URL"));

        let err = load(&[("WEATHER_API_URL", "not a url")]).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("WEATHER_API_URL"));
    }

    #[test]
    fn unparsable_values_fail_instead_of_defaulting() {
        let err = load(&[
            ("WEATHER_API_URL", "http://localhost/"),
            ("PORT", "eighty"),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("PORT"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = load(&[
            ("WEATHER_API_URL", "http://localhost/"),
            ("WEATHER_TIMEOUT_SECONDS", "0"),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("WEATHER_TIMEOUT_SECONDS"));
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("WEATHER_API_URL", "https://weather.example.com/v1/now"),
            ("WEATHER_API_KEY", "secret"),
            ("APP_ENV", "PROD"),
            ("PORT", "3000"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("ANOMALY_TEMPERATURE_MAX", "45.5"),
        ])
        .unwrap();

        assert!(config.app_env.is_production());
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.weather_api.api_key.as_deref(), Some("secret"));
        assert_eq!(
            config.cors_allowed_origins,
            vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ]
        );
        assert_eq!(config.thresholds.temperature_max, 45.5);
    }

    #[test]
    fn upstream_timeout_must_be_shorter_than_request_timeout() {
        for (upstream, request) in [("3", "1"), ("30", "30")] {
            let err = load(&[
                ("WEATHER_API_URL", "http://localhost/"),
                ("WEATHER_TIMEOUT_SECONDS", upstream),
                ("REQUEST_TIMEOUT_SECONDS", request),
            ])
            .unwrap_err();
            assert_eq!(err, ConfigError::Invalid("WEATHER_TIMEOUT_SECONDS"));
        }

        let config = load(&[
            ("WEATHER_API_URL", "http://localhost/"),
            ("WEATHER_TIMEOUT_SECONDS", "5"),
            ("REQUEST_TIMEOUT_SECONDS", "6"),
        ])
        .unwrap();
        assert!(config.weather_api.timeout < config.request_timeout);
    }

    #[test]
    fn malformed_cors_origins_are_rejected() {
        for origins in [
            "dashboard.example",
            "https://dashboard.example/",
            "https://dashboard.example/app",
            "ftp://dashboard.example",
            "https://ok.example,not an origin",
        ] {
            let err = load(&[
                ("WEATHER_API_URL", "http://localhost/"),
                ("CORS_ALLOWED_ORIGINS", origins),
            ])
            .unwrap_err();
            assert_eq!(err, ConfigError::Invalid("CORS_ALLOWED_ORIGINS"), "{origins}");
        }
    }

    #[test]
    fn wildcard_origin_means_any() {
        let config = load(&[
            ("WEATHER_API_URL", "http://localhost/"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example,*"),
        ])
        .unwrap();
        assert!(config.cors_allowed_origins.is_empty());

        let config = load(&[
            ("WEATHER_API_URL", "http://localhost/"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000"),
        ])
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec![HeaderValue::from_static("http://localhost:3000")]
        );
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let err = load(&[
            ("WEATHER_API_URL", "http://localhost/"),
            ("ANOMALY_WIND_WARNING", "100"),
            ("ANOMALY_WIND_CRITICAL", "90"),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid("ANOMALY_WIND_WARNING"));
    }
}
