use std::env;
use std::time::Duration;

use log::warn;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: Url,
    pub notice_timeout: Duration,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = match lookup("ACADEMY_API_BASE") {
            Some(raw) => parse_base_url(&raw).unwrap_or_else(|| {
                warn!("ACADEMY_API_BASE '{}' is not a valid http(s) URL, using {}", raw, DEFAULT_API_BASE);
                default_base()
            }),
            None => default_base(),
        };
        Self {
            api_base,
            notice_timeout: Duration::from_secs(
                lookup("ACADEMY_NOTICE_SECS").and_then(|v| v.parse().ok()).unwrap_or(4),
            ),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        }
    }
}

/// Accepts only absolute http/https URLs.
pub fn parse_base_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

fn default_base() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let cfg = config_from(&[]);
        assert_eq!(cfg.api_base.as_str(), DEFAULT_API_BASE);
        assert_eq!(cfg.notice_timeout, Duration::from_secs(4));
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn overrides_are_read() {
        let cfg = config_from(&[
            ("ACADEMY_API_BASE", "https://academy.example.com/api/"),
            ("ACADEMY_NOTICE_SECS", "10"),
            ("LOG_LEVEL", "debug"),
        ]);
        assert_eq!(cfg.api_base.as_str(), "https://academy.example.com/api/");
        assert_eq!(cfg.notice_timeout, Duration::from_secs(10));
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config_from(&[("ACADEMY_API_BASE", "ftp://nope"), ("ACADEMY_NOTICE_SECS", "soon")]);
        assert_eq!(cfg.api_base.as_str(), DEFAULT_API_BASE);
        assert_eq!(cfg.notice_timeout, Duration::from_secs(4));
        assert!(parse_base_url("not a url").is_none());
    }
}
