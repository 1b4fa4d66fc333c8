use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MAX_CANDIDATES: usize = 200;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional TOML file overriding the built-in skill catalog.
    pub skill_catalog_path: Option<PathBuf>,
    pub max_candidates: usize,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            skill_catalog_path: None,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: parse_or("PORT", defaults.port, &lookup)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            skill_catalog_path: lookup("SKILL_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_candidates: parse_or("MAX_CANDIDATES", defaults.max_candidates, &lookup)?,
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", defaults.max_upload_bytes, &lookup)?,
        })
    }
}

fn parse_or<T>(key: &str, default: T, lookup: &impl Fn(&str) -> Option<String>) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.skill_catalog_path.is_none());
        assert_eq!(config.max_candidates, DEFAULT_MAX_CANDIDATES);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
            ("SKILL_CATALOG_PATH", "/etc/ranker/skills.toml"),
            ("MAX_CANDIDATES", "10"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(
            config.skill_catalog_path,
            Some(PathBuf::from("/etc/ranker/skills.toml"))
        );
        assert_eq!(config.max_candidates, 10);
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_blank_catalog_path_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("SKILL_CATALOG_PATH", "  ")])).unwrap();
        assert!(config.skill_catalog_path.is_none());
    }
}
