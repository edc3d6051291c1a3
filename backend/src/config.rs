//! Runtime configuration, read from `CLARITYIQ_*` environment variables.
//!
//! Unset variables take their default; unparseable ones are reported with a
//! warning and also fall back to the default.

use log::warn;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB: &str = "clarityiq.sqlite";
const DEFAULT_FONTS_DIR: &str = "./fonts";
const DEFAULT_JSON_LIMIT: usize = 10 * 1024 * 1024; // 10 MB

/// How the risk register picks likelihood and impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskScoringMode {
    /// Fresh random draws on every request.
    Random,
    /// Derived from the record attributes, reproducible.
    Deterministic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub fonts_dir: PathBuf,
    pub risk_scoring: RiskScoringMode,
    pub json_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("CLARITYIQ_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or_default(&lookup, "CLARITYIQ_PORT", DEFAULT_PORT);
        let db_path = lookup("CLARITYIQ_DB").unwrap_or_else(|| DEFAULT_DB.to_string());
        let fonts_dir =
            lookup("CLARITYIQ_FONTS_DIR").unwrap_or_else(|| DEFAULT_FONTS_DIR.to_string());
        let json_limit = parse_or_default(&lookup, "CLARITYIQ_JSON_LIMIT", DEFAULT_JSON_LIMIT);

        let risk_scoring = match lookup("CLARITYIQ_RISK_SCORING").as_deref().map(str::trim) {
            None | Some("") | Some("random") => RiskScoringMode::Random,
            Some("deterministic") => RiskScoringMode::Deterministic,
            Some(other) => {
                warn!(
                    "CLARITYIQ_RISK_SCORING='{}' is not 'random' or 'deterministic', using random",
                    other
                );
                RiskScoringMode::Random
            }
        };

        Config {
            host,
            port,
            db_path: PathBuf::from(db_path),
            fonts_dir: PathBuf::from(fonts_dir),
            risk_scoring,
            json_limit,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{}='{}' could not be parsed, using the default", key, raw);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_with(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, PathBuf::from("clarityiq.sqlite"));
        assert_eq!(config.risk_scoring, RiskScoringMode::Random);
        assert_eq!(config.json_limit, 10 * 1024 * 1024);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = config_with(&[
            ("CLARITYIQ_HOST", "0.0.0.0"),
            ("CLARITYIQ_PORT", "9090"),
            ("CLARITYIQ_DB", "/tmp/dash.sqlite"),
            ("CLARITYIQ_RISK_SCORING", "deterministic"),
        ]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.db_path, PathBuf::from("/tmp/dash.sqlite"));
        assert_eq!(config.risk_scoring, RiskScoringMode::Deterministic);
        assert_eq!(config.url(), "http://0.0.0.0:9090");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_with(&[
            ("CLARITYIQ_PORT", "eighty"),
            ("CLARITYIQ_RISK_SCORING", "dice"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.risk_scoring, RiskScoringMode::Random);
    }
}
