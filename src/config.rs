//! Runtime configuration, read from the environment (and `.env` if present)

use std::{env, path::PathBuf, str::FromStr};

use log::LevelFilter;
use thiserror::Error;

pub const LOG_FILE_VAR: &str = "FORMCHECK_LOG_FILE";
pub const LOG_LEVEL_VAR: &str = "FORMCHECK_LOG_LEVEL";

const DEFAULT_LOG_FILE: &str = "./formcheck.log";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: DEFAULT_LOG_FILE.into(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    /// Loads `.env` then reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    /// Missing variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(LOG_FILE_VAR) {
            config.log_file = path.into();
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = LevelFilter::from_str(level.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(level))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_file, PathBuf::from("./formcheck.log"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_FILE_VAR, "/tmp/form.log"),
            (LOG_LEVEL_VAR, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.log_file, PathBuf::from("/tmp/form.log"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let config = Config::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "WARN")])).unwrap();
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_invalid_level() {
        let result = Config::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "loud")]));
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(level)) if level == "loud"));
    }
}
