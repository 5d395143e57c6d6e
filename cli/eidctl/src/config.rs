//! CLI configuration (env-driven).

use anyhow::{anyhow, Result};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub log_json: bool,

    /// Default output format when `--format` is not given.
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_json: false,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = lookup("EID_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_json = lookup("EID_LOG_JSON")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.log_json);

        let output = match lookup("EID_OUTPUT") {
            Some(v) => v
                .parse()
                .map_err(|e| anyhow!("EID_OUTPUT must be 'text' or 'json': {e}"))?,
            None => defaults.output,
        };

        Ok(Self {
            log_level,
            log_json,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

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
        assert_eq!(config.log_level, "warn");
        assert!(!config.log_json);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("EID_LOG_LEVEL", "debug"),
            ("EID_LOG_JSON", "TRUE"),
            ("EID_OUTPUT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_output() {
        let err = Config::from_lookup(lookup_from(&[("EID_OUTPUT", "yaml")])).unwrap_err();
        assert!(err.to_string().contains("EID_OUTPUT"));
    }
}
