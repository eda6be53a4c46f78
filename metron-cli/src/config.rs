//! Environment configuration
//!
//! - `METRON_FORMAT`: `text` or `json`, default `text`
//! - `METRON_LOG`: tracing filter directive, default `warn`

use std::env;
use metron::OutputFormat;
use tracing_subscriber::EnvFilter;

pub const FORMAT_VAR: &str = "METRON_FORMAT";
pub const LOG_VAR: &str = "METRON_LOG";
pub const DEFAULT_LOG: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub log_filter: String,
    /// Problems found while reading, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_filter: DEFAULT_LOG.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Read from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read through `lookup`, falling back to defaults on bad values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = CliConfig::default();

        if let Some(raw) = lookup(FORMAT_VAR) {
            match raw.parse::<OutputFormat>() {
                Ok(format) => config.format = format,
                Err(e) => config.warnings.push(format!("{}: {}, using text", FORMAT_VAR, e)),
            }
        }

        if let Some(raw) = lookup(LOG_VAR) {
            let raw = raw.trim();
            if raw.is_empty() {
                config.warnings.push(format!("{} is empty, using '{}'", LOG_VAR, DEFAULT_LOG));
            } else if let Err(e) = EnvFilter::try_new(raw) {
                config.warnings.push(format!("{}: invalid filter '{}' ({}), using '{}'", LOG_VAR, raw, e, DEFAULT_LOG));
            } else {
                config.log_filter = raw.to_string();
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_reads_values() {
        let config = config(&[("METRON_FORMAT", "json"), ("METRON_LOG", "metron=debug")]);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_filter, "metron=debug");
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config(&[("METRON_FORMAT", "yaml"), ("METRON_LOG", "  ")]);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.warnings.len(), 2);
    }

    #[test]
    fn test_bad_log_filter_warns() {
        let config = config(&[("METRON_LOG", "metron=loud")]);
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("METRON_LOG"), "{}", config.warnings[0]);
    }
}
