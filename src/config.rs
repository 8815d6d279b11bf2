use std::env;

use crate::input::{DEFAULT_CAPACITY, validate_capacity};

/// Server settings read from the environment, falling back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub default_capacity: u32,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            default_capacity: DEFAULT_CAPACITY,
            log_file: Self::DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 3001;
    const DEFAULT_LOG_FILE: &'static str = "development.log";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; invalid values fall back with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match value("PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => {
                    eprintln!(
                        "Warning: invalid PORT '{}', using {}",
                        raw,
                        Self::DEFAULT_PORT
                    );
                    defaults.port
                }
            },
            None => defaults.port,
        };

        let default_capacity = match value("CUT_PLANNER_CAPACITY") {
            Some(raw) => match parse_capacity(&raw) {
                Ok(capacity) => capacity,
                Err(err) => {
                    eprintln!(
                        "Warning: invalid CUT_PLANNER_CAPACITY '{}': {}, using {}",
                        raw, err, DEFAULT_CAPACITY
                    );
                    defaults.default_capacity
                }
            },
            None => defaults.default_capacity,
        };

        let log_file = value("CUT_PLANNER_LOG").unwrap_or(defaults.log_file);

        Self {
            port,
            default_capacity,
            log_file,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_capacity(raw: &str) -> Result<u32, String> {
    let value = raw.parse::<i64>().map_err(|e| e.to_string())?;
    validate_capacity(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3001");
        assert_eq!(cfg.default_capacity, 5880);
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("PORT", "8080"),
            ("CUT_PLANNER_CAPACITY", "6500"),
            ("CUT_PLANNER_LOG", "/tmp/planner.log"),
        ]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.default_capacity, 6500);
        assert_eq!(cfg.log_file, "/tmp/planner.log");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = config(&[
            ("PORT", "0"),
            ("CUT_PLANNER_CAPACITY", "40000"),
            ("CUT_PLANNER_LOG", "  "),
        ]);
        assert_eq!(cfg, AppConfig::default());

        let cfg = config(&[("PORT", "http"), ("CUT_PLANNER_CAPACITY", "long")]);
        assert_eq!(cfg, AppConfig::default());
    }
}
