//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use query::{DateMode, FaultPolicy, QueryOptions};

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `DATA_PATH` — sales CSV file (default: `"./data.csv"`)
/// - `FAULT_POLICY` — `skip`, `zero-fill` or `abort` (default: `"zero-fill"`)
/// - `DATE_MODE` — `as-sourced` or `day` (default: `"as-sourced"`)
///
/// Unparsable values fall back to the default.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub data_path: PathBuf,
    pub fault_policy: FaultPolicy,
    pub date_mode: DateMode,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            data_path: lookup("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            fault_policy: lookup("FAULT_POLICY")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.fault_policy),
            date_mode: lookup("DATE_MODE")
                .and_then(|m| m.parse().ok())
                .unwrap_or(defaults.date_mode),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the engine options this configuration selects.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions::new(self.fault_policy, self.date_mode)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            data_path: PathBuf::from("./data.csv"),
            fault_policy: FaultPolicy::default(),
            date_mode: DateMode::default(),
        }
    }
}
