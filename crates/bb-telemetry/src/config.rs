//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error, or a directive list)
    pub log_level: String,

    /// Whether to write logs to stderr at all
    pub console_output: bool,

    /// Whether to emit JSON lines instead of human-readable output
    pub json_logs: bool,

    /// Network identifier (devnet, testnet)
    pub network: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "bridge".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            network: "devnet".to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BB_SERVICE_NAME`: Service name (default: bridge)
    /// - `BB_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `BB_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `BB_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `BB_NETWORK`: Network name (default: devnet)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            service_name: lookup("BB_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("BB_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            console_output: lookup("BB_CONSOLE_OUTPUT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.console_output),

            json_logs: lookup("BB_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            network: lookup("BB_NETWORK").unwrap_or(defaults.network),
        }
    }

    /// Create configuration for a named component.
    pub fn for_component(component: &str) -> Self {
        let mut config = Self::from_env();
        config.service_name = format!("{}-{}", config.service_name, component);
        config
    }

    /// Override the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
