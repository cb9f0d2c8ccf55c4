//! # Bridge Telemetry
//!
//! Structured logging for the bridge binaries.
//!
//! Output goes to stderr, either human-readable or as JSON lines
//! (`BB_JSON_LOGS=true`). Levels come from `BB_LOG_LEVEL` or `RUST_LOG`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bb_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_telemetry(TelemetryConfig::for_component("cli"))?;
//!     // ... run
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{build_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Log level string could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// Global subscriber could not be installed
    #[error("Failed to initialize subscriber: {0}")]
    SubscriberInit(String),
}

/// Initialize logging for a binary.
///
/// Returns a guard that should be held for the lifetime of the process.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    tracing_setup::init_tracing(&config)?;
    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
}

impl TelemetryGuard {
    /// Service name the subscriber was installed for.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::debug!(service = %self.service_name, "Shutting down telemetry");
    }
}

/// Create a span tagged with a component.
#[macro_export]
macro_rules! component_span {
    ($component:expr, $name:expr) => {
        tracing::info_span!($name, component = $component)
    };
    ($component:expr, $name:expr, $($field:tt)*) => {
        tracing::info_span!($name, component = $component, $($field)*)
    };
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
