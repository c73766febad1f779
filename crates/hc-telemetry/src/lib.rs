//! # Hierarchy-Chain Telemetry
//!
//! Structured logging for the hierarchy subsystems.
//!
//! Subsystems log through plain `tracing` macros with a `[hc-NN]` prefix;
//! this crate only decides where those events go and in which shape.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hc_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::for_subsystem("03", "block-validation");
//!     init_telemetry(&config).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HC_SERVICE_NAME` | `hierarchy-chain` | Service name in log lines |
//! | `HC_SUBSYSTEM_ID` | `00` | Subsystem identifier |
//! | `HC_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directives |
//! | `HC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `HC_JSON_LOGS` | `false` (`true` in containers) | JSON output |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME, NODE_SUBSYSTEM_ID};
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// Filter directives did not parse.
    #[error("Invalid log filter '{directives}': {reason}")]
    Filter {
        /// The rejected directives.
        directives: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),

    /// Configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Validate `config` and install logging.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    if config.service_name.trim().is_empty() {
        return Err(TelemetryError::Config("service name is empty".to_string()));
    }
    logging::init_logging(config)
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
