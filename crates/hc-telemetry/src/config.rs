//! Telemetry configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::env;

/// Service name used when none is configured.
pub const DEFAULT_SERVICE_NAME: &str = "hierarchy-chain";

/// Subsystem id meaning "whole node".
pub const NODE_SUBSYSTEM_ID: &str = "00";

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Subsystem identifier (01-03)
    pub subsystem_id: String,

    /// Filter directives (`info`, `hc_03_block_validation=debug,warn`, ...)
    pub log_level: String,

    /// Whether to write logs to stdout at all
    pub console_output: bool,

    /// Whether to emit JSON instead of human-readable lines
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            subsystem_id: NODE_SUBSYSTEM_ID.to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HC_SERVICE_NAME`: Service name (default: hierarchy-chain)
    /// - `HC_SUBSYSTEM_ID`: Subsystem ID (default: 00)
    /// - `HC_LOG_LEVEL` or `RUST_LOG`: Filter directives (default: info)
    /// - `HC_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `HC_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("HC_SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),

            subsystem_id: env::var("HC_SUBSYSTEM_ID")
                .unwrap_or_else(|_| NODE_SUBSYSTEM_ID.to_string()),

            log_level: env::var("HC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("HC_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v, true))
                .unwrap_or(true),

            json_logs: env::var("HC_JSON_LOGS")
                .map(|v| parse_flag(&v, false))
                .unwrap_or(is_container),
        }
    }

    /// Create configuration for a specific subsystem.
    pub fn for_subsystem(subsystem_id: &str, subsystem_name: &str) -> Self {
        let mut config = Self::from_env();
        config.subsystem_id = subsystem_id.to_string();
        config.service_name = format!("hc-{}-{}", subsystem_id, subsystem_name);
        config
    }

    /// Get the full service name including subsystem.
    pub fn full_service_name(&self) -> String {
        if self.subsystem_id == NODE_SUBSYSTEM_ID {
            self.service_name.clone()
        } else {
            format!("{}-{}", self.service_name, self.subsystem_id)
        }
    }
}

/// `true`/`1`/`yes` and `false`/`0`/`no`, anything else falls back.
fn parse_flag(value: &str, fallback: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        _ => fallback,
    }
}
