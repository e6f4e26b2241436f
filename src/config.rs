//! Runtime configuration read from the process environment.

use std::env;

use tracing_subscriber::EnvFilter;

use crate::shim::{ShimError, ShimResult};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "EXPORT_SHIM_LOG";

/// Filter used when the environment does not provide one.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Logging settings for `shim_init_logging`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub directive: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directive: DEFAULT_DIRECTIVE.to_string(),
        }
    }
}

impl LogConfig {
    /// Snapshot the configuration from `EXPORT_SHIM_LOG`.
    pub fn from_env() -> Self {
        Self::from_directive(env::var(LOG_ENV_VAR).ok().as_deref())
    }

    /// Build a configuration from an optional raw directive.
    /// Missing or blank values fall back to the default.
    pub fn from_directive(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(directive) if !directive.is_empty() => Self {
                directive: directive.to_string(),
            },
            _ => Self::default(),
        }
    }

    /// Parse the directive into an `EnvFilter`.
    pub fn filter(&self) -> ShimResult<EnvFilter> {
        EnvFilter::try_new(&self.directive).map_err(|e| ShimError::InvalidFilter {
            directive: self.directive.clone(),
            reason: e.to_string(),
        })
    }
}
