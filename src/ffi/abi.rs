//! ABI metadata and logging setup for foreign callers.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, DEFAULT_DIRECTIVE};
use crate::shim::ShimError;

/// Revision of the exported symbol set.
pub const SHIM_ABI_VERSION: u32 = 1;

/// ABI version so callers can check compatibility after loading the library.
#[no_mangle]
pub extern "C" fn shim_abi_version() -> u32 {
    SHIM_ABI_VERSION
}

/// Pick the filter to install, keeping the parse error for later reporting.
pub(crate) fn resolve_filter(cfg: &LogConfig) -> (EnvFilter, Option<ShimError>) {
    match cfg.filter() {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_DIRECTIVE), Some(err)),
    }
}

/// Install a global `tracing` subscriber writing to stderr.
///
/// The filter comes from `EXPORT_SHIM_LOG`; a malformed value falls back
/// to `info` and is reported through the installed subscriber. Nothing on
/// this path writes to stderr directly, so a closed stderr cannot panic.
///
/// # Returns
/// 0 if the subscriber was installed, 1 if one was already installed.
#[no_mangle]
pub extern "C" fn shim_init_logging() -> i32 {
    let cfg = LogConfig::from_env();
    let (filter, rejected) = resolve_filter(&cfg);

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    if installed.is_err() {
        return 1;
    }

    match rejected {
        Some(err) => tracing::warn!(%err, fallback = DEFAULT_DIRECTIVE, "ignoring log filter"),
        None => tracing::debug!(directive = %cfg.directive, "logging initialised"),
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_abi_version() {
        assert_eq!(shim_abi_version(), 1);
    }

    #[test]
    fn test_resolve_filter_valid() {
        let cfg = LogConfig::from_directive(Some("debug"));
        let (_, rejected) = resolve_filter(&cfg);
        assert!(rejected.is_none());
    }

    #[test]
    fn test_resolve_filter_falls_back_on_malformed() {
        let cfg = LogConfig::from_directive(Some("x=notalevel"));
        let (filter, rejected) = resolve_filter(&cfg);
        assert!(matches!(rejected, Some(ShimError::InvalidFilter { .. })));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    // Installing a subscriber is process-global, so `shim_init_logging`
    // itself is exercised in a child process from `crate::tests`.
}
