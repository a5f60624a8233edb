//! Tracing/logging setup shared by the binaries.

/// Environment-driven logging configuration.
pub mod config;

/// Tracing subscriber installation (filters, formatting).
pub mod tracing;

pub use config::{LogConfig, LogFormat};

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&LogConfig::from_env());
}
