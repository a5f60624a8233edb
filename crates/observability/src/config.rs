//! Logging configuration read from the process environment.
//!
//! - `CATALYST_LOG_FORMAT`: `json` (default) or `pretty`/`text`
//! - `CATALYST_LOG_LEVEL`: default filter when `RUST_LOG` is unset (`info`)

pub const LOG_FORMAT_VAR: &str = "CATALYST_LOG_FORMAT";
pub const LOG_LEVEL_VAR: &str = "CATALYST_LOG_LEVEL";

/// Output format for log lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, for log shippers.
    #[default]
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl LogFormat {
    /// Unrecognized values fall back to JSON.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            default_filter: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            format: lookup(LOG_FORMAT_VAR)
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.format),
            default_filter: lookup(LOG_LEVEL_VAR)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.default_filter),
        }
    }
}
