//! Tracing subscriber setup and request outcome logging

use std::time::Duration;

use axum::http::StatusCode;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Environment key selecting the log output format
pub const LOG_FORMAT_ENV: &str = "SKYLARK_LOG_FORMAT";

/// Output format of the global subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON lines; anything else is human-readable.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` sets the filter (default `info`).
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_target(true).with_line_number(true);

    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

/// Subscriber for tests; repeated calls are ignored.
pub fn init_test() {
    let _ = fmt().with_env_filter(EnvFilter::new("debug")).with_test_writer().try_init();
}

/// Log the outcome of one HTTP request with structured fields.
///
/// Server errors are logged at `warn`; everything else at `info`.
#[inline]
pub fn log_request_outcome(status: StatusCode, elapsed: Duration) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let status = status.as_u16();

    if status >= 500 {
        warn!(status, duration_ms, "request_failed");
    } else {
        info!(status, duration_ms, "request_completed");
    }
}
