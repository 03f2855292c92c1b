//! Logger bootstrap for the command-line binary.
//!
//! Library code only talks to the `log` facade; the binary decides where the
//! records go. Records are written to stderr so command output on stdout
//! stays clean.

use flexi_logger::{Logger, LoggerHandle};

/// Environment variable holding the log specification (e.g. `debug`)
pub const LOG_ENV: &str = "DAYMARK_LOG";

/// Specification used when `DAYMARK_LOG` is unset
pub const DEFAULT_LOG_SPEC: &str = "error";

/// Start logging to stderr.
///
/// Returns the handle that keeps the logger alive, or `None` when the
/// logger could not be started. Never panics.
pub fn init_logging() -> Option<LoggerHandle> {
    let spec = log_spec(std::env::var(LOG_ENV).ok().as_deref());

    match Logger::try_with_str(&spec).and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        }
    }
}

fn log_spec(env_value: Option<&str>) -> String {
    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_LOG_SPEC.to_string(),
    }
}
