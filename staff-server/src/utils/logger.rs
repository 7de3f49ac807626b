//! Logging Infrastructure
//!
//! Structured logging setup for development and production:
//! - Console output, plain or JSON
//! - Optional daily rotating file logs under `<log_dir>/app`

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - default filter when `RUST_LOG` is unset (e.g. "info", "debug")
/// * `json_format` - JSON output (production) instead of human-readable
/// * `log_dir` - optional directory for daily rotated log files
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// staff_server::init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + file)
/// staff_server::init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_filter(env_filter())
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_filter(env_filter())
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let app_log_dir = Path::new(dir).join("app");
            fs::create_dir_all(&app_log_dir)?;

            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(app_log)
                    .with_filter(env_filter())
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
