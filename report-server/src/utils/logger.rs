//! Logging Infrastructure
//!
//! Structured logging setup for development and production environments.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` takes precedence; `log_level` is the fallback filter. When
/// `log_dir` points to an existing directory, output goes to a daily rolling
/// file there instead of stdout.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},tower_http=info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "report-server");
            let builder = builder.with_ansi(false).with_writer(file_appender);
            let _ = if json {
                builder.json().try_init()
            } else {
                builder.try_init()
            };
            return;
        }
        eprintln!("LOG_DIR {dir} is not a directory, logging to stdout");
    }

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
