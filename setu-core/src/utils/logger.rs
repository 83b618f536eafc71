//! Logging Infrastructure
//!
//! `tracing` subscriber setup used by the demo binary; the library itself
//! never installs a subscriber.

use std::path::Path;

/// Initialize terminal-only logging at the given level
pub fn init_logger(level: &str) {
    init_logger_with_file(level, None);
}

/// Initialize logging with optional daily-rolling file output
pub fn init_logger_with_file(level: &str, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    if let Some(dir) = log_dir {
        if Path::new(dir).is_dir() {
            let file_appender = tracing_appender::rolling::daily(dir, "setu-core");
            subscriber.with_writer(file_appender).init();
            return;
        }
        // Missing directory falls through to terminal output
    }

    subscriber.init();
}
