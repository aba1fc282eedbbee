//! `env_logger` setup driven by [`LoggingConfig`].

use env_logger::{Builder, Env};
use hal_shared::{LogFormat, LoggingConfig};
use log::Record;
use std::io::Write;

/// Build a logger for `config`; `RUST_LOG` still overrides the filter
pub fn logger_builder(config: &LoggingConfig) -> Builder {
    let format = config.format;
    let timestamp = config.timestamp;

    let mut builder = Builder::from_env(Env::new().default_filter_or(config.filter_directive()));
    builder.format(move |buf, record| {
        let line = render_record(format, record);
        if timestamp {
            let ts = buf.timestamp_seconds();
            writeln!(buf, "[{ts}] {line}")
        } else {
            writeln!(buf, "{line}")
        }
    });
    builder
}

/// Install the global logger
pub fn init_logging(config: &LoggingConfig) {
    logger_builder(config).init();
}

/// Render one record without the timestamp
pub fn render_record(format: LogFormat, record: &Record<'_>) -> String {
    if format.shows_target() {
        format!("{:<5} {} > {}", record.level(), record.target(), record.args())
    } else {
        format!("{:<5} {}", record.level(), record.args())
    }
}
