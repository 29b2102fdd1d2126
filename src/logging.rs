//! Tracing setup for the textgrid binary
//!
//! `RUST_LOG` always wins when set, e.g. `RUST_LOG=textgrid::table=trace` to
//! see every layout and mapping call. Otherwise `-v` flags raise the console
//! level for textgrid's own targets, and everything else stays at `warn`.
//!
//! Unless disabled, a debug-level copy goes to
//! `<config dir>/logs/render.log.YYYY-MM-DD`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_PREFIX};

/// How the binary wants its diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    /// Number of `-v` flags
    pub verbosity: u8,
    /// Write the rolling log file
    pub file: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            verbosity: 0,
            file: true,
        }
    }
}

/// Console filter directive used when `RUST_LOG` is not set
fn console_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,textgrid={}", level)
}

/// Install the global subscriber
///
/// Console output goes to stderr so it never mixes with grids on stdout.
pub fn init(options: LogOptions) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_directive(options.verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = if options.file {
        match ensure_logs_dir() {
            Ok(logs_dir) => {
                let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
