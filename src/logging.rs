use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file for the terminal view.
pub const LOG_PATH_ENV: &str = "CALLERBOARD_LOG";

/// Where log events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// A per-process file named by `CALLERBOARD_LOG`; nothing when unset.
    File,
    /// Standard error, so stdout stays machine-readable.
    Stderr,
}

impl LogTarget {
    fn default_filter(self) -> &'static str {
        match self {
            LogTarget::File => "info",
            LogTarget::Stderr => "warn",
        }
    }
}

/// Initialize tracing for the given target.
///
/// `RUST_LOG` overrides the default level. File logging is disabled unless
/// `CALLERBOARD_LOG` is set, so the terminal display is never corrupted.
/// Log files get unique names, `{path}.{timestamp}.{pid}`, so concurrent
/// instances don't clobber each other.
pub fn init_tracing(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(target.default_filter()));

    match target {
        LogTarget::File => {
            let Some(log_path) = std::env::var(LOG_PATH_ENV).ok() else {
                return;
            };
            let unique_path = unique_log_path(&log_path);
            let Ok(file) = std::fs::File::create(&unique_path) else {
                eprintln!("Warning: Failed to create log file: {}", unique_path);
                return;
            };

            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .init();
        }
    }
}

fn unique_log_path(base: &str) -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, std::process::id())
}
