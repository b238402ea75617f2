use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for the binary.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn` so log lines don't drown
/// the command output. Set `ALBUMVIEW_LOG` to a file path to write logs there
/// instead of stderr.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Ok(log_path) = std::env::var("ALBUMVIEW_LOG") {
        match std::fs::File::create(&log_path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .init();
                return;
            }
            Err(e) => eprintln!("Warning: Failed to create log file {}: {}", log_path, e),
        }
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
