//! Logging setup: tracing to a file under the config dir, never stdout —
//! the terminal belongs to the alternate screen while the TUI runs.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Initialize file logging. The returned guard must stay alive for the
/// program lifetime or buffered lines are lost.
pub fn init_file_logging() -> Option<WorkerGuard> {
    let dir = crate::profiles::config_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }
    let file_appender = tracing_appender::rolling::never(dir, "dashtop.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter),
        )
        .init();

    Some(guard)
}
