//! linotour binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use linotour::{app, args, theme, util};

struct LinotourTimer;

impl tracing_subscriber::fmt::time::FormatTime for LinotourTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&util::log_timestamp(chrono::Utc::now()))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_new(level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    let level = args::determine_log_level(&args);

    // Log to ~/.config/linotour/logs/linotour.log; the TUI owns the terminal.
    {
        let mut log_path = theme::logs_dir();
        log_path.push("linotour.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter(&level))
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(LinotourTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter(&level))
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr)
                    .with_timer(LinotourTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "linotour starting");
    if let Err(err) = app::run(args).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("linotour exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes the `YYYY-MM-DD-T HH:MM:SS` timestamp
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives a 21-character timestamp
    #[test]
    fn linotour_timer_formats_time() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::LinotourTimer;
        let _ = t.format_time(&mut writer);
        assert_eq!(buf.len(), 21);
        assert!(buf.contains("-T "));
    }
}
