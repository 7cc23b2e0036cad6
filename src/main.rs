use anyhow::Context;

use memory_match::audio::AudioController;
use memory_match::config::Config;
use memory_match::game::MatchSession;
use memory_match::runtime::{spawn_input_thread, GameRuntime};
use memory_match::ui::BoardView;

/// Initialize tracing with file rotation
///
/// Logs are written to the platform config directory under
/// `memory-match/logs/`, rotated daily. Console output is skipped entirely:
/// the board view owns stdout.
fn initialize_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("memory-match").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "memory-match.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    // Info level by default, overridable via RUST_LOG
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!("Log directory: {}", log_dir.display());
    guard
}

fn main() -> anyhow::Result<()> {
    let _log_guard = initialize_tracing();
    tracing::info!(
        "Starting memory-match v{} on {}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH
    );

    let config = Config::load().context("failed to load configuration")?;
    tracing::info!(
        pairs = config.pairs,
        total_time_secs = config.total_time_secs,
        "Configuration loaded (edit at {})",
        Config::config_dir_display()
    );

    // Sound is best-effort: a headless machine or missing cue files lands
    // in a silent game, never a failed one
    let audio = match AudioController::new(&config.audio) {
        Ok(audio) => audio,
        Err(e) => {
            tracing::warn!(error = %e, "Audio unavailable, continuing silent");
            AudioController::disabled()
        }
    };

    let session = MatchSession::new(&config);
    let view = BoardView::new(config.columns);
    let mut runtime = GameRuntime::new(session, audio, view);

    // The input thread parks on stdin, so it is left detached; joining it
    // would block shutdown on one more line of input
    let (input_tx, input_rx) = crossbeam_channel::unbounded();
    spawn_input_thread(input_tx);

    runtime.run(input_rx).context("event loop failed")?;

    tracing::info!("Goodbye");
    Ok(())
}
