//! Diagnostic logging
//!
//! Log output goes to stderr and is filtered through `RUST_LOG`. Without it
//! only warnings are shown, so the one-line diagnostics of the binaries stay
//! the only thing on stderr.

use crate::ProgressEvent;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs the global tracing subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init();
}

/// Progress callback that turns lookup events into log records
pub fn log_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Searching { title } => {
            tracing::info!(%title, "searching catalog");
        }
        ProgressEvent::ShowSelected {
            candidates,
            show_id,
            show_name,
            premiered,
        } => {
            let premiered = premiered
                .map(|date| date.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            tracing::info!(
                candidates,
                show_id,
                %show_name,
                %premiered,
                "selected most recently premiered show"
            );
        }
        ProgressEvent::FetchingEpisodes { show_id } => {
            tracing::debug!(show_id, "fetching episodes");
        }
        ProgressEvent::EpisodesFetched {
            episode_count,
            with_runtime,
        } => {
            if with_runtime < episode_count {
                tracing::debug!(
                    skipped = episode_count - with_runtime,
                    "episodes without runtime are not counted"
                );
            }
            tracing::info!(episode_count, with_runtime, "episodes fetched");
        }
    }
}
