// ABOUTME: Library side of the topboard binary: configuration, fetching, writing and logging.
// ABOUTME: Kept separate from main.rs so the pipeline can be tested without spawning a process.

pub mod config;
pub mod fetch;
pub mod output;
pub mod run;

pub use config::Config;
pub use fetch::FetchError;
pub use run::{run_build, run_history, BuildOutcome};

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
