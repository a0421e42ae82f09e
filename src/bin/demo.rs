//! Times word lookups in a plain list against trees built in different ways.
//!
//! ```text
//! demo <WORDS_FILE> [SAMPLE_SIZE]
//! ```
//!
//! Progress is logged to stderr. Set `RUST_LOG` (e.g. `RUST_LOG=debug`) to see more of it.

use std::process::ExitCode;

use linked_bst::demo::{self, Config, DemoError};
use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DemoError> {
    let config = Config::from_args(std::env::args().skip(1))?;
    let report = demo::run(&config, &mut rand::thread_rng())?;
    print!("{}", report);
    Ok(())
}
