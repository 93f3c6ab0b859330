use crate::models::{Args, Config};
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use std::path::PathBuf;

/// Main CLI entry point
///
/// Usage errors (including a missing --from or --file) exit with status 2
/// from inside argument parsing; --version prints and exits 0 there too.
pub fn run() -> Result<PathBuf> {
    let args = Args::parse();
    init_logging();

    let config = Config::from(args);
    crate::runner::fetch_and_install(&config).with_context(|| {
        format!(
            "failed to install '{}' from {} into {}",
            config.file,
            config.from,
            config.to.display()
        )
    })
}

/// Log to stdout at info level unless RUST_LOG says otherwise
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format_target(false)
        .try_init();
}
