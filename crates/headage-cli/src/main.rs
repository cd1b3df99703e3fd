use clap::Parser;
use headage_core::{config, logging};

mod cli;

use crate::cli::Cli;

fn main() {
    // Wrong argument count: clap prints usage to stderr and exits 2.
    let cli = Cli::parse();

    let loaded = config::load();
    let cfg = loaded.as_ref().cloned().unwrap_or_default();
    // Failure is ignored on purpose: there is no fallback writer, stdout and
    // stderr belong to the report and the usage message.
    let _ = logging::init_logging(&cfg);
    if let Err(err) = &loaded {
        tracing::warn!("ignoring config: {:#}", err);
    }

    if let Err(err) = cli.run() {
        tracing::error!("{:#}", err);
        eprintln!("headage error: {:#}", err);
        std::process::exit(1);
    }
}
