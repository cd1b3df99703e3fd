//! CLI for headage.

use anyhow::{Context, Result};
use clap::Parser;
use headage_core::fetch_head::Prober;
use std::io;

/// Report how long ago a URL was last modified, as JSON.
#[derive(Debug, Parser)]
#[command(name = "headage")]
#[command(
    about = "Send one HEAD request and print {\"age\", \"status\"} from Last-Modified",
    long_about = None
)]
pub struct Cli {
    /// HTTP/HTTPS URL to probe.
    pub url: String,
}

impl Cli {
    /// Probes the URL and prints one JSON line. Probe failures are reported
    /// in the JSON itself; only a failed stdout write is an error.
    pub fn run(&self) -> Result<()> {
        tracing::debug!("probe url={}", self.url);
        let report = Prober::new().probe(&self.url);
        report
            .write_json_line(io::stdout().lock())
            .context("writing report to stdout")?;
        Ok(())
    }
}
