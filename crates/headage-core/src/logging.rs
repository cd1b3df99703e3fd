//! Logging init: plain-text file under the XDG state dir, never stdout/stderr.
//!
//! stdout carries the JSON report and stderr the usage line, so when the log
//! file is unusable logging is dropped rather than redirected.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::HeadageConfig;

/// Writer that is either the log file or a sink (used when file clone fails).
enum FileOrSink {
    File(fs::File),
    Sink,
}

impl io::Write for FileOrSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrSink::File(f) => f.write(buf),
            FileOrSink::Sink => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrSink::File(f) => f.flush(),
            FileOrSink::Sink => Ok(()),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrSink::File)
            .unwrap_or(FileOrSink::Sink)
    }
}

/// Path of the log file, `~/.local/state/headage/headage.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("headage")?;
    // with_prefix already appends "headage" to the state home.
    Ok(xdg_dirs.get_state_home().join("headage.log"))
}

/// Initialize structured logging to the state-dir log file.
///
/// Returns `Ok(None)` when the config turns file logging off. On failure
/// (e.g. state dir unwritable) returns Err; the caller should carry on
/// without logging.
pub fn init_logging(cfg: &HeadageConfig) -> Result<Option<PathBuf>> {
    if !cfg.log_to_file {
        return Ok(None);
    }

    let log_file_path = log_file_path()?;
    if let Some(dir) = log_file_path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("opening {}", log_file_path.display()))?;

    let writer = BoxMakeWriter::new(FileMakeWriter(file));

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {}", e))?;

    tracing::debug!("headage logging initialized at {}", log_file_path.display());

    Ok(Some(log_file_path))
}
