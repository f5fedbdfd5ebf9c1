//! Where `tracing` output goes.
//!
//! The console game shares the terminal with stderr, so it logs there. The
//! full-screen UI owns the terminal and must not be written over, so it logs
//! to a file when one is configured and discards events otherwise.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    /// Pick the target for a front end.
    pub fn select(console: bool, file: Option<&Path>) -> LogTarget {
        match (file, console) {
            (Some(path), _) => LogTarget::File(path.to_path_buf()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Discard,
        }
    }

    fn make_writer(&self) -> io::Result<BoxMakeWriter> {
        Ok(match self {
            LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
            LogTarget::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                BoxMakeWriter::new(Mutex::new(file))
            }
            LogTarget::Discard => BoxMakeWriter::new(io::sink),
        })
    }
}

/// Build a formatting subscriber writing to `target`. Files get no ANSI colors.
pub fn subscriber(
    level: tracing::Level,
    target: &LogTarget,
) -> io::Result<impl tracing::Subscriber + Send + Sync> {
    Ok(tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(target.make_writer()?)
        .with_ansi(*target == LogTarget::Stderr)
        .with_target(false)
        .finish())
}

/// Install the global subscriber.
pub fn init(level: tracing::Level, target: &LogTarget) -> io::Result<()> {
    tracing::subscriber::set_global_default(subscriber(level, target)?)
        .map_err(io::Error::other)
}
