//! JSON-lines event log.
//!
//! Each session event becomes one JSON object on its own line, stamped with
//! the milliseconds since the game started:
//!
//! ```text
//! {"t_ms":3120,"event":"locked","kind":"O","rows_cleared":0,"points":0,"score":0}
//! {"t_ms":9876,"event":"game_over","score":40}
//! ```
//!
//! Logging is off unless `BLOCKTRIS_EVENT_LOG` names a file.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::SessionEvent;

/// Environment variable holding the log file path
pub const EVENT_LOG_ENV: &str = "BLOCKTRIS_EVENT_LOG";

/// Log path from the environment, `None` if unset or blank.
pub fn path_from_env() -> Option<PathBuf> {
    path_from_lookup(|key| std::env::var(key).ok())
}

/// Same as [`path_from_env`] with a custom variable source.
pub fn path_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let raw = lookup(EVENT_LOG_ENV)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

#[derive(Debug, Serialize)]
struct EventRecord<'a> {
    t_ms: u64,
    #[serde(flatten)]
    event: &'a SessionEvent,
}

/// Append-only JSONL writer
pub struct EventLog<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<std::fs::File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn record(&mut self, t_ms: u64, event: &SessionEvent) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &EventRecord { t_ms, event })?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn record_all(&mut self, t_ms: u64, events: &[SessionEvent]) -> Result<()> {
        for event in events {
            self.record(t_ms, event)?;
        }
        if !events.is_empty() {
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
