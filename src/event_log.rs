//! JSON-lines log of game events.
//!
//! One object per line: a running `seq` number plus the serialized
//! [`GameEvent`] fields (`type` tag included).

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameEvent;

#[derive(Serialize)]
struct Record<'a> {
    seq: u64,
    #[serde(flatten)]
    event: &'a GameEvent,
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    /// Number of events written so far.
    pub fn written(&self) -> u64 {
        self.seq
    }

    pub fn write_event(&mut self, event: &GameEvent) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(
            &mut self.buf,
            &Record {
                seq: self.seq,
                event,
            },
        )?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.seq += 1;
        Ok(())
    }

    pub fn write_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) -> Result<()> {
        for event in events {
            self.write_event(event)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
