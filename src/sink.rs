//! Output sinks for generated batches.
//!
//! The window forwards every batch it generates to a [`BatchSink`]. The
//! default [`ConsoleSink`] prints one line per batch on stdout; a
//! [`ChannelSink`] created by [`channel_batches`] delivers
//! [`BatchRecord`]s over an `mpsc` channel for embedding code and tests.

use std::io::Write;
use std::sync::mpsc::{Receiver, SendError, Sender};

use chrono::{DateTime, Local};

use crate::data::source::SampleBatch;

/// Why a batch was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOrigin {
    /// Printed once while the window is constructed.
    Startup,
    /// Produced by a "Generate Data" click.
    Click,
}

/// A batch together with where and when it was produced.
#[derive(Debug, Clone)]
pub struct BatchRecord {
    pub origin: BatchOrigin,
    pub batch: SampleBatch,
    pub at: DateTime<Local>,
}

/// Destination for batches surfaced by the window.
pub trait BatchSink {
    fn publish(&mut self, origin: BatchOrigin, batch: &SampleBatch);
}

/// Writes each batch as one line, e.g. `[4, 0, 10, 7]`.
pub struct ConsoleSink<W: Write = std::io::Stdout> {
    out: W,
}

impl ConsoleSink {
    /// Sink printing to stdout.
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Sink writing to an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> BatchSink for ConsoleSink<W> {
    fn publish(&mut self, origin: BatchOrigin, batch: &SampleBatch) {
        // A closed stdout must not take the UI down with it.
        if let Err(e) = writeln!(self.out, "{batch}").and_then(|_| self.out.flush()) {
            tracing::warn!(?origin, "failed to write batch: {e}");
        }
    }
}

/// Convenience sender delivering [`BatchRecord`]s to a receiver.
#[derive(Clone)]
pub struct ChannelSink {
    tx: Sender<BatchRecord>,
}

impl ChannelSink {
    /// Send a batch, stamping it with the current local time.
    pub fn send(&self, origin: BatchOrigin, batch: SampleBatch) -> Result<(), SendError<BatchRecord>> {
        self.tx.send(BatchRecord {
            origin,
            batch,
            at: Local::now(),
        })
    }
}

impl BatchSink for ChannelSink {
    fn publish(&mut self, origin: BatchOrigin, batch: &SampleBatch) {
        // Ignore error if the receiver was dropped
        let _ = self.send(origin, batch.clone());
    }
}

/// Create a new channel pair for batches: `(ChannelSink, Receiver<BatchRecord>)`.
pub fn channel_batches() -> (ChannelSink, Receiver<BatchRecord>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (ChannelSink { tx }, rx)
}
