//! Trace sinks.
//!
//! A sink receives every [`Record`] produced by the [`Driver`](super::Driver)
//! with all result fields observable at once. Sinks provided here:
//! - [`MemoryTrace`]: keeps records in memory for inspection.
//! - [`JsonLinesTrace`]: one JSON object per line.
//! - [`VcdTrace`](super::vcd::VcdTrace): Value Change Dump for waveform viewers.
//! - [`TraceFanout`]: forwards to several sinks.

use std::fmt;
use std::io::Write;

use super::driver::Record;
use crate::common::{SimError, Width};

/// Destination for evaluated steps.
pub trait TraceSink {
    /// Accepts one record. `width` is the width of the ALU that produced it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] or [`SimError::Json`] when output fails.
    fn record(&mut self, width: Width, record: &Record) -> Result<(), SimError>;

    /// Flushes any buffered output once the stimulus is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] when flushing fails.
    fn finish(&mut self) -> Result<(), SimError> {
        Ok(())
    }
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn record(&mut self, _width: Width, _record: &Record) -> Result<(), SimError> {
        Ok(())
    }
}

/// Sink that keeps every record in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryTrace {
    records: Vec<Record>,
}

impl MemoryTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records captured so far.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the trace, returning its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Number of captured records.
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been captured.
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TraceSink for MemoryTrace {
    fn record(&mut self, _width: Width, record: &Record) -> Result<(), SimError> {
        self.records.push(*record);
        Ok(())
    }
}

/// Sink writing one JSON object per record, newline separated.
#[derive(Debug)]
pub struct JsonLinesTrace<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesTrace<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for JsonLinesTrace<W> {
    fn record(&mut self, _width: Width, record: &Record) -> Result<(), SimError> {
        serde_json::to_writer(&mut self.writer, record)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SimError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink forwarding every record to a list of sinks in order.
#[derive(Default)]
pub struct TraceFanout<'a> {
    sinks: Vec<Box<dyn TraceSink + 'a>>,
}

impl<'a> TraceFanout<'a> {
    /// Creates an empty fan-out.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Adds a sink.
    pub fn push<S: TraceSink + 'a>(&mut self, sink: S) {
        self.sinks.push(Box::new(sink));
    }

    /// Number of attached sinks.
    pub const fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no sink is attached.
    pub const fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl fmt::Debug for TraceFanout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceFanout")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl TraceSink for TraceFanout<'_> {
    fn record(&mut self, width: Width, record: &Record) -> Result<(), SimError> {
        for sink in &mut self.sinks {
            sink.record(width, record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SimError> {
        for sink in &mut self.sinks {
            sink.finish()?;
        }
        Ok(())
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn record(&mut self, width: Width, record: &Record) -> Result<(), SimError> {
        (**self).record(width, record)
    }

    fn finish(&mut self) -> Result<(), SimError> {
        (**self).finish()
    }
}
