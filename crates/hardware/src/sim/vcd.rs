//! Value Change Dump (VCD) trace output.
//!
//! Writes the ALU ports as a waveform readable by GTKWave and similar
//! viewers. Each driver step occupies one timestep of one microsecond; only
//! signals whose value changed are emitted after the initial dump.

use std::io::{self, Write};

use super::driver::Record;
use super::trace::TraceSink;
use crate::common::{SimError, Width};

/// Bit width of the `func` signal; wide enough for any raw selector code.
const FUNC_BITS: u32 = u8::BITS;

/// Dumped signals as `(name, identifier code)`, in declaration order.
const SIGNALS: [(&str, char); 9] = [
    ("A", '!'),
    ("B", '"'),
    ("func", '#'),
    ("OUT", '$'),
    ("zero", '%'),
    ("carry", '&'),
    ("overflow", '\''),
    ("signed", '('),
    ("negative", ')'),
];

type Sample = [u64; SIGNALS.len()];

const fn sample(record: &Record) -> Sample {
    let out = &record.output;
    [
        record.a,
        record.b,
        record.func as u64,
        out.out,
        out.zero as u64,
        out.carry as u64,
        out.overflow as u64,
        out.signed as u64,
        out.negative as u64,
    ]
}

const fn signal_bits(width: Width) -> [u32; SIGNALS.len()] {
    let w = width.bits();
    [w, w, FUNC_BITS, w, 1, 1, 1, 1, 1]
}

/// Sink writing a VCD waveform.
#[derive(Debug)]
pub struct VcdTrace<W: Write> {
    writer: W,
    bits: [u32; SIGNALS.len()],
    previous: Option<Sample>,
    end_time: u64,
}

impl<W: Write> VcdTrace<W> {
    /// Wraps a writer. The header is emitted with the first record.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            bits: [1; SIGNALS.len()],
            previous: None,
            end_time: 0,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self, width: Width) -> io::Result<()> {
        self.bits = signal_bits(width);
        writeln!(self.writer, "$version alusim {} $end", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer, "$timescale 1us $end")?;
        writeln!(self.writer, "$scope module alu $end")?;
        for ((name, id), bits) in SIGNALS.iter().zip(self.bits) {
            writeln!(self.writer, "$var wire {bits} {id} {name} $end")?;
        }
        writeln!(self.writer, "$upscope $end")?;
        writeln!(self.writer, "$enddefinitions $end")
    }

    fn write_value(&mut self, index: usize, value: u64) -> io::Result<()> {
        let id = SIGNALS[index].1;
        if self.bits[index] == 1 {
            writeln!(self.writer, "{value}{id}")
        } else {
            writeln!(self.writer, "b{value:b} {id}")
        }
    }
}

impl<W: Write> TraceSink for VcdTrace<W> {
    fn record(&mut self, width: Width, record: &Record) -> Result<(), SimError> {
        let current = sample(record);
        let time = record.cycle;

        let previous = self.previous;
        match previous {
            None => {
                self.write_header(width)?;
                writeln!(self.writer, "#{time}")?;
                writeln!(self.writer, "$dumpvars")?;
                for (index, value) in current.into_iter().enumerate() {
                    self.write_value(index, value)?;
                }
                writeln!(self.writer, "$end")?;
            }
            Some(previous) => {
                if previous != current {
                    writeln!(self.writer, "#{time}")?;
                }
                for (index, (old, new)) in previous.into_iter().zip(current).enumerate() {
                    if old != new {
                        self.write_value(index, new)?;
                    }
                }
            }
        }

        self.previous = Some(current);
        self.end_time = time + 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SimError> {
        if self.previous.is_some() {
            writeln!(self.writer, "#{}", self.end_time)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
