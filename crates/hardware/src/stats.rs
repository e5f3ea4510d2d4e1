//! Simulation statistics collection and reporting.
//!
//! This module tracks what a stimulus run exercised. It provides:
//! 1. **Operation mix:** Evaluation counts per mnemonic, with reserved codes under `unknown`.
//! 2. **Flag activity:** How often each status flag was raised.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::alu::AluFunc;
use crate::sim::Record;

/// Key under which reserved selector codes are counted.
pub const UNKNOWN_KEY: &str = "unknown";

/// Statistics accumulated over a stimulus run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total evaluations performed.
    pub evaluations: u64,
    /// Evaluations per operation mnemonic.
    pub per_func: BTreeMap<&'static str, u64>,
    /// Evaluations that produced `zero`.
    pub zero: u64,
    /// Evaluations that produced `carry`.
    pub carry: u64,
    /// Evaluations that produced `negative`.
    pub negative: u64,
    /// Evaluations that produced `overflow`.
    pub overflow: u64,
    /// Evaluations that produced `signed`.
    pub signed: u64,
}

impl SimStats {
    /// Accounts for one driver record.
    pub fn record(&mut self, record: &Record) {
        let key = AluFunc::from_code(record.func).map_or(UNKNOWN_KEY, AluFunc::mnemonic);
        *self.per_func.entry(key).or_insert(0) += 1;

        let out = &record.output;
        self.evaluations += 1;
        self.zero += u64::from(out.zero);
        self.carry += u64::from(out.carry);
        self.negative += u64::from(out.negative);
        self.overflow += u64::from(out.overflow);
        self.signed += u64::from(out.signed);
    }

    /// Number of evaluations of `func`.
    pub fn count(&self, func: AluFunc) -> u64 {
        self.per_func.get(func.mnemonic()).copied().unwrap_or(0)
    }

    /// Number of evaluations of reserved selector codes.
    pub fn unknown(&self) -> u64 {
        self.per_func.get(UNKNOWN_KEY).copied().unwrap_or(0)
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.evaluations.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "ALU SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_evaluations          {}", self.evaluations)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "OPERATION MIX")?;
        for (name, count) in &self.per_func {
            writeln!(f, "  op.{name:<20} {count} ({:.2}%)", pct(*count))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "FLAGS RAISED")?;
        writeln!(f, "  flag.zero              {} ({:.2}%)", self.zero, pct(self.zero))?;
        writeln!(f, "  flag.carry             {} ({:.2}%)", self.carry, pct(self.carry))?;
        writeln!(f, "  flag.negative          {} ({:.2}%)", self.negative, pct(self.negative))?;
        writeln!(f, "  flag.overflow          {} ({:.2}%)", self.overflow, pct(self.overflow))?;
        writeln!(f, "  flag.signed            {} ({:.2}%)", self.signed, pct(self.signed))?;
        write!(f, "==========================================================")
    }
}
