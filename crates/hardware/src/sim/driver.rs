//! Stimulus driver.
//!
//! The ALU keeps no state between evaluations, so anything that must persist
//! from one step to the next lives here. It performs:
//! 1. **Stimulus:** Ordered `(A, B, func)` steps, loadable from JSON.
//! 2. **Carry ownership:** The carry produced by one step is fed into the rotates of the next.
//! 3. **Recording:** Each evaluation becomes a [`Record`] handed to a [`TraceSink`].

use serde::{Deserialize, Serialize};

use super::trace::TraceSink;
use crate::alu::{Alu, AluFunc, AluOutput};
use crate::common::{FuncError, SimError};
use crate::config::AluConfig;
use crate::stats::SimStats;

/// One stimulus step.
///
/// In JSON `func` may be a mnemonic (`"ADD"`, case-insensitive) or a raw
/// numeric code. Raw codes outside the enumeration are kept as-is and take
/// the pass-through arm when evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStep")]
pub struct Step {
    /// Operand `A`.
    pub a: u64,
    /// Operand `B`.
    pub b: u64,
    /// Raw selector code.
    pub func: u8,
}

impl Step {
    /// Builds a step for a defined operation.
    pub const fn new(a: u64, b: u64, func: AluFunc) -> Self {
        Self {
            a,
            b,
            func: func.code(),
        }
    }

    /// Builds a step from a raw selector code.
    pub const fn raw(a: u64, b: u64, func: u8) -> Self {
        Self { a, b, func }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FuncRepr {
    Code(u8),
    Mnemonic(String),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    #[serde(default)]
    a: u64,
    #[serde(default)]
    b: u64,
    func: FuncRepr,
}

impl TryFrom<RawStep> for Step {
    type Error = FuncError;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        let func = match raw.func {
            FuncRepr::Code(code) => code,
            FuncRepr::Mnemonic(name) => name.parse::<AluFunc>()?.code(),
        };
        Ok(Self::raw(raw.a, raw.b, func))
    }
}

/// An ordered sequence of stimulus steps.
///
/// Serialized as a JSON array of steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stimulus {
    steps: Vec<Step>,
}

impl Stimulus {
    /// Wraps a list of steps.
    pub const fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Parses a JSON array of steps.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Json`] for malformed documents and
    /// [`SimError::Func`] for a step naming an unknown mnemonic.
    ///
    /// # Examples
    ///
    /// ```
    /// use alusim_core::sim::Stimulus;
    ///
    /// let stimulus = Stimulus::from_json(r#"[
    ///     { "a": 1, "b": 85, "func": "add" },
    ///     { "a": 1, "b": 85, "func": 16 }
    /// ]"#).unwrap();
    /// assert_eq!(stimulus.len(), 2);
    /// assert_eq!(stimulus.steps()[1].func, 16);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let raw: Vec<RawStep> = serde_json::from_str(json)?;
        let steps = raw
            .into_iter()
            .map(Step::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(steps))
    }

    /// The sequence exercised by the reference test bench.
    ///
    /// `A = 0x01, B = 0x55` is held while the selector walks through
    /// NONE, ADD, CLV, CLC, SUB, CLV, CLC, NEG and AND, then
    /// `A = 0x7F, B = 0x01` is added to provoke a signed overflow.
    pub fn demo() -> Self {
        const A: u64 = 0x01;
        const B: u64 = 0x55;
        let walk = [
            AluFunc::None,
            AluFunc::Add,
            AluFunc::Clv,
            AluFunc::Clc,
            AluFunc::Sub,
            AluFunc::Clv,
            AluFunc::Clc,
            AluFunc::Neg,
            AluFunc::And,
        ];
        let mut steps: Vec<Step> = walk.into_iter().map(|func| Step::new(A, B, func)).collect();
        steps.push(Step::new(0b0111_1111, 0b0000_0001, AluFunc::Add));
        Self { steps }
    }

    /// Appends a step.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// The steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there are no steps.
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<Step> for Stimulus {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One evaluated step as seen by a trace sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based step index.
    pub cycle: u64,
    /// Operand `A`, truncated to the width.
    pub a: u64,
    /// Operand `B`, truncated to the width.
    pub b: u64,
    /// Raw selector code.
    pub func: u8,
    /// Carry presented to the ALU.
    pub carry_in: bool,
    /// Result and flags.
    #[serde(flatten)]
    pub output: AluOutput,
}

/// Applies stimulus to an ALU and carries state between steps.
#[derive(Clone, Debug)]
pub struct Driver {
    alu: Alu,
    chain_carry: bool,
    carry: bool,
    cycle: u64,
}

impl Driver {
    /// Creates a driver around `alu`.
    ///
    /// With `chain_carry` set, the carry output of each step is presented as
    /// the carry input of the next; otherwise the carry input is always low.
    pub const fn new(alu: Alu, chain_carry: bool) -> Self {
        Self {
            alu,
            chain_carry,
            carry: false,
            cycle: 0,
        }
    }

    /// Creates a driver from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] wrapping the width errors of
    /// [`AluConfig::validate`].
    pub fn from_config(config: &AluConfig) -> Result<Self, SimError> {
        Ok(Self::new(Alu::from_config(config)?, config.chain_carry))
    }

    /// The driven ALU.
    pub const fn alu(&self) -> &Alu {
        &self.alu
    }

    /// Carry produced by the most recent step.
    pub const fn carry(&self) -> bool {
        self.carry
    }

    /// Number of steps applied since construction or the last reset.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Forces the held carry, e.g. to seed a rotate sequence.
    pub const fn set_carry(&mut self, carry: bool) {
        self.carry = carry;
    }

    /// Clears the held carry and the step counter.
    pub const fn reset(&mut self) {
        self.carry = false;
        self.cycle = 0;
    }

    /// Applies one step.
    pub fn step(&mut self, step: Step) -> Record {
        let width = self.alu.width();
        let carry_in = self.chain_carry && self.carry;
        let output = self.alu.execute_code(step.func, step.a, step.b, carry_in);

        let record = Record {
            cycle: self.cycle,
            a: width.truncate(step.a),
            b: width.truncate(step.b),
            func: step.func,
            carry_in,
            output,
        };

        self.carry = output.carry;
        self.cycle += 1;
        record
    }

    /// Applies every step of `stimulus`, handing each record to `sink`.
    ///
    /// The sink is finished once the stimulus is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the sink.
    pub fn run<S>(&mut self, stimulus: &Stimulus, sink: &mut S) -> Result<SimStats, SimError>
    where
        S: TraceSink + ?Sized,
    {
        let width = self.alu.width();
        let mut stats = SimStats::default();
        tracing::info!(steps = stimulus.len(), %width, "running stimulus");

        for step in stimulus.steps() {
            let record = self.step(*step);
            tracing::debug!(
                cycle = record.cycle,
                func = record.func,
                output = %record.output,
                "step"
            );
            stats.record(&record);
            sink.record(width, &record)?;
        }

        sink.finish()?;
        Ok(stats)
    }
}
