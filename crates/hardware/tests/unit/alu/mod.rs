//! ALU unit tests.

/// Add and subtract vectors: carry, borrow and signed overflow.
pub mod arithmetic;


/// Selector codes, mnemonics and serde forms.
pub mod func;
