// ============================================================================
// Numeric Module
// Errors and decimal-exponent shifts shared by the whole engine
// ============================================================================
//
// This module provides:
// - CurrencyError / CurrencyResult: the full failure taxonomy
// - Shift: wei/ray/rad presets and explicit exponents
// - pow10: exact powers of ten for shift application
//
// Design principles:
// - All decimal mechanics are delegated to bigdecimal
// - All fallible paths return Result (no panics)
// - Shifts are exact; no precision is lost applying or inverting them

mod errors;
mod shift;

pub use errors::{CurrencyError, CurrencyResult};
pub use shift::{pow10, Shift};
