//! Explicit conversions between the numeric kinds in [crate::number].
//!
//! Nothing here converts implicitly: every change of kind or width goes through one of the
//! functions below. Narrowing never fails, it truncates or wraps to the target range.

use crate::number::{Byte, Float, Int};

pub fn widen_int(value: Int) -> Float {
  value as Float
}

/// Drops the fractional part toward zero. Out of range values saturate, `NaN` becomes `0`.
pub fn truncate_float(value: Float) -> Int {
  value as Int
}

pub fn widen_byte(value: Byte) -> Int {
  Int::from(value)
}

/// Keeps the low eight bits, i.e. reduces the value modulo 256.
pub fn narrow_int(value: Int) -> Byte {
  value as Byte
}
