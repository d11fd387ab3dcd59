//! Sums over mixed numeric kinds, each operand converted explicitly before the addition.

use std::fmt::{self, Display};
use std::io::Write;

use crate::conversions::*;
use crate::errors::*;
use crate::number::{Byte, Float, Int};

pub const X: Int = 10;
pub const Y: Float = 30.2;
pub const A: Int = 10;
pub const B: Byte = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatSums {
  /// `float64(x) + y`
  pub widened: Float,
  /// `x + int(y)`
  pub truncated: Int,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ByteSums {
  /// `a + int(b)`
  pub widened: Int,
  /// `byte(a) + b`, wrapping modulo 256.
  pub narrowed: Byte,
}

pub fn float_sums(x: Int, y: Float) -> FloatSums {
  FloatSums {
    widened: widen_int(x) + y,
    truncated: x.wrapping_add(truncate_float(y)),
  }
}

pub fn byte_sums(a: Int, b: Byte) -> ByteSums {
  ByteSums {
    widened: a.wrapping_add(widen_byte(b)),
    narrowed: narrow_int(a).wrapping_add(b),
  }
}

impl Display for FloatSums {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.widened, self.truncated)
  }
}

impl Display for ByteSums {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.widened, self.narrowed)
  }
}

pub fn run(out: &mut impl Write) -> Result<(), PrimerError> {
  writeln!(out, "{}", float_sums(X, Y)).map_err(OutputError::io("float sums"))?;
  writeln!(out, "{}", byte_sums(A, B)).map_err(OutputError::io("byte sums"))?;

  Ok(())
}
