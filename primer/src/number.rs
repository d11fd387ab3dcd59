/// Default type for integer values.
pub type Int = isize;

/// Default type for floating point values.
pub type Float = f64;

/// Single unsigned byte.
pub type Byte = u8;
