use std::io::Write;

use crate::errors::*;

pub const GREETING: &str = "Hello, world";

pub fn greet(out: &mut impl Write) -> Result<(), PrimerError> {
  writeln!(out, "{GREETING}").map_err(OutputError::io("greeting"))?;
  Ok(())
}
