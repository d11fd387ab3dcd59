use std::io::{self, ErrorKind, Write};

/// Writer that fails every write, like a pipe whose reader has gone away.
#[cfg(test)]
pub struct ClosedPipe;

#[cfg(test)]
impl Write for ClosedPipe {
  fn write(&mut self, _: &[u8]) -> io::Result<usize> {
    Err(io::Error::from(ErrorKind::BrokenPipe))
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}
