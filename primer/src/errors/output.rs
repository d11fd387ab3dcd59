use std::fmt::{self, Display};
use std::io::Error;
use std::sync::Arc;

use super::{PrimerError, Wrappable};

#[derive(Clone, Debug)]
pub enum OutputError {
  IO { error: Arc<Error>, message: String },
}

impl OutputError {
  /// Builds a closure suitable for `map_err` that tags an IO error with what was being written.
  pub fn io(message: &str) -> impl FnOnce(Error) -> OutputError + '_ {
    move |error| OutputError::IO {
      error: Arc::new(error),
      message: message.to_string(),
    }
  }
}

impl Wrappable for OutputError {
  type Wrapper = PrimerError;

  fn wrap(self) -> Self::Wrapper {
    PrimerError::Output(self)
  }
}

impl Display for OutputError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | OutputError::IO { error, message } => write!(f, "{message}: {error}"),
    }
  }
}

/// Output errors never compare equal: [std::io::Error] has no [PartialEq].
impl PartialEq for OutputError {
  fn eq(&self, _: &OutputError) -> bool {
    false
  }
}

#[cfg(test)]
mod tests {
  use std::io::ErrorKind;

  use super::*;

  #[test]
  fn test_io_errors_are_never_equal() {
    let lhs = OutputError::io("greeting")(Error::from(ErrorKind::BrokenPipe));
    let rhs = lhs.clone();

    assert_ne!(lhs, rhs);
  }

  #[test]
  fn test_display_includes_message() {
    let error = OutputError::io("greeting")(Error::from(ErrorKind::BrokenPipe)).wrap();

    assert!(error.to_string().starts_with("greeting: "));
  }
}
