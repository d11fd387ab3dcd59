use std::error::Error;
use std::fmt::{self, Display};

use super::*;

#[derive(PartialEq, Debug, Clone)]
pub enum PrimerError {
  Output(OutputError),
}

impl Display for PrimerError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | PrimerError::Output(error) => write!(f, "{error}"),
    }
  }
}

impl Error for PrimerError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      | PrimerError::Output(OutputError::IO { error, .. }) => Some(error.as_ref()),
    }
  }
}

impl From<OutputError> for PrimerError {
  fn from(error: OutputError) -> Self {
    error.wrap()
  }
}
