pub use language::*;
pub use output::*;

mod language;
mod output;

/// This trait allows for wrapping a given error in a more generic error.
pub trait Wrappable {
  type Wrapper;

  fn wrap(self) -> Self::Wrapper;
}
