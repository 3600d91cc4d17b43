use std::fmt;

use thiserror::Error;

/// Which of the two search inputs a precondition refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
  Text,
  Pattern,
}

impl fmt::Display for Input {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Input::Text => write!(f, "text"),
      Input::Pattern => write!(f, "pattern"),
    }
  }
}

/// Precondition violations, reported before any scanning happens
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
  #[error("the {0} must not be empty")]
  EmptyInput(Input),

  #[error("pattern of length {pattern} is longer than the text of length {text}")]
  InvalidLength { pattern: usize, text: usize },

  #[error("repetition factor {0} is too small, Galil-Seifaras needs at least 4")]
  InvalidRepetitionFactor(usize),

  #[error("unknown algorithm: {0}")]
  UnknownAlgorithm(String),
}
