//! Single-pattern exact string matching.
//! Every matcher reports the 1-based start positions of all (possibly overlapping) occurrences of a
//! pattern `W` in a text `T`, lazily and from left to right.
//!
//! Available algorithms: the naive scan, Morris-Pratt, Knuth-Morris-Pratt, Galil-Seifaras and Crochemore.
//! All of them return the same positions for the same input, they differ only in time and memory.
//!
//! ```
//! use exact_string_matching::{Algorithm, PatternMatcher, crochemore::Crochemore};
//!
//! let found: Vec<_> = Crochemore::new("abababab".as_bytes(), "abab".as_bytes()).unwrap().collect();
//! assert_eq!(found, vec![1, 3, 5]);
//! assert_eq!(Algorithm::GalilSeifaras.find_all(b"aaaaa", b"aa").unwrap(), vec![1, 2, 3, 4]);
//! ```
//!
//! The text and the pattern are borrowed for the lifetime of a search, so they cannot change while a scan
//! is running. Searches keep all of their state inside the returned iterator and can run on any thread.

mod algorithm;
pub mod border;
pub mod crochemore;
mod error;
pub mod galil_seifaras;
pub mod knuth_morris_pratt;
pub mod morris_pratt;
pub mod naive;

#[cfg(test)]
mod tests;

pub use algorithm::Algorithm;
pub use error::{Input, MatchError};

/// A 1-based start position of an occurrence in the text.
pub type Position = usize;

pub trait PatternMatcher<'a, A: 'a>: Iterator<Item = Position> + Sized {
  // validates the input and does all pattern preprocessing
  // nothing is scanned before the first call to `next`
  fn new(text: &'a [A], pattern: &'a [A]) -> Result<Self, MatchError>;
}

// the preconditions shared by all matchers: 1 <= m <= n
pub(crate) fn check_input<A>(text: &[A], pattern: &[A]) -> Result<(), MatchError> {
  if text.is_empty() {
    return Err(MatchError::EmptyInput(Input::Text));
  }
  if pattern.is_empty() {
    return Err(MatchError::EmptyInput(Input::Pattern));
  }
  if pattern.len() > text.len() {
    return Err(MatchError::InvalidLength { pattern: pattern.len(), text: text.len() });
  }
  Ok(())
}
