//! Galil-Seifaras matcher.
//!
//! The pattern is split once into `W = u · v` so that `v` has at most one k-highly-repeating prefix.
//! The text is then scanned for `v` with a recovery rule that needs only that single HRP instead of a
//! table, and every occurrence of `v` is confirmed by comparing the short head `u` directly.
//! Linear time, constant extra space besides the iterator itself.

use crate::*;

pub mod decomposition;
pub mod hrp;

use decomposition::{Decomposition, decompose};
use hrp::Hrp;

/// Repetition factor used by [`GalilSeifaras::new`].
pub const DEFAULT_REPETITIONS: usize = 4;

// the period-skip recovery misses occurrences for smaller factors
const MIN_REPETITIONS: usize = 4;

/// Every occurrence of a pattern `v` that has at most one k-HRP.
/// Positions are 1-based.
pub struct SimpleTextSearch<'a, A> {
  text: &'a [A],
  v: &'a [A],
  hrp: Option<Hrp>,
  k: usize,
  // 0-based start of the current alignment
  position: usize,
  // matched length
  j: usize,
}

impl<'a, A: Eq> SimpleTextSearch<'a, A> {
  pub fn new(text: &'a [A], v: &'a [A], hrp: Option<Hrp>, k: usize) -> Self {
    Self { text, v, hrp, k, position: 0, j: 0 }
  }
}

impl<'a, A: Eq> Iterator for SimpleTextSearch<'a, A> {
  type Item = Position;

  fn next(&mut self) -> Option<Position> {
    let m = self.v.len();
    while self.position + m <= self.text.len() {
      while self.j < m && self.v[self.j] == self.text[self.position + self.j] {
        self.j += 1;
      }
      let found = (self.j == m).then_some(self.position + 1);

      match self.hrp {
        Some(hrp) if hrp.covers(self.j) => {
          self.position += hrp.period;
          self.j -= hrp.period;
        }
        _ => {
          self.position += self.j / self.k + 1;
          self.j = 0;
        }
      }

      if found.is_some() {
        return found;
      }
    }
    None
  }
}

/// Galil-Seifaras matcher, see the module documentation.
pub struct GalilSeifaras<'a, A> {
  text: &'a [A],
  u: &'a [A],
  candidates: SimpleTextSearch<'a, A>,
}

impl<'a, A: Eq> GalilSeifaras<'a, A> {
  /// Searches with repetition factor `k`, which has to be at least 4.
  pub fn with_repetitions(text: &'a [A], pattern: &'a [A], k: usize) -> Result<Self, MatchError> {
    check_input(text, pattern)?;
    if k < MIN_REPETITIONS {
      return Err(MatchError::InvalidRepetitionFactor(k));
    }
    tracing::debug!(algorithm = "galil-seifaras", n = text.len(), m = pattern.len(), k, "starting search");

    let Decomposition { u, v, hrp } = decompose(pattern, k);
    Ok(Self { text, u, candidates: SimpleTextSearch::new(text, v, hrp, k) })
  }
}

impl<'a, A: Eq + 'a> PatternMatcher<'a, A> for GalilSeifaras<'a, A> {
  fn new(text: &'a [A], pattern: &'a [A]) -> Result<Self, MatchError> {
    Self::with_repetitions(text, pattern, DEFAULT_REPETITIONS)
  }
}

impl<'a, A: Eq> Iterator for GalilSeifaras<'a, A> {
  type Item = Position;

  fn next(&mut self) -> Option<Position> {
    let (text, u) = (self.text, self.u);
    let split = u.len();
    // an occurrence of v at p is one of W when u ends right before p
    self.candidates
      .find(|&p| p > split && text[p - 1 - split..p - 1] == *u)
      .map(|p| p - split)
  }
}

pub fn search<'a, A: Eq>(text: &'a [A], pattern: &'a [A]) -> Result<GalilSeifaras<'a, A>, MatchError> {
  GalilSeifaras::new(text, pattern)
}
