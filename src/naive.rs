use crate::*;

/// Brute-force matcher, tries every alignment and compares left to right.
/// Runtime O(n*m), no preprocessing. Serves as the reference for the other matchers.
pub struct Naive<'a, A> {
  text: &'a [A],
  pattern: &'a [A],
  // 1-based candidate start
  start: usize,
}

impl<'a, A: Eq + 'a> PatternMatcher<'a, A> for Naive<'a, A> {
  fn new(text: &'a [A], pattern: &'a [A]) -> Result<Self, MatchError> {
    check_input(text, pattern)?;
    tracing::debug!(algorithm = "naive", n = text.len(), m = pattern.len(), "starting search");
    Ok(Self { text, pattern, start: 1 })
  }
}

impl<'a, A: Eq> Iterator for Naive<'a, A> {
  type Item = Position;

  fn next(&mut self) -> Option<Position> {
    let m = self.pattern.len();
    while self.start + m <= self.text.len() + 1 {
      let i = self.start;
      self.start += 1;

      let mut j = 0;
      while j < m && self.text[i + j - 1] == self.pattern[j] {
        j += 1;
      }
      if j == m {
        return Some(i);
      }
    }
    None
  }
}

pub fn search<'a, A: Eq>(text: &'a [A], pattern: &'a [A]) -> Result<Naive<'a, A>, MatchError> {
  Naive::new(text, pattern)
}
