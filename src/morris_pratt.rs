use crate::border::{BorderTable, prefix_suffix};
use crate::*;

/// Left-to-right scan that recovers from a mismatch through a border table.
/// After `j` symbols agreed the alignment moves by `j - B[j]` and the scan resumes with `max(0, B[j])`
/// symbols already matched, so no text symbol is compared twice after a match.
/// Shared by Morris-Pratt (border function) and Knuth-Morris-Pratt (strong border function).
pub struct BorderScan<'a, A> {
  text: &'a [A],
  pattern: &'a [A],
  table: BorderTable,
  // 1-based start of the current alignment
  i: usize,
  // matched length
  j: usize,
  comparisons: usize,
}

impl<'a, A: Eq> BorderScan<'a, A> {
  // the table has to belong to `pattern`, `m + 1` entries
  pub(crate) fn new(text: &'a [A], pattern: &'a [A], table: BorderTable) -> Self {
    debug_assert_eq!(pattern.len() + 1, table.len());
    Self { text, pattern, table, i: 1, j: 0, comparisons: 0 }
  }

  /// Symbol comparisons made so far.
  pub fn comparisons(&self) -> usize {
    self.comparisons
  }
}

impl<'a, A: Eq> Iterator for BorderScan<'a, A> {
  type Item = Position;

  fn next(&mut self) -> Option<Position> {
    let m = self.pattern.len();
    while self.i + m <= self.text.len() + 1 {
      while self.j < m {
        self.comparisons += 1;
        if self.text[self.i + self.j - 1] != self.pattern[self.j] {
          break;
        }
        self.j += 1;
      }

      let (start, matched) = (self.i, self.j);
      self.i += self.table.shift(matched);
      self.j = self.table.resume(matched);
      if matched == m {
        return Some(start);
      }
    }
    None
  }
}

/// Morris-Pratt: linear scan driven by the border function.
/// Runtime O(n + m), O(m) extra space.
pub struct MorrisPratt<'a, A>(BorderScan<'a, A>);

impl<'a, A: Eq> MorrisPratt<'a, A> {
  pub fn comparisons(&self) -> usize {
    self.0.comparisons()
  }
}

impl<'a, A: Eq + 'a> PatternMatcher<'a, A> for MorrisPratt<'a, A> {
  fn new(text: &'a [A], pattern: &'a [A]) -> Result<Self, MatchError> {
    check_input(text, pattern)?;
    tracing::debug!(algorithm = "morris-pratt", n = text.len(), m = pattern.len(), "starting search");
    Ok(Self(BorderScan::new(text, pattern, prefix_suffix(pattern))))
  }
}

impl<'a, A: Eq> Iterator for MorrisPratt<'a, A> {
  type Item = Position;

  fn next(&mut self) -> Option<Position> {
    self.0.next()
  }
}

pub fn search<'a, A: Eq>(text: &'a [A], pattern: &'a [A]) -> Result<MorrisPratt<'a, A>, MatchError> {
  MorrisPratt::new(text, pattern)
}
