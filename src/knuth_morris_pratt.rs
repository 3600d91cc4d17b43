use crate::border::strong_prefix_suffix;
use crate::morris_pratt::BorderScan;
use crate::*;

/// Knuth-Morris-Pratt: the Morris-Pratt scan with the strong border function,
/// which skips the borders that would fail again on the same text symbol.
pub struct KnuthMorrisPratt<'a, A>(BorderScan<'a, A>);

impl<'a, A: Eq> KnuthMorrisPratt<'a, A> {
  pub fn comparisons(&self) -> usize {
    self.0.comparisons()
  }
}

impl<'a, A: Eq + 'a> PatternMatcher<'a, A> for KnuthMorrisPratt<'a, A> {
  fn new(text: &'a [A], pattern: &'a [A]) -> Result<Self, MatchError> {
    check_input(text, pattern)?;
    tracing::debug!(algorithm = "knuth-morris-pratt", n = text.len(), m = pattern.len(), "starting search");
    Ok(Self(BorderScan::new(text, pattern, strong_prefix_suffix(pattern))))
  }
}

impl<'a, A: Eq> Iterator for KnuthMorrisPratt<'a, A> {
  type Item = Position;

  fn next(&mut self) -> Option<Position> {
    self.0.next()
  }
}

pub fn search<'a, A: Eq>(text: &'a [A], pattern: &'a [A]) -> Result<KnuthMorrisPratt<'a, A>, MatchError> {
  KnuthMorrisPratt::new(text, pattern)
}
