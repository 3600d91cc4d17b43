//! Border functions of a pattern.
//!
//! A border of a string is a proper prefix that is also a suffix. Tables are indexed by prefix length,
//! `0..=m`, and entry 0 holds the sentinel `-1` so that a scan that matched nothing still advances.

/// Border lengths of every prefix of a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderTable {
  borders: Vec<isize>,
}

impl BorderTable {
  pub fn get(&self, len: usize) -> isize {
    self.borders[len]
  }

  /// number of entries, `m + 1` for a non-empty pattern
  pub fn len(&self) -> usize {
    self.borders.len()
  }

  pub fn is_empty(&self) -> bool {
    self.borders.is_empty()
  }

  pub fn as_slice(&self) -> &[isize] {
    &self.borders
  }

  /// How far the alignment moves after `matched` symbols agreed, always at least 1.
  pub fn shift(&self, matched: usize) -> usize {
    (matched as isize - self.borders[matched]) as usize
  }

  /// Matched length to resume with after the shift.
  pub fn resume(&self, matched: usize) -> usize {
    self.borders[matched].max(0) as usize
  }
}

// computes the border function B of the pattern
// B[l] is the length of the longest border of W[1..l]
// runtime O(m)
pub fn prefix_suffix<A: Eq>(pattern: &[A]) -> BorderTable {
  if pattern.is_empty() {
    return BorderTable { borders: vec![] };
  }
  tracing::trace!(m = pattern.len(), "computing border table");

  // kmp stores the border of W[1..l] at index l - 1
  let lsp = kmp::kmp_table(pattern);
  let mut borders = Vec::with_capacity(pattern.len() + 1);
  borders.push(-1);
  borders.extend(lsp.into_iter().map(|b| b as isize));
  BorderTable { borders }
}

// computes the strong border function sB of the pattern
// a border b of W[1..l] is skipped when W[b+1] = W[l+1], since it would fail on the same text symbol
// runtime O(m)
pub fn strong_prefix_suffix<A: Eq>(pattern: &[A]) -> BorderTable {
  let weak = prefix_suffix(pattern);
  if weak.is_empty() {
    return weak;
  }
  tracing::trace!(m = pattern.len(), "computing strong border table");

  let m = pattern.len();
  let mut borders = vec![0; m + 1];
  borders[0] = -1;
  for len in 1..m {
    let b = weak.get(len) as usize;
    borders[len] = if pattern[b] != pattern[len] { b as isize } else { borders[b] };
  }
  borders[m] = weak.get(m);
  BorderTable { borders }
}
