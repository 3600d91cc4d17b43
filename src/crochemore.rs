//! Crochemore matcher.
//!
//! No table is built. While scanning, the matcher maintains the maximal suffix of the part of the
//! pattern matched so far extended by the text symbol that ended the match, together with its period.
//! That is enough to compute a shift that skips no occurrence, in linear time and constant extra space.

use std::cmp::{Ordering, max, min};

use crate::*;

/// Incremental state of the maximal suffix computation over a string `x[1..len]`.
/// The maximal suffix starts at `i + 1`, `j` the position being compared, `k` the offset inside the current period
/// and `p` the period of the maximal suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaximalSuffix {
  pub i: usize,
  pub j: usize,
  pub k: usize,
  pub p: usize,
}

impl Default for MaximalSuffix {
  fn default() -> Self {
    Self::new()
  }
}

impl MaximalSuffix {
  pub const fn new() -> Self {
    MaximalSuffix { i: 0, j: 1, k: 1, p: 1 }
  }

  pub fn reset(&mut self) {
    *self = Self::new();
  }

  // continues the computation over a string that extends the one seen so far
  // `x` is 1-based and defined on 1..=len
  pub fn extend<'x, A: Ord + 'x>(&mut self, x: impl Fn(usize) -> &'x A, len: usize) {
    let MaximalSuffix { mut i, mut j, mut k, mut p } = *self;
    while j + k <= len {
      match x(i + k).cmp(x(j + k)) {
        Ordering::Equal => {
          if k == p {
            j += p;
            k = 1;
          } else {
            k += 1;
          }
        }
        Ordering::Greater => {
          j += k;
          k = 1;
          p = j - i;
        }
        Ordering::Less => {
          i = j;
          j = i + 1;
          k = 1;
          p = 1;
        }
      }
    }
    *self = MaximalSuffix { i, j, k, p };
  }
}

/// Crochemore matcher, see the module documentation.
pub struct Crochemore<'a, A> {
  text: &'a [A],
  pattern: &'a [A],
  // 0-based start of the current alignment
  t_pos: usize,
  // 1-based index of the next pattern symbol to compare
  w_pos: usize,
  suffix: MaximalSuffix,
  finished: bool,
}

impl<'a, A: Ord + 'a> PatternMatcher<'a, A> for Crochemore<'a, A> {
  fn new(text: &'a [A], pattern: &'a [A]) -> Result<Self, MatchError> {
    check_input(text, pattern)?;
    tracing::debug!(algorithm = "crochemore", n = text.len(), m = pattern.len(), "starting search");
    Ok(Self { text, pattern, t_pos: 0, w_pos: 1, suffix: MaximalSuffix::new(), finished: false })
  }
}

impl<'a, A: Ord> Crochemore<'a, A> {
  // moves the alignment after the symbols before w_pos matched and the one at w_pos did not
  // (or the whole pattern matched and w_pos = m + 1)
  fn shift(&mut self) {
    let (text, pattern) = (self.text, self.pattern);
    let (t_pos, w_pos) = (self.t_pos, self.w_pos);

    // x = W[1..w_pos) · T[t_pos + w_pos]
    let x = |idx: usize| if idx < w_pos { &pattern[idx - 1] } else { &text[t_pos + w_pos - 1] };
    self.suffix.extend(x, w_pos);
    let MaximalSuffix { i, j, p, .. } = self.suffix;

    // x = u · s with |u| = i and s the maximal suffix, check whether u is a suffix of s[1..p]
    let head = min(p, w_pos - i);
    let periodic = i <= head && itertools::equal((head + 1..=head + i).map(x), &pattern[..i]);

    if periodic {
      self.t_pos += p;
      self.w_pos = w_pos - p + 1;
      if j - i > p {
        self.suffix.j -= p;
      } else {
        self.suffix.reset();
      }
    } else {
      self.t_pos += max(i, min(w_pos - i, j)) + 1;
      self.w_pos = 1;
      self.suffix.reset();
    }
  }
}

impl<'a, A: Ord> Iterator for Crochemore<'a, A> {
  type Item = Position;

  fn next(&mut self) -> Option<Position> {
    let (n, m) = (self.text.len(), self.pattern.len());
    while !self.finished && self.t_pos + m <= n {
      while self.w_pos <= m && self.text[self.t_pos + self.w_pos - 1] == self.pattern[self.w_pos - 1] {
        self.w_pos += 1;
      }
      let found = (self.w_pos == m + 1).then_some(self.t_pos + 1);

      if self.t_pos + m == n {
        self.finished = true;
        return found;
      }
      self.shift();

      if found.is_some() {
        return found;
      }
    }
    None
  }
}

pub fn search<'a, A: Ord>(text: &'a [A], pattern: &'a [A]) -> Result<Crochemore<'a, A>, MatchError> {
  Crochemore::new(text, pattern)
}

#[cfg(test)]
mod tests {
  use test_case::test_case;
  use super::*;

  fn maximal_suffix(s: &str) -> MaximalSuffix {
    let x = s.as_bytes();
    let mut suffix = MaximalSuffix::new();
    suffix.extend(|idx| &x[idx - 1], x.len());
    suffix
  }

  #[test_case("a", 0, 1)]
  #[test_case("ab", 1, 1)]
  #[test_case("ba", 0, 2)]
  #[test_case("abcabc", 2, 3)]
  #[test_case("abab", 1, 2)]
  #[test_case("cbcbca", 0, 6)]
  #[test_case("cbcbcb", 0, 2)]
  fn test_maximal_suffix(s: &str, start: usize, period: usize) {
    let suffix = maximal_suffix(s);
    assert_eq!((start, period), (suffix.i, suffix.p));
    assert!(suffix.i < suffix.j);
  }

  #[test]
  fn maximal_suffix_is_greatest() {
    for s in ["banana", "abracadabra", "zzyzz", "aabaabaaa", "mississippi"] {
      let i = maximal_suffix(s).i;
      assert!((0..s.len()).all(|other| s[other..] <= s[i..]), "{}", s);
    }
  }

  #[test_case("abababab", "abab", vec![1, 3, 5])]
  #[test_case("aaaaa", "aa", vec![1, 2, 3, 4])]
  #[test_case("abcdef", "xyz", vec![] ; "no occ")]
  #[test_case("aabaabaaaabaab", "aabaa", vec![1, 4, 9])]
  #[test_case("cbacbacba", "cba", vec![1, 4, 7] ; "decreasing pattern")]
  #[test_case("babbabbab", "abbab", vec![2, 5])]
  #[test_case("zz", "zz", vec![1] ; "whole text")]
  fn simple(text: &str, pattern: &str, expected: Vec<Position>) {
    let found: Vec<_> = search(text.as_bytes(), pattern.as_bytes()).unwrap().collect();
    assert_eq!(expected, found);
  }

  #[test]
  fn works_on_any_ordered_symbols() {
    let text = [3u32, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 1, 4, 1, 5];
    let found: Vec<_> = search(&text[..], &[1u32, 4, 1, 5][..]).unwrap().collect();
    assert_eq!(vec![2, 12], found);
  }
}
