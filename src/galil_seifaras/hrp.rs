//! Highly repeating prefixes.
//!
//! A prefix of the pattern is a k-HRP when its basic period fits into it at least k times.

/// A k-highly-repeating prefix found by [`find_first_hrps`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hrp {
  pub period: usize,
  /// (low, high): the prefix of length `high` has period `period`, `low` is twice the period
  pub scope: (usize, usize),
}

impl Hrp {
  /// Whether a match of length `j` can be resumed by shifting one period.
  pub fn covers(&self, j: usize) -> bool {
    2 * self.scope.0 <= j && j <= self.scope.1
  }
}

// finds up to `limit` k-HRPs of the pattern, in the order of increasing period
// the candidate period only moves forward: by the period of an already found HRP when the extension
// falls into its scope, otherwise by j / k + 1
// k has no upper bound, a k-th power longer than usize::MAX simply never fits in the prefix
// runtime O(m)
pub fn find_first_hrps<A: PartialEq>(pattern: &[A], k: usize, limit: usize) -> Vec<Hrp> {
  if limit == 0 {
    return vec![];
  }
  let m = pattern.len();
  let mut hrps: Vec<Hrp> = Vec::with_capacity(limit);
  let (mut period, mut j) = (1, 0);

  while period + j < m {
    while period + j < m && pattern[j] == pattern[period + j] {
      j += 1;
    }
    let prefix_len = period + j;

    if period.checked_mul(k).is_some_and(|power_len| power_len <= prefix_len) {
      hrps.push(Hrp { period, scope: (2 * period, prefix_len) });
      if hrps.len() == limit {
        return hrps;
      }
    }

    match hrps.iter().find(|hrp| hrp.covers(j)) {
      Some(hrp) => {
        period += hrp.period;
        j -= hrp.period;
      }
      None => {
        period += j / k + 1;
        j = 0;
      }
    }
  }
  hrps
}

pub fn get_first_hrp<A: PartialEq>(pattern: &[A], k: usize) -> Option<Hrp> {
  find_first_hrps(pattern, k, 1).first().copied()
}

pub fn get_second_hrp<A: PartialEq>(pattern: &[A], k: usize) -> Option<Hrp> {
  find_first_hrps(pattern, k, 2).get(1).copied()
}
