use super::hrp::{Hrp, get_first_hrp, get_second_hrp};

/// Perfect decomposition `W = u · v` where `v` has at most one k-HRP.
/// Both halves borrow from the pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decomposition<'a, A> {
  pub u: &'a [A],
  pub v: &'a [A],
  /// the only k-HRP of `v`, if it has one
  pub hrp: Option<Hrp>,
}

impl<'a, A> Decomposition<'a, A> {
  /// Length of `u`, i.e. the position in `W` where `v` starts.
  pub fn split(&self) -> usize {
    self.u.len()
  }
}

// moves the split point forward by the period of the first HRP of the remaining suffix for as
// long as that suffix is known to have two HRPs
// `known` is the first HRP of the last suffix seen with two of them, the suffix is only rescanned for
// a second HRP once the period of its first HRP has reached that one
pub fn decompose<A: PartialEq>(pattern: &[A], k: usize) -> Decomposition<'_, A> {
  let mut j = 0;
  let mut hrp1 = get_first_hrp(pattern, k);
  let mut known = get_second_hrp(pattern, k).and(hrp1);

  while let (Some(first), Some(witness)) = (hrp1, known) {
    j += first.period;
    hrp1 = get_first_hrp(&pattern[j..], k);
    if let Some(next) = hrp1 {
      if next.period >= witness.period {
        known = get_second_hrp(&pattern[j..], k).and(hrp1);
      }
    }
  }

  let (u, v) = pattern.split_at(j);
  tracing::debug!(u = u.len(), v = v.len(), hrp = ?hrp1, "perfect decomposition");
  Decomposition { u, v, hrp: hrp1 }
}
