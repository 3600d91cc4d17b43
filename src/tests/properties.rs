use proptest::prelude::*;

use crate::border::{prefix_suffix, strong_prefix_suffix};
use crate::galil_seifaras::{decomposition::decompose, hrp::find_first_hrps, DEFAULT_REPETITIONS};
use crate::knuth_morris_pratt::KnuthMorrisPratt;
use crate::morris_pratt::MorrisPratt;
use crate::*;

fn symbol() -> impl Strategy<Value = u8> {
  prop::sample::select(vec![b'a', b'b', b'c'])
}

/// Patterns with a short period, so that HRPs and long borders show up.
fn periodic_pattern() -> impl Strategy<Value = Vec<u8>> {
  (prop::collection::vec(symbol(), 1..4), 1usize..12, prop::option::of(symbol())).prop_map(|(base, reps, tail)| {
    let mut pattern = base.repeat(reps);
    pattern.extend(tail);
    pattern
  })
}

/// A pattern and a text glued together from prefixes of the pattern and single symbols.
fn text_and_pattern() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
  periodic_pattern()
    .prop_flat_map(|pattern| {
      let pieces = prop::collection::vec((0..=pattern.len(), symbol()), 1..8);
      (Just(pattern), pieces)
    })
    .prop_map(|(pattern, pieces)| {
      let mut text = vec![];
      for (len, separator) in pieces {
        text.extend_from_slice(&pattern[..len]);
        text.push(separator);
      }
      text.extend_from_slice(&pattern);
      (text, pattern)
    })
}

/// Longest proper border by trying every length.
fn brute_force_border(s: &[u8]) -> isize {
  (0..s.len()).rev().find(|&b| s[..b] == s[s.len() - b..]).map_or(-1, |b| b as isize)
}

proptest! {
  /// Every matcher reports exactly what the naive scan reports.
  #[test]
  fn prop_oracle_equivalence((text, pattern) in text_and_pattern()) {
    let expected: Vec<_> = naive::search(&text, &pattern).unwrap().collect();
    prop_assert!(!expected.is_empty());
    for algorithm in Algorithm::ALL {
      prop_assert_eq!(&expected, &algorithm.find_all(&text, &pattern).unwrap(), "{}", algorithm);
    }
  }

  /// Same as above for unrelated random inputs, where most searches find nothing.
  #[test]
  fn prop_oracle_equivalence_random(
    text in prop::collection::vec(symbol(), 1..60),
    pattern in prop::collection::vec(symbol(), 1..6),
  ) {
    prop_assume!(pattern.len() <= text.len());
    let expected: Vec<_> = naive::search(&text, &pattern).unwrap().collect();
    for algorithm in Algorithm::ALL {
      prop_assert_eq!(&expected, &algorithm.find_all(&text, &pattern).unwrap(), "{}", algorithm);
    }
  }

  /// B[l] is the longest proper border of W[1..l], and agrees with the kmp crate.
  #[test]
  fn prop_border_correctness(pattern in periodic_pattern()) {
    let table = prefix_suffix(&pattern);
    let lsp = kmp::kmp_table(&pattern[..]);
    prop_assert_eq!(-1, table.get(0));
    for len in 1..=pattern.len() {
      prop_assert_eq!(brute_force_border(&pattern[..len]), table.get(len));
      prop_assert_eq!(lsp[len - 1] as isize, table.get(len));
    }
  }

  /// Strong borders never exceed borders, and KMP never compares more than Morris-Pratt.
  #[test]
  fn prop_strong_border_dominance((text, pattern) in text_and_pattern()) {
    let weak = prefix_suffix(&pattern);
    let strong = strong_prefix_suffix(&pattern);
    for len in 0..=pattern.len() {
      prop_assert!(strong.get(len) <= weak.get(len));
    }

    let mut mp = MorrisPratt::new(&text[..], &pattern[..]).unwrap();
    let mut kmp = KnuthMorrisPratt::new(&text[..], &pattern[..]).unwrap();
    prop_assert_eq!(mp.by_ref().count(), kmp.by_ref().count());
    prop_assert!(kmp.comparisons() <= mp.comparisons());
  }

  /// W = u · v and v has at most one HRP.
  #[test]
  fn prop_decomposition_validity(pattern in periodic_pattern()) {
    let d = decompose(&pattern, DEFAULT_REPETITIONS);
    prop_assert_eq!(&pattern, &[d.u, d.v].concat());
    prop_assert!(!d.v.is_empty());
    prop_assert!(find_first_hrps(d.v, DEFAULT_REPETITIONS, 2).len() <= 1);
    prop_assert_eq!(d.hrp, find_first_hrps(d.v, DEFAULT_REPETITIONS, 1).first().copied());
  }

  /// A second search over the same input yields the same positions in the same order.
  #[test]
  fn prop_restartable((text, pattern) in text_and_pattern()) {
    for algorithm in Algorithm::ALL {
      let first: Vec<_> = algorithm.search(&text, &pattern).unwrap().collect();
      let second: Vec<_> = algorithm.search(&text, &pattern).unwrap().collect();
      prop_assert_eq!(first, second);
    }
  }
}
