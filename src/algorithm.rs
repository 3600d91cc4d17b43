use std::fmt;
use std::str::FromStr;

use crate::crochemore::Crochemore;
use crate::galil_seifaras::GalilSeifaras;
use crate::knuth_morris_pratt::KnuthMorrisPratt;
use crate::morris_pratt::MorrisPratt;
use crate::naive::Naive;
use crate::*;

/// Selects one of the matchers at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  Naive,
  MorrisPratt,
  KnuthMorrisPratt,
  GalilSeifaras,
  Crochemore,
}

impl Algorithm {
  pub const ALL: [Algorithm; 5] = [
    Algorithm::Naive,
    Algorithm::MorrisPratt,
    Algorithm::KnuthMorrisPratt,
    Algorithm::GalilSeifaras,
    Algorithm::Crochemore,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Algorithm::Naive => "naive",
      Algorithm::MorrisPratt => "morris-pratt",
      Algorithm::KnuthMorrisPratt => "knuth-morris-pratt",
      Algorithm::GalilSeifaras => "galil-seifaras",
      Algorithm::Crochemore => "crochemore",
    }
  }

  /// Validates the input, preprocesses the pattern and returns the lazy sequence of 1-based positions.
  pub fn search<'a, A: Ord>(
    self,
    text: &'a [A],
    pattern: &'a [A],
  ) -> Result<Box<dyn Iterator<Item = Position> + 'a>, MatchError> {
    let found: Box<dyn Iterator<Item = Position> + 'a> = match self {
      Algorithm::Naive => Box::new(Naive::new(text, pattern)?),
      Algorithm::MorrisPratt => Box::new(MorrisPratt::new(text, pattern)?),
      Algorithm::KnuthMorrisPratt => Box::new(KnuthMorrisPratt::new(text, pattern)?),
      Algorithm::GalilSeifaras => Box::new(GalilSeifaras::new(text, pattern)?),
      Algorithm::Crochemore => Box::new(Crochemore::new(text, pattern)?),
    };
    Ok(found)
  }

  pub fn find_all<A: Ord>(self, text: &[A], pattern: &[A]) -> Result<Vec<Position>, MatchError> {
    Ok(self.search(text, pattern)?.collect())
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for Algorithm {
  type Err = MatchError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "naive" | "brute-force" => Ok(Algorithm::Naive),
      "morris-pratt" | "mp" => Ok(Algorithm::MorrisPratt),
      "knuth-morris-pratt" | "kmp" => Ok(Algorithm::KnuthMorrisPratt),
      "galil-seifaras" | "gs" => Ok(Algorithm::GalilSeifaras),
      "crochemore" => Ok(Algorithm::Crochemore),
      _ => Err(MatchError::UnknownAlgorithm(s.to_string())),
    }
  }
}
