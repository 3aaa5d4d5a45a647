use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::LoadError;

/// Deepest recursion a search may be configured with.
pub const MAX_DEPTH_LIMIT: usize = 10;

/// Branches followed at each state by the Monte Carlo search.
pub const MONTE_CARLO_BRANCHING: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BruteForce,
    MonteCarlo,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::BruteForce
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brute-force" => Ok(Algorithm::BruteForce),
            "monte-carlo" => Ok(Algorithm::MonteCarlo),
            other => Err(format!("unknown algorithm {:?} (expected brute-force or monte-carlo)", other)),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::BruteForce => write!(f, "brute-force"),
            Algorithm::MonteCarlo => write!(f, "monte-carlo"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    #[builder(default)]
    pub algorithm: Algorithm,
    /// Recursion ceiling; clamped into `1..=MAX_DEPTH_LIMIT` when a search starts.
    #[builder(default = 3)]
    pub max_depth: usize,
    #[builder(default = 100)]
    pub max_results: usize,
    /// Reserved. Reverse mode uses the same extension rule as normal mode.
    #[builder(default = false)]
    pub reverse: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions::builder().build()
    }
}

impl SearchOptions {
    pub fn from_file(path: &Path) -> Result<SearchOptions, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// The depth ceiling actually used by a search.
    pub fn effective_depth(&self) -> usize {
        self.max_depth.clamp(1, MAX_DEPTH_LIMIT)
    }
}
