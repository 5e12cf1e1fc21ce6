// Strategy selection: build a checker from a named strategy identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CheckerError;
use crate::submissions::SubmissionSet;

use super::cosine::CosineSimilarityChecker;
use super::sequence::SequenceMatcherChecker;
use super::traits::PlagiarismChecker;

/// Which scoring algorithm a checker uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// TF-IDF vectors compared by cosine similarity (default)
    #[default]
    CosineSimilarity,
    /// Longest common subsequence of normalized lines
    SequenceMatcher,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::CosineSimilarity, Strategy::SequenceMatcher];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::CosineSimilarity => "cosine_similarity",
            Strategy::SequenceMatcher => "sequence_matcher",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = CheckerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| CheckerError::UnsupportedStrategy(s.to_string()))
    }
}

/// Build a checker for `strategy`.
///
/// Fails for unknown strategy identifiers and thresholds outside [0, 1];
/// no checker exists in either case.
pub fn create_checker(
    strategy: &str,
    submissions: SubmissionSet,
    threshold: f64,
) -> Result<Box<dyn PlagiarismChecker>, CheckerError> {
    let strategy: Strategy = strategy.parse()?;
    info!(%strategy, threshold, submissions = submissions.len(), "Creating checker");

    match strategy {
        Strategy::CosineSimilarity => Ok(Box::new(CosineSimilarityChecker::new(
            submissions,
            threshold,
        )?)),
        Strategy::SequenceMatcher => Ok(Box::new(SequenceMatcherChecker::new(
            submissions,
            threshold,
        )?)),
    }
}
