// Line sequence checker, scored by matching lines in order.
//
// Where the cosine checker treats a file as a bag of terms, this one keeps
// line order: the ratio is 2 * M / (|A| + |B|), where M is the number of lines
// a line diff keeps unchanged. Reordering statements lowers
// the score; renaming a variable on a line breaks that line's match.

use similar::{ChangeTag, TextDiff};

use crate::error::CheckerError;
use crate::submissions::{Diagnostic, Document, SubmissionSet};

use super::factory::Strategy;
use super::matrix::ScoreMatrix;
use super::state::CheckerState;
use super::traits::{MatchResult, PlagiarismChecker};

/// Flags pairs that share long runs of identical lines.
#[derive(Debug, Clone)]
pub struct SequenceMatcherChecker {
    state: CheckerState,
}

impl SequenceMatcherChecker {
    pub fn new(submissions: SubmissionSet, threshold: f64) -> Result<Self, CheckerError> {
        Ok(Self {
            state: CheckerState::new(submissions, threshold)?,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.state.threshold()
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

/// Line-level similarity ratio in [0, 1].
///
/// Identical texts score 1.0, including two empty ones.
pub fn line_ratio(a: &str, b: &str) -> f64 {
    ratio(&split_lines(a), &split_lines(b))
}

fn ratio(a: &[&str], b: &[&str]) -> f64 {
    if a == b {
        return 1.0;
    }
    let total = a.len() + b.len();
    let diff = TextDiff::from_slices(a, b);
    let matched = diff
        .iter_all_changes()
        .filter(|change| change.tag() == ChangeTag::Equal)
        .count();
    2.0 * matched as f64 / total as f64
}

/// Score every pair of documents by line ratio.
pub fn sequence_matrix(documents: &[Document]) -> ScoreMatrix {
    let lines: Vec<Vec<&str>> = documents.iter().map(|d| split_lines(&d.text)).collect();
    ScoreMatrix::from_pairs(documents.len(), |i, j| ratio(&lines[i], &lines[j]))
}

impl PlagiarismChecker for SequenceMatcherChecker {
    fn strategy(&self) -> Strategy {
        Strategy::SequenceMatcher
    }

    fn evaluate(&mut self) -> &[MatchResult] {
        self.state.run(sequence_matrix)
    }

    fn cached(&self) -> Option<&[MatchResult]> {
        self.state.cached()
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        self.state.diagnostics()
    }
}
