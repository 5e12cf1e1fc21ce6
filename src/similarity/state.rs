// Evaluation state shared by every checker.
//
// Holds the inputs, the compute-once result cache and the diagnostics of the
// last run. Checkers supply only the matrix-building step.

use tracing::{debug, info};

use crate::error::CheckerError;
use crate::submissions::{load_documents, Diagnostic, Document, SubmissionSet};

use super::matrix::{rank_matches, ScoreMatrix};
use super::traits::MatchResult;

#[derive(Debug, Clone)]
pub struct CheckerState {
    submissions: SubmissionSet,
    threshold: f64,
    results: Option<Vec<MatchResult>>,
    diagnostics: Vec<Diagnostic>,
}

impl CheckerState {
    /// Validate the threshold and start unevaluated.
    pub fn new(submissions: SubmissionSet, threshold: f64) -> Result<Self, CheckerError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CheckerError::InvalidThreshold(threshold));
        }
        Ok(Self {
            submissions,
            threshold,
            results: None,
            diagnostics: Vec::new(),
        })
    }

    pub fn submissions(&self) -> &SubmissionSet {
        &self.submissions
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn cached(&self) -> Option<&[MatchResult]> {
        self.results.as_deref()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Load, score with `build_matrix`, rank, and cache.
    ///
    /// `build_matrix` only ever sees two or more documents.
    pub fn run(&mut self, build_matrix: impl FnOnce(&[Document]) -> ScoreMatrix) -> &[MatchResult] {
        let (documents, mut diagnostics) = load_documents(&self.submissions);

        let ranked = if documents.len() < 2 {
            debug!(documents = documents.len(), "Not enough files to compare");
            diagnostics.push(Diagnostic::InsufficientData {
                documents: documents.len(),
            });
            Vec::new()
        } else {
            let matrix = build_matrix(&documents);
            let identities: Vec<String> = documents.iter().map(|d| d.identity.clone()).collect();
            let ranked = rank_matches(&identities, &matrix, self.threshold);
            for m in &ranked {
                info!(
                    first = %m.pair.0,
                    second = %m.pair.1,
                    similarity = m.similarity,
                    "Potential plagiarism"
                );
            }
            ranked
        };

        info!(
            compared = documents.len(),
            flagged = ranked.len(),
            threshold = self.threshold,
            "Comparison complete"
        );

        self.diagnostics = diagnostics;
        self.results.insert(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_threshold() {
        assert!(CheckerState::new(SubmissionSet::new(), 1.5).is_err());
        assert!(CheckerState::new(SubmissionSet::new(), -0.1).is_err());
        assert!(CheckerState::new(SubmissionSet::new(), f64::NAN).is_err());
        assert!(CheckerState::new(SubmissionSet::new(), 0.0).is_ok());
        assert!(CheckerState::new(SubmissionSet::new(), 1.0).is_ok());
    }

    #[test]
    fn test_empty_set_records_insufficient_data() {
        let mut state = CheckerState::new(SubmissionSet::new(), 0.5).unwrap();
        let results = state.run(|_| unreachable!("no documents to score"));
        assert!(results.is_empty());
        assert!(state.cached().is_some());
        assert_eq!(
            state.diagnostics(),
            &[Diagnostic::InsufficientData { documents: 0 }]
        );
    }
}
