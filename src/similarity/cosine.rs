// TF-IDF cosine similarity checker, the default strategy.

use tracing::debug;

use crate::error::CheckerError;
use crate::submissions::{Diagnostic, Document, SubmissionSet};

use super::factory::Strategy;
use super::matrix::ScoreMatrix;
use super::state::CheckerState;
use super::tfidf::{cosine_similarity, TfIdfVectorizer};
use super::traits::{MatchResult, PlagiarismChecker};

/// Flags pairs whose TF-IDF vectors point in nearly the same direction.
#[derive(Debug, Clone)]
pub struct CosineSimilarityChecker {
    state: CheckerState,
}

impl CosineSimilarityChecker {
    pub fn new(submissions: SubmissionSet, threshold: f64) -> Result<Self, CheckerError> {
        Ok(Self {
            state: CheckerState::new(submissions, threshold)?,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.state.threshold()
    }
}

/// Vectorize the batch together and score every pair by cosine similarity.
///
/// A pair with no terms at all scores 0.0 unless the two texts are equal.
pub fn cosine_matrix(documents: &[Document]) -> ScoreMatrix {
    let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
    let (vectorizer, vectors) = TfIdfVectorizer::fit_transform(&texts);
    debug!(
        documents = texts.len(),
        vocabulary = vectorizer.vocabulary_len(),
        "Fitted TF-IDF vectorizer"
    );

    // Identical texts score 1.0 even when they carry no terms.
    ScoreMatrix::from_pairs(vectors.len(), |i, j| {
        if texts[i] == texts[j] {
            1.0
        } else {
            cosine_similarity(&vectors[i], &vectors[j])
        }
    })
}

impl PlagiarismChecker for CosineSimilarityChecker {
    fn strategy(&self) -> Strategy {
        Strategy::CosineSimilarity
    }

    fn evaluate(&mut self) -> &[MatchResult] {
        self.state.run(cosine_matrix)
    }

    fn cached(&self) -> Option<&[MatchResult]> {
        self.state.cached()
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        self.state.diagnostics()
    }
}
