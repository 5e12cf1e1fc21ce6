// Plagiarism checker trait: the swap-ready abstraction.
//
// Callers only ever talk to `dyn PlagiarismChecker`, so a different scoring
// algorithm can be dropped in through the factory without touching the CLI
// or the renderers.

use serde::{Deserialize, Serialize};

use crate::submissions::Diagnostic;

use super::factory::Strategy;

/// One flagged pair of submissions.
///
/// `pair.0` is always the identity that came first in the submission set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub pair: (String, String),
    /// Similarity in [0, 1]
    pub similarity: f64,
}

impl MatchResult {
    /// True if either side of the pair is `identity`.
    pub fn involves(&self, identity: &str) -> bool {
        self.pair.0 == identity || self.pair.1 == identity
    }

    /// The identity on the other side of the pair, if `identity` is in it.
    pub fn partner_of(&self, identity: &str) -> Option<&str> {
        if self.pair.0 == identity {
            Some(self.pair.1.as_str())
        } else if self.pair.1 == identity {
            Some(self.pair.0.as_str())
        } else {
            None
        }
    }
}

/// Trait for flagging similar submissions.
///
/// An instance starts unevaluated. The first call to `results` (or an explicit
/// `evaluate`) runs the comparison; later `results` calls reuse the cache.
/// There is no invalidation: build a new checker if the files change.
pub trait PlagiarismChecker {
    /// Which scoring strategy this checker implements.
    fn strategy(&self) -> Strategy;

    /// Run the comparison now, cache the ranked matches and return them.
    fn evaluate(&mut self) -> &[MatchResult];

    /// Cached matches, or `None` before the first evaluation.
    fn cached(&self) -> Option<&[MatchResult]>;

    /// Warnings collected by the last evaluation (missing files and the like).
    fn diagnostics(&self) -> &[Diagnostic];

    fn is_evaluated(&self) -> bool {
        self.cached().is_some()
    }

    /// Ranked matches, evaluating at most once.
    fn results(&mut self) -> &[MatchResult] {
        if !self.is_evaluated() {
            self.evaluate();
        }
        self.cached().unwrap_or(&[])
    }

    /// Matches that involve `identity`, in ranked order. Unknown identities
    /// simply produce an empty list.
    fn result_for_identity(&mut self, identity: &str) -> Vec<MatchResult> {
        self.results()
            .iter()
            .filter(|m| m.involves(identity))
            .cloned()
            .collect()
    }
}
