// Antiplag: flag suspiciously similar source submissions.
//
// This is the library root. Submissions are resolved to files, normalized,
// scored pairwise by a pluggable checker, and rendered by the output module.

pub mod config;
pub mod error;
pub mod normalize;
pub mod output;
pub mod similarity;
pub mod submissions;

pub use error::CheckerError;
pub use normalize::normalize;
pub use similarity::factory::{create_checker, Strategy};
pub use similarity::traits::{MatchResult, PlagiarismChecker};
pub use submissions::{Diagnostic, SubmissionSet};
