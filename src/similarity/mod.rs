// Similarity scoring: swappable checkers behind one trait.
//
// Every checker loads and normalizes the same submission set, builds a
// pairwise score matrix with its own algorithm, then filters by threshold and
// ranks. Only the matrix step differs between strategies.

pub mod cosine;
pub mod factory;
pub mod matrix;
pub mod sequence;
pub mod state;
pub mod tfidf;
pub mod traits;

/// Similarity a pair must strictly exceed to be reported, unless configured.
pub const DEFAULT_THRESHOLD: f64 = 0.85;
