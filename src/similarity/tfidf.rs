// TF-IDF vectorization and cosine similarity.
//
// The whole batch is fitted at once: inverse document frequency depends on
// every document, so a term shared by most submissions (`function`, `return`)
// counts for little while a rare identifier counts for a lot.
//
// Weighting:
//   tf(t, d)  = raw count of t in d
//   idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//   w(t, d)   = tf * idf, then each document vector is scaled to unit length
//
// Vectors are sparse (term index, weight) lists sorted by term index, so the
// dot product is a merge over two sorted lists.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

/// Runs of two or more Unicode word characters, so `světe` stays one term.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap_or_else(|_| panic!("Invalid token regex")));

/// Split text into lowercase terms. Deterministic for identical input.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// A sparse weight vector: `(term index, weight)` sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&(_, w)| w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ti, wi) = self.entries[i];
            let (tj, wj) = other.entries[j];
            match ti.cmp(&tj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wi * wj;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Cosine of the angle between two vectors, clamped to [0, 1].
///
/// A zero vector has no direction; its similarity with anything is 0.0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(0.0, 1.0)
}

/// Vocabulary and IDF weights learned from one batch of documents.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    /// term -> dimension index, in lexical order
    vocabulary: BTreeMap<String, usize>,
    /// IDF weight per dimension
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Learn vocabulary and IDF from the batch.
    pub fn fit(documents: &[&str]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();
        Self::fit_tokenized(&tokenized)
    }

    fn fit_tokenized(tokenized: &[Vec<String>]) -> Self {
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for tokens in tokenized {
            let unique: BTreeSet<&String> = tokens.iter().collect();
            for term in unique {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let n = tokenized.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (idx, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        Self { vocabulary, idf }
    }

    /// Fit on the batch and return one unit-length vector per document.
    pub fn fit_transform(documents: &[&str]) -> (Self, Vec<SparseVector>) {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();
        let vectorizer = Self::fit_tokenized(&tokenized);
        let vectors = tokenized
            .iter()
            .map(|tokens| vectorizer.vectorize(tokens))
            .collect();
        (vectorizer, vectors)
    }

    /// Weight a document against the fitted vocabulary.
    ///
    /// Terms never seen during fitting are ignored.
    pub fn transform(&self, document: &str) -> SparseVector {
        self.vectorize(&tokenize(document))
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Dimension index of a term, if it is in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    fn vectorize(&self, tokens: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf as f64 * self.idf[idx]))
            .collect();

        let norm = entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }

        SparseVector { entries }
    }
}
