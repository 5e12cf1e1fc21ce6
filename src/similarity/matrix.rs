// Pairwise score matrix and threshold ranking.
//
// Shared by every strategy: the scorer fills the matrix, this module turns it
// into the ranked list of pairs that strictly exceed the threshold.

use std::cmp::Ordering;

use super::traits::MatchResult;

/// Square, symmetric matrix of pairwise similarity scores.
///
/// Indexed by position in the ordered document list. The diagonal is 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl ScoreMatrix {
    /// Build a matrix by scoring each unordered pair once.
    ///
    /// `score(i, j)` is only called with `i < j`; the result is mirrored so
    /// the matrix is exactly symmetric.
    pub fn from_pairs(size: usize, mut score: impl FnMut(usize, usize) -> f64) -> Self {
        let mut scores = vec![0.0; size * size];
        for i in 0..size {
            scores[i * size + i] = 1.0;
            for j in (i + 1)..size {
                let s = score(i, j);
                scores[i * size + j] = s;
                scores[j * size + i] = s;
            }
        }
        Self { size, scores }
    }

    /// Number of documents (rows).
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Score for documents `i` and `j`. Panics if either is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "index out of range");
        self.scores[i * self.size + j]
    }
}

/// Collect every pair scoring strictly above `threshold`, best first.
///
/// Pairs are discovered with the outer index ascending and the inner index
/// ascending; the sort is stable, so equal scores keep that order.
pub fn rank_matches(
    identities: &[String],
    matrix: &ScoreMatrix,
    threshold: f64,
) -> Vec<MatchResult> {
    debug_assert_eq!(identities.len(), matrix.len());

    let mut matches = Vec::new();
    for i in 0..matrix.len() {
        for j in (i + 1)..matrix.len() {
            let similarity = matrix.get(i, j);
            if similarity > threshold {
                matches.push(MatchResult {
                    pair: (identities[i].clone(), identities[j].clone()),
                    similarity,
                });
            }
        }
    }

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matrix_is_symmetric_with_unit_diagonal() {
        let m = ScoreMatrix::from_pairs(3, |i, j| (i + j) as f64 / 10.0);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 1.0);
            for j in 0..3 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert!((m.get(1, 2) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_is_strict() {
        let m = ScoreMatrix::from_pairs(2, |_, _| 0.85);
        assert!(rank_matches(&ids(&["a", "b"]), &m, 0.85).is_empty());
        assert_eq!(rank_matches(&ids(&["a", "b"]), &m, 0.849).len(), 1);
    }

    #[test]
    fn test_ranked_descending_ties_keep_discovery_order() {
        // (a,b)=0.9 (a,c)=0.95 (b,c)=0.9
        let scores = [[1.0, 0.9, 0.95], [0.9, 1.0, 0.9], [0.95, 0.9, 1.0]];
        let m = ScoreMatrix::from_pairs(3, |i, j| scores[i][j]);
        let ranked = rank_matches(&ids(&["a", "b", "c"]), &m, 0.5);

        let pairs: Vec<(&str, &str)> = ranked
            .iter()
            .map(|r| (r.pair.0.as_str(), r.pair.1.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "c"), ("a", "b"), ("b", "c")]);
    }

    #[test]
    fn test_pair_follows_input_order_not_lexical() {
        let m = ScoreMatrix::from_pairs(2, |_, _| 0.99);
        let ranked = rank_matches(&ids(&["zed", "amy"]), &m, 0.5);
        assert_eq!(ranked[0].pair, ("zed".to_string(), "amy".to_string()));
    }
}
