//! Pairwise cosine similarity matrix
//!
//! Built once from the feature table after the catalog loads. O(n²·d) for
//! n drinks and d = 5 feature dimensions; for catalogs in the hundreds this
//! is a one-time in-memory computation, no indexing structures needed.

use crate::Vector;

/// Symmetric square matrix of pairwise cosine similarity scores.
///
/// Row/column indexes are catalog drink positions. Diagonal entries equal
/// 1.0 for nonzero feature vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute all pairwise scores. Pure function of its input.
    #[must_use]
    pub fn from_vectors(vectors: &[Vector]) -> Self {
        let n = vectors.len();
        let mut scores = vec![0.0; n * n];

        for i in 0..n {
            scores[i * n + i] = vectors[i].cosine_similarity(&vectors[i]);
            for j in (i + 1)..n {
                let score = vectors[i].cosine_similarity(&vectors[j]);
                scores[i * n + j] = score;
                scores[j * n + i] = score;
            }
        }

        Self { n, scores }
    }

    /// Number of drinks the matrix was built over
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity of drinks at positions `i` and `j`
    #[must_use]
    pub fn score(&self, i: usize, j: usize) -> f32 {
        self.scores[i * self.n + j]
    }

    /// Full similarity row for the drink at position `i`
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.scores[i * self.n..(i + 1) * self.n]
    }
}
