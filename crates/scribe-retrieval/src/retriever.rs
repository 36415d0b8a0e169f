//! Top-K chunk retrieval by cosine similarity

use crate::vectorizer::TfidfModel;
use std::cmp::Ordering;

/// A retrieved chunk paired with its similarity score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    /// The chunk text
    pub text: String,

    /// Cosine similarity against the query, in [0, 1]
    pub score: f32,
}

/// A transient retrieval index over a chunk corpus.
///
/// Built once per synthesis request and discarded with it. Holds the chunks,
/// the fitted TF-IDF model, and one weight vector per chunk.
pub struct ChunkIndex {
    chunks: Vec<String>,
    model: TfidfModel,
    vectors: Vec<Vec<f32>>,
}

impl ChunkIndex {
    /// Build an index over the given chunks
    pub fn build(chunks: Vec<String>) -> Self {
        let (model, vectors) = TfidfModel::fit(&chunks);
        Self {
            chunks,
            model,
            vectors,
        }
    }

    /// Number of chunks in the index
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the index holds no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Retrieve the `top_k` chunks most similar to the query, descending by
    /// score.
    ///
    /// Ties keep corpus order. Asking for more chunks than exist returns
    /// them all; an empty index returns an empty result, never an error.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<ScoredChunk> {
        if self.chunks.is_empty() || top_k == 0 {
            return Vec::new();
        }

        let query_vector = self.model.transform(query);
        let scores: Vec<f32> = self
            .vectors
            .iter()
            .map(|vector| cosine_similarity(&query_vector, vector))
            .collect();

        let mut order: Vec<usize> = (0..self.chunks.len()).collect();
        // Stable sort keeps corpus order for equal scores
        order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
        order.truncate(top_k.min(self.chunks.len()));

        order
            .into_iter()
            .map(|idx| ScoredChunk {
                text: self.chunks[idx].clone(),
                score: scores[idx],
            })
            .collect()
    }
}

/// Calculate cosine similarity between two weight vectors.
///
/// Returns 0.0 when either vector has zero magnitude. For non-negative
/// TF-IDF vectors the result lands in [0, 1].
///
/// # Panics
///
/// Panics if the vectors have different lengths.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have same length");

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy_chunks() -> Vec<String> {
        vec![
            "Our refund policy allows returns within thirty days of purchase.".to_string(),
            "Shipping is free for orders over fifty dollars.".to_string(),
            "Warranty claims must include the original receipt.".to_string(),
        ]
    }

    #[test]
    fn test_retrieve_ranks_by_relevance() {
        let index = ChunkIndex::build(policy_chunks());
        let results = index.retrieve("refund policy", 3);

        assert_eq!(results.len(), 3);
        assert!(results[0].text.contains("refund policy"));
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_retrieve_top_k_limits_results() {
        let index = ChunkIndex::build(policy_chunks());
        let results = index.retrieve("refund", 1);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_retrieve_top_k_larger_than_corpus() {
        let index = ChunkIndex::build(policy_chunks());
        let results = index.retrieve("refund", 10);

        assert_eq!(results.len(), 3);
        // No duplicates
        for i in 0..results.len() {
            for j in (i + 1)..results.len() {
                assert_ne!(results[i].text, results[j].text);
            }
        }
    }

    #[test]
    fn test_retrieve_scores_in_unit_interval() {
        let index = ChunkIndex::build(policy_chunks());
        for result in index.retrieve("refund shipping warranty", 3) {
            assert!(result.score >= 0.0);
            assert!(result.score <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_retrieve_empty_index() {
        let index = ChunkIndex::build(Vec::new());
        assert!(index.is_empty());
        assert!(index.retrieve("anything", 3).is_empty());
    }

    #[test]
    fn test_retrieve_zero_top_k() {
        let index = ChunkIndex::build(policy_chunks());
        assert!(index.retrieve("refund", 0).is_empty());
    }

    #[test]
    fn test_retrieve_is_deterministic() {
        let index = ChunkIndex::build(policy_chunks());
        let first = index.retrieve("refund policy", 3);
        let second = index.retrieve("refund policy", 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        // A query matching nothing scores every chunk 0.0
        let index = ChunkIndex::build(policy_chunks());
        let results = index.retrieve("zzz qqq xxx", 3);

        let texts: Vec<&str> = results.iter().map(|r| r.text.as_str()).collect();
        let expected: Vec<String> = policy_chunks();
        assert_eq!(texts, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let vector = vec![0.3, 0.5, 0.2];
        assert!((cosine_similarity(&vector, &vector) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_zero_vector() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }
}
