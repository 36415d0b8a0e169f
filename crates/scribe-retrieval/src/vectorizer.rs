//! TF-IDF vectorization over a chunk corpus

use regex::Regex;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize text for vectorization: lowercase, strip punctuation, collapse
/// whitespace runs, trim.
pub fn preprocess(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

fn tokenize(text: &str) -> Vec<String> {
    preprocess(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Term-frequency–inverse-document-frequency model over a chunk corpus.
///
/// The vocabulary comes from the corpus itself, so the model is only
/// meaningful for the corpus it was fitted on. Vectors are L2-normalized, so
/// cosine similarity between them reduces to a dot product and lands in
/// [0, 1].
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfModel {
    /// Fit a model on the given chunks and return it with one weight vector
    /// per chunk, in chunk order.
    pub fn fit(chunks: &[String]) -> (Self, Vec<Vec<f32>>) {
        let tokenized: Vec<Vec<String>> = chunks.iter().map(|c| tokenize(c)).collect();

        // Deterministic vocabulary order
        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();

        // Document frequency per term
        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                df[vocabulary[term]] += 1;
            }
        }

        // Smoothed IDF, never zero so every corpus term keeps some weight
        let corpus_size = chunks.len();
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1 + corpus_size) as f32 / (1 + d) as f32).ln() + 1.0)
            .collect();

        let model = Self { vocabulary, idf };
        let vectors = tokenized
            .iter()
            .map(|tokens| model.weigh(tokens))
            .collect();

        (model, vectors)
    }

    /// Vectorize arbitrary text into the fitted term space.
    ///
    /// Out-of-vocabulary terms contribute zero weight.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        self.weigh(&tokenize(text))
    }

    /// Number of distinct terms in the fitted vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn weigh(&self, tokens: &[String]) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];

        for token in tokens {
            if let Some(&idx) = self.vocabulary.get(token.as_str()) {
                vector[idx] += 1.0;
            }
        }

        for (weight, idf) in vector.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        // L2 normalization
        let magnitude: f32 = vector.iter().map(|w| w * w).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for weight in &mut vector {
                *weight /= magnitude;
            }
        }

        vector
    }
}
