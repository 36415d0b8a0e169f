//! Sentence-aligned text chunking with overlap

use regex::Regex;
use std::sync::LazyLock;

/// End-of-sentence punctuation followed by whitespace
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid regex"));

/// Splits text into overlapping, sentence-aligned chunks.
///
/// Sentences accumulate into a buffer until appending the next one would
/// exceed `max_chunk_size`; the closed chunk then seeds the next buffer with
/// its trailing `overlap` characters so no sentence sits invisible at a
/// chunk boundary. A single sentence longer than `max_chunk_size` becomes
/// its own oversized chunk; sentences are never split.
pub struct TextChunker {
    max_chunk_size: usize,
    overlap: usize,
}

impl TextChunker {
    /// Create a new text chunker
    pub fn new(max_chunk_size: usize, overlap: usize) -> Self {
        Self {
            max_chunk_size,
            overlap,
        }
    }

    /// Chunk the given text
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut current = String::new();

        for sentence in split_sentences(text) {
            if current.len() + sentence.len() > self.max_chunk_size && !current.is_empty() {
                let closed = std::mem::take(&mut current);
                current = format!("{} {}", overlap_tail(&closed, self.overlap), sentence);
                chunks.push(closed);
            } else if current.is_empty() {
                current.push_str(sentence);
            } else {
                current.push(' ');
                current.push_str(sentence);
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }
}

/// Split text into sentences at `.`, `!` or `?` followed by whitespace.
///
/// The punctuation stays attached to its sentence. Text without any boundary
/// is a single sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The matched punctuation is one ASCII byte; keep it on the sentence
        let end = boundary.start() + 1;
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = boundary.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// The trailing `overlap` characters of a chunk, or the whole chunk when it
/// is shorter. Snaps forward to a UTF-8 character boundary.
fn overlap_tail(chunk: &str, overlap: usize) -> &str {
    if chunk.len() <= overlap {
        return chunk;
    }

    let mut idx = chunk.len() - overlap;
    while !chunk.is_char_boundary(idx) {
        idx += 1;
    }
    &chunk[idx..]
}
