//! Scribe Retrieval
//!
//! Sparse-vector retrieval over a transient chunk corpus.
//!
//! # Architecture
//!
//! ```text
//! Text → TextChunker → ChunkIndex (TF-IDF) → retrieve → Evidence block
//! ```
//!
//! The corpus and its vector model are built fresh for every synthesis call
//! and discarded afterwards; nothing here is cached or shared across
//! requests.
//!
//! # Key Features
//!
//! - **Sentence-aligned chunking**: overlapping chunks that never split a
//!   sentence at a boundary
//! - **TF-IDF weighting**: vocabulary derived from the chunk corpus itself
//! - **Cosine ranking**: deterministic top-K selection with stable ties
//! - **Evidence formatting**: prompt-ready blocks with best-effort source
//!   attribution for multi-document corpora

#![warn(missing_docs)]

mod chunking;
mod evidence;
mod retriever;
mod vectorizer;

pub use chunking::TextChunker;
pub use evidence::{format_evidence, format_evidence_with_sources};
pub use retriever::{cosine_similarity, ChunkIndex, ScoredChunk};
pub use vectorizer::{preprocess, TfidfModel};
