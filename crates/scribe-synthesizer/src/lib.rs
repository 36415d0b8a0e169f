//! Scribe Synthesizer
//!
//! Retrieval-augmented content generation for template variables.
//!
//! # Overview
//!
//! Given a user query, the placeholder variables of a document template, and
//! a knowledge source (one flat text or several attributed documents), the
//! synthesizer produces a complete mapping from variable name to generated
//! content, ready for an external template-substitution step.
//!
//! # Architecture
//!
//! ```text
//! Knowledge → Chunker → TF-IDF index → top-K evidence → Prompt → Model
//!                                                                  │
//!                 ContentMap ← Response extractor (two-tier) ◄─────┘
//! ```
//!
//! # Key Features
//!
//! - **Transient retrieval**: chunk corpus and vector model live for one
//!   call only
//! - **Defensive parsing**: strict JSON first, pattern recovery second,
//!   visible placeholders last, so the result map is always total
//! - **Source attribution**: multi-document evidence cites where each chunk
//!   came from
//!
//! # Example Usage
//!
//! ```
//! use scribe_synthesizer::{extract_variables, ContentSynthesizer, SynthesizerConfig};
//! use scribe_llm::MockProvider;
//!
//! let llm = MockProvider::new(r#"{"summary": "Refunds take thirty days."}"#);
//! let synthesizer = ContentSynthesizer::new(llm, SynthesizerConfig::default());
//!
//! let variables = extract_variables("Summary: {{ summary }}");
//! let result = synthesizer
//!     .generate("refund policy", &variables, "Refunds take thirty days. Keep your receipt.")
//!     .unwrap();
//!
//! assert_eq!(result.content["summary"], "Refunds take thirty days.");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod prompt;
mod synthesizer;
mod template;
mod types;

#[cfg(test)]
mod tests;

pub use config::SynthesizerConfig;
pub use error::SynthesizerError;
pub use parser::{error_placeholders, extract_content, ParsedResponse};
pub use synthesizer::ContentSynthesizer;
pub use template::extract_variables;
pub use types::{Synthesis, SynthesisMetadata};
