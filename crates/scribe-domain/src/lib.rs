//! Scribe Domain Layer
//!
//! Core value types and trait seams for the Scribe content pipeline.
//! This crate has zero external dependencies: infrastructure (HTTP model
//! clients, retrieval machinery) lives in other crates and implements the
//! traits defined here.
//!
//! ## Key Concepts
//!
//! - **Source**: provenance metadata (title, URL) for one contributing
//!   document when several documents are aggregated into one corpus
//! - **SourceDocument**: a source plus its extracted text
//! - **ContentMap**: the pipeline result, a total mapping from template
//!   variable name to generated content
//! - **LlmProvider**: the seam to a generative model, implemented by
//!   `scribe-llm`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod source;
pub mod traits;

pub use source::{Source, SourceDocument};

use std::collections::BTreeMap;

/// Mapping from template variable name to generated content.
///
/// Invariant maintained by the pipeline: every requested variable name is
/// present, with a bracketed placeholder substituted on any failure path.
pub type ContentMap = BTreeMap<String, String>;
