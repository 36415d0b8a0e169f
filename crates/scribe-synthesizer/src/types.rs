//! Result types for synthesis

use scribe_domain::ContentMap;

/// Result of one synthesis request
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// Generated content, one entry per requested variable
    pub content: ContentMap,

    /// Metadata about how the content was produced
    pub metadata: SynthesisMetadata,
}

/// Metadata about a synthesis operation
#[derive(Debug, Clone)]
pub struct SynthesisMetadata {
    /// Chunks the knowledge source was split into
    pub chunks_indexed: usize,

    /// Chunks selected as evidence
    pub chunks_retrieved: usize,

    /// Whether the model output required pattern-based recovery instead of
    /// a strict JSON parse
    pub recovered_via_patterns: bool,

    /// Name of the model used
    pub model_name: String,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}
