//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pipeline and infrastructure.
//! Implementations live in other crates.

/// Trait for generative model operations
///
/// Implemented by the infrastructure layer (scribe-llm). The pipeline issues
/// exactly one `generate` call per synthesis; retries, if any, belong to the
/// provider implementation.
pub trait LlmProvider {
    /// Error type for model operations
    type Error;

    /// Generate a text completion for the given prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
