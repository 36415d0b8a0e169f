//! Error types for the synthesizer

use thiserror::Error;

/// Errors that can occur during content synthesis
#[derive(Error, Debug)]
pub enum SynthesizerError {
    /// Model provider error (network, auth, quota)
    #[error("Model error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
