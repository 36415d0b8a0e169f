//! Configuration for the synthesizer

use serde::{Deserialize, Serialize};

/// Configuration for the content synthesis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizerConfig {
    /// Maximum chunk size (characters)
    pub max_chunk_size: usize,

    /// Overlap carried from one chunk into the next (characters)
    pub chunk_overlap: usize,

    /// Chunks retrieved for a single-source corpus
    pub top_k: usize,

    /// Chunks retrieved for a multi-source corpus (web aggregation pulls
    /// from more places, so it gets a wider evidence window)
    pub multi_source_top_k: usize,
}

impl Default for SynthesizerConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_chunk_size: 1000,
            chunk_overlap: 200,
            top_k: 3,
            multi_source_top_k: 5,
        }
    }
}

impl SynthesizerConfig {
    /// Fine-grained preset: smaller chunks, more of them retrieved
    pub fn fine_grained() -> Self {
        Self {
            max_chunk_size: 500,
            chunk_overlap: 100,
            top_k: 5,
            multi_source_top_k: 8,
        }
    }

    /// Broad-context preset: larger chunks for long-form sources
    pub fn broad_context() -> Self {
        Self {
            max_chunk_size: 2000,
            chunk_overlap: 400,
            top_k: 3,
            multi_source_top_k: 5,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_size == 0 {
            return Err("max_chunk_size must be greater than 0".to_string());
        }
        if self.chunk_overlap >= self.max_chunk_size {
            return Err("chunk_overlap must be smaller than max_chunk_size".to_string());
        }
        if self.top_k == 0 {
            return Err("top_k must be greater than 0".to_string());
        }
        if self.multi_source_top_k == 0 {
            return Err("multi_source_top_k must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
