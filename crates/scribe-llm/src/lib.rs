//! Scribe Model Provider Layer
//!
//! Pluggable generative-model provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from
//! `scribe-domain`. The provider object is constructed once by the caller
//! (API key and all) and injected into the pipeline per call; there is no
//! hidden global configuration.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Gemini REST API integration
//!
//! # Examples
//!
//! ```
//! use scribe_llm::MockProvider;
//! use scribe_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Hello from the model!");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "Hello from the model!");
//! ```

#![warn(missing_docs)]

pub mod gemini;

use scribe_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during model operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the model API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Model error: {0}")]
    Other(String),
}

/// Mock model provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use scribe_llm::MockProvider;
/// use scribe_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // A provider that always fails, for exercising error paths
/// let provider = MockProvider::failing();
/// assert!(provider.generate("any prompt").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
    fail: bool,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            fail: false,
        }
    }

    /// Create a provider whose every call fails with a communication error
    pub fn failing() -> Self {
        Self {
            default_response: String::new(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            fail: true,
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if self.fail {
            return Err(LlmError::Communication("Mock transport failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}
