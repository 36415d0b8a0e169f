//! Core synthesis pipeline

use crate::config::SynthesizerConfig;
use crate::error::SynthesizerError;
use crate::parser::{error_placeholders, extract_content};
use crate::prompt::PromptBuilder;
use crate::types::{Synthesis, SynthesisMetadata};
use scribe_domain::traits::LlmProvider;
use scribe_domain::SourceDocument;
use scribe_retrieval::{
    format_evidence, format_evidence_with_sources, ChunkIndex, ScoredChunk, TextChunker,
};
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};

/// The synthesizer turns (query, variables, knowledge) into a total
/// variable→content mapping.
///
/// Each call builds its own transient chunk corpus and vector model; nothing
/// is shared across requests. The single model call is the dominant cost and
/// runs with whatever timeout the provider's HTTP client enforces.
pub struct ContentSynthesizer<L>
where
    L: LlmProvider,
{
    llm: L,
    config: SynthesizerConfig,
    model_name: String,
}

impl<L> ContentSynthesizer<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new synthesizer
    pub fn new(llm: L, config: SynthesizerConfig) -> Self {
        Self {
            llm,
            config,
            model_name: "llm".to_string(),
        }
    }

    /// Create a new synthesizer with a specific model name recorded in
    /// result metadata
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Generate content from a single flat knowledge text.
    ///
    /// Empty knowledge is not an error: the model is invoked with an empty
    /// evidence block. Callers that want to short-circuit should check
    /// before calling. An invalid configuration is rejected before any
    /// retrieval work happens.
    pub fn generate(
        &self,
        query: &str,
        variables: &[String],
        knowledge: &str,
    ) -> Result<Synthesis, SynthesizerError> {
        self.config.validate().map_err(SynthesizerError::Config)?;
        let start_time = SystemTime::now();

        info!(
            "Starting synthesis for {} variables, knowledge length {}",
            variables.len(),
            knowledge.len()
        );

        let (index, retrieved) = self.retrieve(query, knowledge, self.config.top_k);
        let evidence = format_evidence(&retrieved);

        self.synthesize(
            query,
            variables,
            &evidence,
            index.len(),
            retrieved.len(),
            start_time,
        )
    }

    /// Generate content from several source documents (web aggregation).
    ///
    /// Documents are combined into one corpus; retrieved chunks carry
    /// best-effort provenance in the evidence block.
    pub fn generate_from_documents(
        &self,
        query: &str,
        variables: &[String],
        documents: &[SourceDocument],
    ) -> Result<Synthesis, SynthesizerError> {
        self.config.validate().map_err(SynthesizerError::Config)?;
        let start_time = SystemTime::now();

        info!(
            "Starting multi-source synthesis for {} variables across {} documents",
            variables.len(),
            documents.len()
        );

        let combined = documents
            .iter()
            .map(|doc| doc.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let (index, retrieved) =
            self.retrieve(query, &combined, self.config.multi_source_top_k);
        let evidence = format_evidence_with_sources(&retrieved, documents);

        self.synthesize(
            query,
            variables,
            &evidence,
            index.len(),
            retrieved.len(),
            start_time,
        )
    }

    /// Like [`generate`](Self::generate), but converts a model-call failure
    /// into a content map of error placeholders so the caller always gets a
    /// complete result.
    pub fn generate_or_placeholders(
        &self,
        query: &str,
        variables: &[String],
        knowledge: &str,
    ) -> Synthesis {
        self.generate(query, variables, knowledge)
            .unwrap_or_else(|e| self.placeholder_synthesis(variables, e))
    }

    /// Multi-source counterpart of
    /// [`generate_or_placeholders`](Self::generate_or_placeholders)
    pub fn generate_from_documents_or_placeholders(
        &self,
        query: &str,
        variables: &[String],
        documents: &[SourceDocument],
    ) -> Synthesis {
        self.generate_from_documents(query, variables, documents)
            .unwrap_or_else(|e| self.placeholder_synthesis(variables, e))
    }

    /// Chunk the knowledge text, build the transient index, and pull the
    /// top-K evidence chunks
    fn retrieve(&self, query: &str, knowledge: &str, top_k: usize) -> (ChunkIndex, Vec<ScoredChunk>) {
        let chunker = TextChunker::new(self.config.max_chunk_size, self.config.chunk_overlap);
        let chunks = chunker.chunk(knowledge);

        debug!("Split knowledge into {} chunks", chunks.len());

        let index = ChunkIndex::build(chunks);
        let retrieved = index.retrieve(query, top_k);

        debug!("Retrieved {} of {} chunks", retrieved.len(), index.len());

        (index, retrieved)
    }

    /// Prompt the model once and parse its output
    fn synthesize(
        &self,
        query: &str,
        variables: &[String],
        evidence: &str,
        chunks_indexed: usize,
        chunks_retrieved: usize,
        start_time: SystemTime,
    ) -> Result<Synthesis, SynthesizerError> {
        let prompt = PromptBuilder::new(query, variables, evidence).build();

        debug!("Prompt length: {} chars", prompt.len());

        let raw = self
            .llm
            .generate(&prompt)
            .map_err(|e| SynthesizerError::Llm(e.to_string()))?;

        debug!("Model response length: {} chars", raw.len());

        let parsed = extract_content(&raw, variables);
        let recovered_via_patterns = parsed.was_recovered();
        let content = parsed.content();

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        info!(
            "Synthesis complete: {} entries, recovered_via_patterns={}",
            content.len(),
            recovered_via_patterns
        );

        Ok(Synthesis {
            content,
            metadata: SynthesisMetadata {
                chunks_indexed,
                chunks_retrieved,
                recovered_via_patterns,
                model_name: self.model_name.clone(),
                processing_time_ms,
            },
        })
    }

    fn placeholder_synthesis(&self, variables: &[String], error: SynthesizerError) -> Synthesis {
        warn!("Synthesis failed, substituting placeholders: {}", error);

        Synthesis {
            content: error_placeholders(variables),
            metadata: SynthesisMetadata {
                chunks_indexed: 0,
                chunks_retrieved: 0,
                recovered_via_patterns: false,
                model_name: self.model_name.clone(),
                processing_time_ms: 0,
            },
        }
    }
}
