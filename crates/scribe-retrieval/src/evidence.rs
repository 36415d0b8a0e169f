//! Rendering retrieved chunks into a prompt-ready evidence block

use crate::retriever::ScoredChunk;
use scribe_domain::SourceDocument;

/// Format retrieved chunks from a single knowledge source.
///
/// Each chunk renders as a relevance-annotated block; blocks are separated
/// by blank lines.
pub fn format_evidence(chunks: &[ScoredChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| format!("CHUNK (relevance: {:.2}):\n{}", chunk.score, chunk.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format retrieved chunks drawn from several source documents.
///
/// Each chunk is attributed to the first document whose text contains it.
/// Attribution is best-effort: a chunk appearing in several documents cites
/// the first, and a chunk spanning a document boundary (overlap seeding can
/// produce one) cites "Unknown".
pub fn format_evidence_with_sources(
    chunks: &[ScoredChunk],
    documents: &[SourceDocument],
) -> String {
    let mut block = String::new();

    for (idx, chunk) in chunks.iter().enumerate() {
        let source_line = documents
            .iter()
            .find(|doc| doc.text.contains(&chunk.text))
            .map(|doc| format!("Source: {} ({})", doc.source.title, doc.source.url))
            .unwrap_or_else(|| "Source: Unknown".to_string());

        block.push_str(&format!(
            "CHUNK {} (relevance: {:.2}):\n{}\n{}\n\n",
            idx + 1,
            chunk.score,
            source_line,
            chunk.text
        ));
    }

    block
}
