//! Provenance metadata for aggregated knowledge sources

/// Provenance for one contributing document.
///
/// Produced upstream (web search, file upload) and carried through the
/// pipeline so retrieved evidence can cite where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Human-readable title of the source
    pub title: String,

    /// URL the source text was fetched from
    pub url: String,
}

impl Source {
    /// Create a new source
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A source together with its extracted text.
///
/// The text is a fully materialized blob; the pipeline has no streaming or
/// incremental mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Where the text came from
    pub source: Source,

    /// The extracted document text
    pub text: String,
}

impl SourceDocument {
    /// Create a new source document
    pub fn new(source: Source, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }
}
