//! Integration tests for the synthesis pipeline

#[cfg(test)]
mod tests {
    use crate::{extract_variables, ContentSynthesizer, SynthesizerConfig, SynthesizerError};
    use scribe_domain::{Source, SourceDocument};
    use scribe_llm::MockProvider;

    fn variables(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    const KNOWLEDGE: &str = "Our refund policy allows returns within thirty days of purchase. \
        Shipping is free for orders over fifty dollars. \
        Warranty claims must include the original receipt.";

    #[test]
    fn test_full_synthesis_flow() {
        let llm = MockProvider::new(
            r#"{"summary": "Returns are accepted within thirty days.", "contact": "support@example.com"}"#,
        );
        let synthesizer = ContentSynthesizer::new(llm, SynthesizerConfig::default());

        let result = synthesizer
            .generate("refund policy", &variables(&["summary", "contact"]), KNOWLEDGE)
            .unwrap();

        assert_eq!(
            result.content["summary"],
            "Returns are accepted within thirty days."
        );
        assert_eq!(result.content["contact"], "support@example.com");
        assert!(!result.metadata.recovered_via_patterns);
        assert!(result.metadata.chunks_indexed >= 1);
        assert!(result.metadata.chunks_retrieved >= 1);
    }

    #[test]
    fn test_synthesis_with_fenced_response() {
        let llm = MockProvider::new("```json\n{\"summary\": \"Fenced but fine.\"}\n```");
        let synthesizer = ContentSynthesizer::new(llm, SynthesizerConfig::default());

        let result = synthesizer
            .generate("refund policy", &variables(&["summary"]), KNOWLEDGE)
            .unwrap();

        assert_eq!(result.content["summary"], "Fenced but fine.");
        assert!(!result.metadata.recovered_via_patterns);
    }

    #[test]
    fn test_synthesis_with_garbage_response() {
        let llm = MockProvider::new("I'm sorry, I cannot help with that.");
        let synthesizer = ContentSynthesizer::new(llm, SynthesizerConfig::default());

        let result = synthesizer
            .generate("refund policy", &variables(&["summary", "contact"]), KNOWLEDGE)
            .unwrap();

        assert!(result.metadata.recovered_via_patterns);
        assert_eq!(result.content["summary"], "[Content for summary not found]");
        assert_eq!(result.content["contact"], "[Content for contact not found]");
    }

    #[test]
    fn test_model_failure_surfaces_as_error() {
        let synthesizer =
            ContentSynthesizer::new(MockProvider::failing(), SynthesizerConfig::default());

        let result = synthesizer.generate("query", &variables(&["a"]), KNOWLEDGE);
        assert!(matches!(result, Err(SynthesizerError::Llm(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_retrieval() {
        let mut config = SynthesizerConfig::default();
        config.chunk_overlap = config.max_chunk_size;

        let llm = MockProvider::new("{}");
        let synthesizer = ContentSynthesizer::new(llm.clone(), config);

        let result = synthesizer.generate("query", &variables(&["a"]), KNOWLEDGE);
        assert!(matches!(result, Err(SynthesizerError::Config(_))));
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn test_invalid_config_rejected_for_documents_too() {
        let mut config = SynthesizerConfig::default();
        config.top_k = 0;

        let synthesizer = ContentSynthesizer::new(MockProvider::new("{}"), config);
        let documents = vec![SourceDocument::new(
            Source::new("Doc", "https://example.com"),
            "Some text.",
        )];

        let result =
            synthesizer.generate_from_documents("query", &variables(&["a"]), &documents);
        assert!(matches!(result, Err(SynthesizerError::Config(_))));
    }

    #[test]
    fn test_model_failure_converts_to_placeholders() {
        let synthesizer =
            ContentSynthesizer::new(MockProvider::failing(), SynthesizerConfig::default());

        let result =
            synthesizer.generate_or_placeholders("query", &variables(&["a", "b"]), KNOWLEDGE);

        assert_eq!(result.content["a"], "[Error generating content for a]");
        assert_eq!(result.content["b"], "[Error generating content for b]");
    }

    #[test]
    fn test_empty_knowledge_still_invokes_model() {
        let llm = MockProvider::new(r#"{"summary": "Nothing to ground on."}"#);
        let synthesizer = ContentSynthesizer::new(llm.clone(), SynthesizerConfig::default());

        let result = synthesizer
            .generate("query", &variables(&["summary"]), "")
            .unwrap();

        assert_eq!(llm.call_count(), 1);
        assert_eq!(result.metadata.chunks_indexed, 0);
        assert_eq!(result.metadata.chunks_retrieved, 0);
        assert_eq!(result.content["summary"], "Nothing to ground on.");
    }

    #[test]
    fn test_empty_variable_list_is_degenerate_not_an_error() {
        let llm = MockProvider::new("{}");
        let synthesizer = ContentSynthesizer::new(llm, SynthesizerConfig::default());

        let result = synthesizer.generate("query", &[], KNOWLEDGE).unwrap();
        assert!(result.content.is_empty());
    }

    #[test]
    fn test_multi_source_synthesis() {
        let documents = vec![
            SourceDocument::new(
                Source::new("Returns FAQ", "https://example.com/faq"),
                "Our refund policy allows returns within thirty days of purchase.",
            ),
            SourceDocument::new(
                Source::new("Shipping Info", "https://example.com/shipping"),
                "Shipping is free for orders over fifty dollars.",
            ),
        ];

        let llm = MockProvider::new(r#"{"summary": "Returns within thirty days."}"#);
        let synthesizer = ContentSynthesizer::new(llm, SynthesizerConfig::default())
            .with_model_name("gemini-1.5-pro");

        let result = synthesizer
            .generate_from_documents("refund policy", &variables(&["summary"]), &documents)
            .unwrap();

        assert_eq!(result.content["summary"], "Returns within thirty days.");
        assert_eq!(result.metadata.model_name, "gemini-1.5-pro");
        assert_eq!(result.metadata.chunks_indexed, 1);
    }

    #[test]
    fn test_multi_source_failure_converts_to_placeholders() {
        let documents = vec![SourceDocument::new(
            Source::new("Doc", "https://example.com"),
            "Some text.",
        )];
        let synthesizer =
            ContentSynthesizer::new(MockProvider::failing(), SynthesizerConfig::default());

        let result = synthesizer.generate_from_documents_or_placeholders(
            "query",
            &variables(&["field"]),
            &documents,
        );

        assert_eq!(
            result.content["field"],
            "[Error generating content for field]"
        );
    }

    #[test]
    fn test_large_knowledge_is_chunked_and_capped() {
        // ~3000 chars of sentences so the corpus outgrows a single chunk
        let knowledge = "The refund policy allows returns within thirty days. "
            .repeat(60);

        let llm = MockProvider::new(r#"{"summary": "ok"}"#);
        let synthesizer = ContentSynthesizer::new(llm, SynthesizerConfig::default());

        let result = synthesizer
            .generate("refund policy", &variables(&["summary"]), &knowledge)
            .unwrap();

        assert!(result.metadata.chunks_indexed >= 3);
        assert_eq!(result.metadata.chunks_retrieved, 3);
    }

    #[test]
    fn test_template_to_content_round_trip() {
        let template = "Dear {{ customer_name }},\n\n{{ detailed_response }}\n\nSincerely,\n{{ agent_name }}";
        let vars = extract_variables(template);
        assert_eq!(
            vars,
            vec!["customer_name", "detailed_response", "agent_name"]
        );

        let llm = MockProvider::new(
            r#"{"customer_name": "Alex", "detailed_response": "We have issued a refund.", "agent_name": "Sam"}"#,
        );
        let synthesizer = ContentSynthesizer::new(llm, SynthesizerConfig::default());

        let result = synthesizer
            .generate("complaint about a late refund", &vars, KNOWLEDGE)
            .unwrap();

        // Every template variable is present in the output
        for var in &vars {
            assert!(result.content.contains_key(var));
        }
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let llm = MockProvider::new(r#"{"summary": "stable"}"#);
        let synthesizer = ContentSynthesizer::new(llm, SynthesizerConfig::default());

        let first = synthesizer
            .generate("refund policy", &variables(&["summary"]), KNOWLEDGE)
            .unwrap();
        let second = synthesizer
            .generate("refund policy", &variables(&["summary"]), KNOWLEDGE)
            .unwrap();

        assert_eq!(first.content, second.content);
        assert_eq!(
            first.metadata.chunks_retrieved,
            second.metadata.chunks_retrieved
        );
    }
}
