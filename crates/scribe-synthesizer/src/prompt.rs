//! Prompt engineering for variable content generation

/// Builds the synthesis prompt sent to the model
pub struct PromptBuilder<'a> {
    query: &'a str,
    variables: &'a [String],
    evidence: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(query: &'a str, variables: &'a [String], evidence: &'a str) -> Self {
        Self {
            query,
            variables,
            evidence,
        }
    }

    /// Build the complete synthesis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Task framing
        prompt.push_str("Generate content for a document based on the following:\n\n");
        prompt.push_str(&format!("User Query: {}\n\n", self.query));

        // 2. Retrieved evidence
        prompt.push_str("Relevant Knowledge:\n");
        prompt.push_str(self.evidence);
        prompt.push_str("\n\n");

        // 3. The variables to fill
        prompt.push_str(
            "Please provide content for the following variables to be used in a document template:\n",
        );
        prompt.push_str(&self.variables.join(", "));
        prompt.push_str("\n\n");

        // 4. Output format instructions
        prompt.push_str(OUTPUT_INSTRUCTIONS);

        prompt
    }
}

const OUTPUT_INSTRUCTIONS: &str = "\
For each variable, provide accurate, relevant, and well-written content based on the information in the sources.
Format your response as JSON with each variable as a key.
Ensure the content is properly formatted and professional.
Do NOT include markdown syntax in your responses - provide plain text that can be formatted by the template system.
Do NOT include any HTML or CSS code - provide clean text only.";
