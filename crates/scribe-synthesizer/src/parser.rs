//! Parse model output into a total variable→content mapping
//!
//! Two-tier strategy: a strict JSON parse of the (possibly fenced) response
//! body, falling back to per-variable pattern recovery when the model did
//! not return valid JSON. Every requested variable ends up in the result on
//! every path; failures surface as bracketed placeholder strings instead of
//! missing keys.

use regex::Regex;
use scribe_domain::ContentMap;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::warn;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("valid regex"));

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#+\s+").expect("valid regex"));
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").expect("valid regex"));
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Outcome of parsing a model response
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResponse {
    /// Strict JSON parse succeeded
    Structured(ContentMap),

    /// JSON parse failed; content recovered via per-variable patterns
    Recovered(ContentMap),
}

impl ParsedResponse {
    /// The content map, regardless of which tier produced it
    pub fn content(self) -> ContentMap {
        match self {
            ParsedResponse::Structured(content) | ParsedResponse::Recovered(content) => content,
        }
    }

    /// Whether the fallback tier produced this result
    pub fn was_recovered(&self) -> bool {
        matches!(self, ParsedResponse::Recovered(_))
    }
}

/// Parse raw model output into content for the requested variables.
///
/// Never fails: malformed output degrades to pattern recovery, and a
/// variable that cannot be recovered maps to a visible placeholder.
pub fn extract_content(raw: &str, variables: &[String]) -> ParsedResponse {
    let candidate = json_candidate(raw);

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => {
            let mut content = ContentMap::new();
            for (key, value) in object {
                let text = match value {
                    Value::String(s) => strip_markup(&s),
                    // Non-string values keep their JSON rendering
                    other => other.to_string(),
                };
                content.insert(key, text);
            }

            // Reconcile against the requested variables so the map is total
            for variable in variables {
                if !content.contains_key(variable) {
                    warn!("Model output omitted variable '{}'", variable);
                    content.insert(variable.clone(), missing_placeholder(variable));
                }
            }

            ParsedResponse::Structured(content)
        }
        _ => {
            warn!("Model output is not a JSON object, recovering via patterns");
            ParsedResponse::Recovered(recover_with_patterns(candidate, variables))
        }
    }
}

/// Placeholder for a variable the model output did not contain
pub fn missing_placeholder(name: &str) -> String {
    format!("[Content for {} not found]", name)
}

/// Placeholder for a variable whose generation failed at the model call
pub fn error_placeholder(name: &str) -> String {
    format!("[Error generating content for {}]", name)
}

/// A complete content map of error placeholders, used when the model call
/// itself fails
pub fn error_placeholders(variables: &[String]) -> ContentMap {
    variables
        .iter()
        .map(|name| (name.clone(), error_placeholder(name)))
        .collect()
}

/// The JSON candidate within a response: the body of a ```json fence when
/// present, otherwise the whole trimmed response.
fn json_candidate(raw: &str) -> &str {
    JSON_FENCE
        .captures(raw)
        .and_then(|capture| capture.get(1))
        .map(|body| body.as_str())
        .unwrap_or_else(|| raw.trim())
}

/// Strip markdown and HTML artifacts the model slipped into a value.
///
/// Fenced blocks go before inline backticks so a fence is never
/// half-consumed by the inline-code pattern.
fn strip_markup(value: &str) -> String {
    let text = HEADING.replace_all(value, "");
    let text = FENCED_BLOCK.replace_all(&text, "");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = HTML_TAG.replace_all(&text, "");
    text.into_owned()
}

/// Recover variable values from non-JSON output by searching for
/// `name: "value"`-shaped fragments (quotes on the key optional).
fn recover_with_patterns(candidate: &str, variables: &[String]) -> ContentMap {
    let mut content = ContentMap::new();

    for variable in variables {
        let pattern = format!(
            r#"["']?{}["']?\s*:\s*["']([^"']+)["']"#,
            regex::escape(variable)
        );
        let value = Regex::new(&pattern)
            .ok()
            .and_then(|re| re.captures(candidate))
            .and_then(|capture| capture.get(1))
            .map(|m| m.as_str().to_string());

        match value {
            Some(found) => {
                content.insert(variable.clone(), found);
            }
            None => {
                warn!("Could not recover content for variable '{}'", variable);
                content.insert(variable.clone(), missing_placeholder(variable));
            }
        }
    }

    content
}
