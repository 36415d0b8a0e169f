//! Template variable extraction

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// `{{ identifier }}` placeholders
static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("valid regex"));

/// Extract distinct placeholder names from a template, in order of first
/// appearance.
pub fn extract_variables(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut variables = Vec::new();

    for capture in VARIABLE.captures_iter(template) {
        let name = &capture[1];
        if seen.insert(name.to_string()) {
            variables.push(name.to_string());
        }
    }

    variables
}
