// file: src/models/summary.rs
// description: summary result and its plain-text rendering
// reference: selected sentences in document order joined by blank lines

use crate::models::{Algorithm, Language};
use serde::Serialize;
use std::fmt;

pub const SENTENCE_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub sentences: Vec<String>,
    pub algorithm: Algorithm,
    pub language: Language,
    pub requested: usize,
    pub source_sentences: usize,
    /// Page title when the input was a URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SummaryResult {
    pub fn to_text(&self) -> String {
        self.sentences.join(SENTENCE_SEPARATOR)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for SummaryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_join() {
        let result = SummaryResult {
            sentences: vec!["One.".to_string(), "Two.".to_string()],
            algorithm: Algorithm::Lsa,
            language: Language::English,
            requested: 2,
            source_sentences: 3,
            title: None,
        };

        assert_eq!(result.to_text(), "One.\n\nTwo.");
        assert_eq!(result.to_string(), result.to_text());
        assert_eq!(result.len(), 2);
    }
}
