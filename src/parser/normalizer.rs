// file: src/parser/normalizer.rs
// description: text normalization applied before tokenization
// reference: unicode whitespace handling for pasted and scraped text

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INLINE_WHITESPACE: Regex =
        Regex::new("[ \t\u{00A0}\u{2000}-\u{200A}\u{202F}\u{205F}\u{3000}]+")
            .expect("INLINE_WHITESPACE regex is valid");
    static ref EXCESS_BLANK_LINES: Regex =
        Regex::new("\n{3,}").expect("EXCESS_BLANK_LINES regex is valid");
    static ref INVISIBLE: Regex =
        Regex::new("[\u{200B}-\u{200D}\u{FEFF}\u{00AD}]").expect("INVISIBLE regex is valid");
}

#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, content: &str) -> String {
        let normalized = self.normalize_line_endings(content);
        let normalized = INVISIBLE.replace_all(&normalized, "");
        let normalized = self.normalize_whitespace(&normalized);
        self.normalize_line_breaks(&normalized)
    }

    /// Collapses all whitespace, line breaks included, into single spaces.
    pub fn collapse(&self, content: &str) -> String {
        INVISIBLE
            .replace_all(content, "")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn normalize_line_endings(&self, content: &str) -> String {
        content.replace("\r\n", "\n").replace('\r', "\n")
    }

    fn normalize_whitespace(&self, content: &str) -> String {
        content
            .lines()
            .map(|line| INLINE_WHITESPACE.replace_all(line, " ").trim().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn normalize_line_breaks(&self, content: &str) -> String {
        EXCESS_BLANK_LINES
            .replace_all(content, "\n\n")
            .trim()
            .to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
