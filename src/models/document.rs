// file: src/models/document.rs
// description: resolved document model built from plain text or a fetched web page
// reference: paragraph / sentence / word structure consumed by the summarizers

use crate::models::Language;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Text,
    Url(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub text: String,
    pub words: Vec<String>,
    pub is_heading: bool,
}

impl Sentence {
    pub fn new(text: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            text: text.into(),
            words,
            is_heading: false,
        }
    }

    pub fn heading(text: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            text: text.into(),
            words,
            is_heading: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedDocument {
    pub source: DocumentSource,
    pub language: Language,
    pub title: Option<String>,
    pub paragraphs: Vec<Paragraph>,
    pub fingerprint: String,
}

impl ResolvedDocument {
    pub fn new(source: DocumentSource, language: Language, paragraphs: Vec<Paragraph>) -> Self {
        let paragraphs: Vec<Paragraph> = paragraphs.into_iter().filter(|p| !p.is_empty()).collect();
        let fingerprint = Self::compute_fingerprint(&paragraphs);

        Self {
            source,
            language,
            title: None,
            paragraphs,
            fingerprint,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title.filter(|t| !t.trim().is_empty());
        self
    }

    /// Body sentences in document order. Headings are excluded.
    pub fn sentences(&self) -> Vec<&Sentence> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.sentences.iter())
            .filter(|s| !s.is_heading)
            .collect()
    }

    /// Characters of extracted text, headings included.
    pub fn char_count(&self) -> usize {
        self.paragraphs
            .iter()
            .flat_map(|p| p.sentences.iter())
            .map(|s| s.text.chars().count())
            .sum()
    }

    /// All words of the body sentences.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.sentences.iter())
            .filter(|s| !s.is_heading)
            .flat_map(|s| s.words.iter().map(String::as_str))
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentence_count() == 0
    }

    fn compute_fingerprint(paragraphs: &[Paragraph]) -> String {
        let mut hasher = Sha256::new();
        for sentence in paragraphs.iter().flat_map(|p| p.sentences.iter()) {
            hasher.update(sentence.text.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}
