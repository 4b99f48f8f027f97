// file: src/models/request.rs
// description: summary request model with language, algorithm and sentence count selectors
// reference: form fields submitted by the web UI and CLI arguments

use crate::error::{Result, SummaryError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Czech,
    English,
    French,
    German,
    Italian,
    Japanese,
    Portuguese,
    Slovak,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::Czech,
        Language::English,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Japanese,
        Language::Portuguese,
        Language::Slovak,
        Language::Spanish,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Czech => "czech",
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Portuguese => "portuguese",
            Language::Slovak => "slovak",
            Language::Spanish => "spanish",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Czech => "Czech",
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Portuguese => "Portuguese",
            Language::Slovak => "Slovak",
            Language::Spanish => "Spanish",
        }
    }
}

impl FromStr for Language {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| SummaryError::UnsupportedLanguage(s.trim().to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "lsa")]
    Lsa,
    #[serde(rename = "lexrank")]
    LexRank,
    #[serde(rename = "luhn")]
    Luhn,
    #[serde(rename = "textrank")]
    TextRank,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Lsa,
        Algorithm::LexRank,
        Algorithm::Luhn,
        Algorithm::TextRank,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Algorithm::Lsa => "lsa",
            Algorithm::LexRank => "lexrank",
            Algorithm::Luhn => "luhn",
            Algorithm::TextRank => "textrank",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Lsa => "LSA",
            Algorithm::LexRank => "LexRank",
            Algorithm::Luhn => "Luhn",
            Algorithm::TextRank => "TextRank",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "lsa" => Ok(Algorithm::Lsa),
            "lexrank" => Ok(Algorithm::LexRank),
            "luhn" => Ok(Algorithm::Luhn),
            "textrank" => Ok(Algorithm::TextRank),
            _ => Err(SummaryError::UnknownAlgorithm(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How many sentences to extract: a fixed number or a share of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceCount {
    Absolute(usize),
    Percentage(u8),
}

impl SentenceCount {
    /// Number of sentences to select from a document with `available` sentences.
    pub fn resolve(&self, available: usize) -> usize {
        match *self {
            SentenceCount::Absolute(count) => count.min(available),
            SentenceCount::Percentage(percent) => {
                let count = available * percent as usize / 100;
                count.max(1).min(available)
            }
        }
    }
}

impl FromStr for SentenceCount {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || SummaryError::InvalidSentenceCount(trimmed.to_string());

        if let Some(percent) = trimmed.strip_suffix('%') {
            let value: u8 = percent.trim().parse().map_err(|_| invalid())?;
            if value == 0 || value > 100 {
                return Err(invalid());
            }
            return Ok(SentenceCount::Percentage(value));
        }

        let value: usize = trimmed.parse().map_err(|_| invalid())?;
        if value == 0 {
            return Err(invalid());
        }
        Ok(SentenceCount::Absolute(value))
    }
}

impl fmt::Display for SentenceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceCount::Absolute(count) => write!(f, "{}", count),
            SentenceCount::Percentage(percent) => write!(f, "{}%", percent),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub raw_input: String,
    pub language: Language,
    pub sentence_count: SentenceCount,
    pub algorithm: Algorithm,
}

impl SummaryRequest {
    pub fn new(
        raw_input: impl Into<String>,
        language: Language,
        sentence_count: SentenceCount,
        algorithm: Algorithm,
    ) -> Self {
        Self {
            raw_input: raw_input.into(),
            language,
            sentence_count,
            algorithm,
        }
    }

    /// Builds a request from untyped field values, as submitted by a form.
    pub fn parse(raw_input: &str, language: &str, sentences: &str, algorithm: &str) -> Result<Self> {
        Ok(Self {
            raw_input: raw_input.to_string(),
            language: language.parse()?,
            sentence_count: sentences.parse()?,
            algorithm: algorithm.parse()?,
        })
    }

    pub fn is_url(&self) -> bool {
        is_url_input(&self.raw_input)
    }
}

/// Inputs starting with `http` are fetched, everything else is summarized as text.
pub fn is_url_input(raw_input: &str) -> bool {
    raw_input.starts_with("http")
}
