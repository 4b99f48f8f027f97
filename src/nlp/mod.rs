// file: src/nlp/mod.rs
// description: tokenizer, stemmer and stop words bundled per language
// reference: internal module structure

pub mod czech;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

pub use stemmer::WordStemmer;
pub use stopwords::StopWords;
pub use tokenizer::Tokenizer;

use crate::error::Result;
use crate::models::Language;
use tracing::debug;

/// Everything a summarizer needs to turn raw words into comparable terms.
#[derive(Debug)]
pub struct LanguageResources {
    pub language: Language,
    pub tokenizer: Tokenizer,
    pub stemmer: WordStemmer,
    pub stop_words: StopWords,
}

impl LanguageResources {
    pub fn new(language: Language) -> Self {
        let resources = Self {
            language,
            tokenizer: Tokenizer::new(language),
            stemmer: WordStemmer::for_language(language),
            stop_words: StopWords::for_language(language),
        };

        debug!(
            "Loaded {} resources: stemmer={}, {} stop words",
            language,
            resources.stemmer.name(),
            resources.stop_words.len()
        );

        resources
    }

    /// Looks up resources by language code, failing with `UnsupportedLanguage`.
    pub fn for_code(code: &str) -> Result<Self> {
        Ok(Self::new(code.parse()?))
    }

    pub fn normalize(&self, word: &str) -> String {
        word.to_lowercase()
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&self.normalize(word))
    }

    /// Stem of a word, or `None` for stop words.
    pub fn term(&self, word: &str) -> Option<String> {
        let normalized = self.normalize(word);
        if self.stop_words.contains(&normalized) {
            None
        } else {
            Some(self.stemmer.stem(&normalized))
        }
    }

    pub fn terms<'a, I>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        words.into_iter().filter_map(|w| self.term(w)).collect()
    }
}
