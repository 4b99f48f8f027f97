// file: src/nlp/stemmer.rs
// description: language specific word stemming
// reference: https://docs.rs/rust-stemmers (Snowball algorithms)

use crate::models::Language;
use crate::nlp::czech;
use rust_stemmers::{Algorithm as SnowballAlgorithm, Stemmer};

pub enum WordStemmer {
    Snowball(Stemmer),
    Czech,
    Null,
}

impl WordStemmer {
    pub fn for_language(language: Language) -> Self {
        let snowball = match language {
            Language::English => SnowballAlgorithm::English,
            Language::French => SnowballAlgorithm::French,
            Language::German => SnowballAlgorithm::German,
            Language::Italian => SnowballAlgorithm::Italian,
            Language::Portuguese => SnowballAlgorithm::Portuguese,
            Language::Spanish => SnowballAlgorithm::Spanish,
            Language::Czech | Language::Slovak => return WordStemmer::Czech,
            Language::Japanese => return WordStemmer::Null,
        };

        WordStemmer::Snowball(Stemmer::create(snowball))
    }

    /// Stems an already lower-cased word.
    pub fn stem(&self, word: &str) -> String {
        match self {
            WordStemmer::Snowball(stemmer) => stemmer.stem(word).into_owned(),
            WordStemmer::Czech => czech::stem(word),
            WordStemmer::Null => word.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WordStemmer::Snowball(_) => "snowball",
            WordStemmer::Czech => "czech-light",
            WordStemmer::Null => "null",
        }
    }
}

impl std::fmt::Debug for WordStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("WordStemmer").field(&self.name()).finish()
    }
}
