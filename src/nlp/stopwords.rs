// file: src/nlp/stopwords.rs
// description: stop word tables per supported language
// reference: https://docs.rs/stop-words

use crate::models::Language;
use std::collections::HashSet;
use stop_words::{LANGUAGE, get};

const JAPANESE_STOP_WORDS: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる", "も",
    "する", "から", "な", "こと", "として", "い", "や", "など", "なっ", "ない", "この", "ため",
    "その", "あっ", "よう", "また", "もの", "という", "あり", "まで", "られ", "なる", "へ", "か",
    "だ", "これ", "によって", "により", "おり", "です", "ます",
];

#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn for_language(language: Language) -> Self {
        let table = match language {
            Language::Czech => LANGUAGE::Czech,
            Language::English => LANGUAGE::English,
            Language::French => LANGUAGE::French,
            Language::German => LANGUAGE::German,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Slovak => LANGUAGE::Slovak,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Japanese => return Self::from_list(JAPANESE_STOP_WORDS),
        };

        let words = get(table).iter().map(|s| s.to_lowercase()).collect();
        Self { words }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Expects a lower-cased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
