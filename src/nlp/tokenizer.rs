// file: src/nlp/tokenizer.rs
// description: sentence and word tokenization per language
// reference: https://docs.rs/unicode-segmentation (UAX #29 boundaries), https://docs.rs/tinysegmenter

use crate::models::Language;
use unicode_segmentation::UnicodeSegmentation;

const ENGLISH_ABBREVIATIONS: &[&str] = &["e.g", "i.e", "al", "mr", "mrs", "ms", "dr", "vs", "st"];
const GERMAN_ABBREVIATIONS: &[&str] = &[
    "z.b", "bzw", "vgl", "usw", "inc", "al", "engl", "lat", "s", "nr", "dr",
];
const ROMANCE_ABBREVIATIONS: &[&str] = &["sr", "sra", "dr", "m", "mme", "sig", "pág", "p"];
const CZECH_ABBREVIATIONS: &[&str] = &["tzv", "např", "tj", "atd", "resp", "mj", "str", "č"];

#[derive(Debug, Clone)]
pub struct Tokenizer {
    language: Language,
    abbreviations: &'static [&'static str],
}

impl Tokenizer {
    pub fn new(language: Language) -> Self {
        let abbreviations = match language {
            Language::English => ENGLISH_ABBREVIATIONS,
            Language::German => GERMAN_ABBREVIATIONS,
            Language::French | Language::Italian | Language::Portuguese | Language::Spanish => {
                ROMANCE_ABBREVIATIONS
            }
            Language::Czech | Language::Slovak => CZECH_ABBREVIATIONS,
            Language::Japanese => &[],
        };

        Self {
            language,
            abbreviations,
        }
    }

    /// Splits text into trimmed sentences. A boundary directly after a known
    /// abbreviation is not treated as the end of a sentence.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences: Vec<String> = Vec::new();

        for raw in text.unicode_sentences() {
            let sentence = raw.trim();
            if sentence.is_empty() {
                continue;
            }

            match sentences.last_mut() {
                Some(previous) if self.ends_with_abbreviation(previous) => {
                    previous.push(' ');
                    previous.push_str(sentence);
                }
                _ => sentences.push(sentence.to_string()),
            }
        }

        sentences
    }

    /// Word tokens of a sentence; punctuation-only tokens are dropped.
    /// Japanese has no spaces, so its words come from a segmenter.
    pub fn words(&self, sentence: &str) -> Vec<String> {
        match self.language {
            Language::Japanese => tinysegmenter::tokenize(sentence)
                .into_iter()
                .map(|word| word.trim().to_string())
                .filter(|word| word.chars().any(char::is_alphanumeric))
                .collect(),
            _ => sentence.unicode_words().map(str::to_string).collect(),
        }
    }

    fn ends_with_abbreviation(&self, sentence: &str) -> bool {
        let Some(body) = sentence.strip_suffix('.') else {
            return false;
        };

        let last = body
            .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
            .next()
            .unwrap_or("")
            .to_lowercase();

        !last.is_empty() && self.abbreviations.iter().any(|a| *a == last)
    }
}
