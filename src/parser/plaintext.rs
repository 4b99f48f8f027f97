// file: src/parser/plaintext.rs
// description: plain text parsing into paragraphs, headings and sentences
// reference: blank lines separate paragraphs, all-caps lines are headings

use crate::models::{Paragraph, Sentence};
use crate::nlp::Tokenizer;
use crate::parser::TextNormalizer;

pub struct PlaintextParser<'a> {
    tokenizer: &'a Tokenizer,
    normalizer: TextNormalizer,
}

enum Line {
    Heading(String),
    Text(String),
}

impl<'a> PlaintextParser<'a> {
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        Self {
            tokenizer,
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn parse(&self, text: &str) -> Vec<Paragraph> {
        let normalized = self.normalizer.normalize(text);

        let mut paragraphs = Vec::new();
        let mut current: Vec<Line> = Vec::new();

        for line in normalized.lines() {
            let line = line.trim();

            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(self.to_paragraph(std::mem::take(&mut current)));
                }
            } else if is_heading(line) {
                current.push(Line::Heading(line.to_string()));
            } else {
                current.push(Line::Text(line.to_string()));
            }
        }

        if !current.is_empty() {
            paragraphs.push(self.to_paragraph(current));
        }

        paragraphs
    }

    /// Consecutive text lines are joined before sentence splitting so a
    /// sentence may wrap across lines.
    fn to_paragraph(&self, lines: Vec<Line>) -> Paragraph {
        let mut sentences = Vec::new();
        let mut text = String::new();

        for line in lines {
            match line {
                Line::Heading(heading) => {
                    self.flush(&mut text, &mut sentences);
                    let words = self.tokenizer.words(&heading);
                    sentences.push(Sentence::heading(heading, words));
                }
                Line::Text(line) => {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(&line);
                }
            }
        }
        self.flush(&mut text, &mut sentences);

        Paragraph::new(sentences)
    }

    fn flush(&self, text: &mut String, sentences: &mut Vec<Sentence>) {
        if text.is_empty() {
            return;
        }

        for sentence in self.tokenizer.sentences(text) {
            let words = self.tokenizer.words(&sentence);
            sentences.push(Sentence::new(sentence, words));
        }
        text.clear();
    }
}

/// A line with at least one cased letter and no lower-case letters.
fn is_heading(line: &str) -> bool {
    line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase)
}
