// file: src/summarizer/luhn.rs
// description: Luhn summarizer rating sentences by clusters of significant words
// reference: H. P. Luhn, "The Automatic Creation of Literature Abstracts"

use crate::error::Result;
use crate::models::{Algorithm, ResolvedDocument, Sentence};
use crate::nlp::LanguageResources;
use crate::summarizer::Summarizer;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub struct LuhnSummarizer {
    resources: Arc<LanguageResources>,
}

impl LuhnSummarizer {
    /// Insignificant words allowed inside a chunk before it is closed.
    pub const MAX_GAP_SIZE: usize = 4;

    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    /// Stems of non stop words that occur more than once in the document.
    fn significant_words(&self, document: &ResolvedDocument) -> HashSet<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for term in document.words().filter_map(|w| self.resources.term(w)) {
            *counts.entry(term).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(term, _)| term)
            .collect()
    }

    fn rate_sentence(&self, sentence: &Sentence, significant: &HashSet<String>) -> f64 {
        let flags: Vec<bool> = sentence
            .words
            .iter()
            .map(|w| significant.contains(&self.resources.stem(w)))
            .collect();

        chunks(&flags)
            .iter()
            .map(|chunk| chunk_rating(chunk))
            .fold(0.0, f64::max)
    }
}

/// Splits a sentence into chunks that start at a significant word and end
/// once `MAX_GAP_SIZE` insignificant words follow in a row.
fn chunks(flags: &[bool]) -> Vec<Vec<bool>> {
    let gap = LuhnSummarizer::MAX_GAP_SIZE;
    let mut chunks: Vec<Vec<bool>> = Vec::new();
    let mut in_chunk = false;

    for &significant in flags {
        if significant && !in_chunk {
            in_chunk = true;
            chunks.push(vec![true]);
        } else if in_chunk && let Some(chunk) = chunks.last_mut() {
            chunk.push(significant);
        }

        if let Some(chunk) = chunks.last()
            && chunk.len() >= gap
            && chunk[chunk.len() - gap..].iter().all(|f| !f)
        {
            in_chunk = false;
        }
    }

    chunks
}

fn chunk_rating(chunk: &[bool]) -> f64 {
    let end = chunk.iter().rposition(|f| *f).map_or(0, |i| i + 1);
    let chunk = &chunk[..end];

    let significant = chunk.iter().filter(|f| **f).count();
    if significant <= 1 {
        0.0
    } else {
        (significant * significant) as f64 / chunk.len() as f64
    }
}

impl Summarizer for LuhnSummarizer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Luhn
    }

    fn rate_sentences(&self, document: &ResolvedDocument) -> Result<Vec<f64>> {
        let significant = self.significant_words(document);

        Ok(document
            .sentences()
            .iter()
            .map(|sentence| self.rate_sentence(sentence, &significant))
            .collect())
    }
}
