// file: src/summarizer/text_rank.rs
// description: TextRank summarizer over a damped word-overlap sentence graph
// reference: Mihalcea & Tarau, "TextRank: Bringing Order into Texts"

use crate::error::Result;
use crate::models::{Algorithm, ResolvedDocument};
use crate::nlp::LanguageResources;
use crate::summarizer::Summarizer;
use crate::summarizer::power::power_method;
use nalgebra::DMatrix;
use std::sync::Arc;

pub struct TextRankSummarizer {
    resources: Arc<LanguageResources>,
    damping: f64,
    epsilon: f64,
}

impl TextRankSummarizer {
    pub const DAMPING: f64 = 0.85;
    pub const EPSILON: f64 = 1e-4;
    const ZERO_DIVISION_PREVENTION: f64 = 1e-7;

    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self {
            resources,
            damping: Self::DAMPING,
            epsilon: Self::EPSILON,
        }
    }

    /// Overlap of two sentences normalized by the log of their lengths.
    fn rate_edge(words1: &[String], words2: &[String]) -> f64 {
        let rank: usize = words1
            .iter()
            .map(|w| words2.iter().filter(|other| *other == w).count())
            .sum();
        if rank == 0 {
            return 0.0;
        }

        let norm = (words1.len() as f64).ln() + (words2.len() as f64).ln();
        if norm.abs() < 1e-8 {
            rank as f64
        } else {
            rank as f64 / norm
        }
    }

    fn create_matrix(&self, sentences: &[Vec<String>]) -> DMatrix<f64> {
        let n = sentences.len();
        let mut weights = DMatrix::zeros(n, n);

        for i in 0..n {
            for j in i..n {
                let rating = Self::rate_edge(&sentences[i], &sentences[j]);
                weights[(i, j)] = rating;
                weights[(j, i)] = rating;
            }
        }

        for mut row in weights.row_iter_mut() {
            let total = row.sum() + Self::ZERO_DIVISION_PREVENTION;
            row /= total;
        }

        let teleport = (1.0 - self.damping) / n as f64;
        weights.map(|w| teleport + self.damping * w)
    }
}

impl Summarizer for TextRankSummarizer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::TextRank
    }

    fn rate_sentences(&self, document: &ResolvedDocument) -> Result<Vec<f64>> {
        let sentences: Vec<Vec<String>> = document
            .sentences()
            .iter()
            .map(|s| self.resources.terms(&s.words))
            .collect();
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        let matrix = self.create_matrix(&sentences);
        Ok(power_method(&matrix, self.epsilon).iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;
    use crate::summarizer::test_support::document;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn summarizer() -> TextRankSummarizer {
        TextRankSummarizer::new(Arc::new(LanguageResources::new(Language::English)))
    }

    #[test]
    fn test_edge_rating() {
        assert_eq!(TextRankSummarizer::rate_edge(&terms(&["a"]), &terms(&["b"])), 0.0);
        assert_eq!(TextRankSummarizer::rate_edge(&terms(&["a"]), &terms(&["a"])), 1.0);

        let rating = TextRankSummarizer::rate_edge(&terms(&["a", "b"]), &terms(&["a", "a"]));
        assert!((rating - 2.0 / (2.0f64.ln() * 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_rows_are_stochastic() {
        let sentences = [terms(&["a", "b"]), terms(&["b", "c"]), terms(&["d"])];
        let matrix = summarizer().create_matrix(&sentences);

        for row in matrix.row_iter() {
            assert!((row.sum() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hub_sentence_ranks_higher() {
        let doc = document(
            "Apple banana cherry mango. Apple fig. Banana grape. Cherry kiwi. Mango lemon.",
            Language::English,
        );
        let ratings = summarizer().rate_sentences(&doc).unwrap();

        assert_eq!(ratings.len(), 5);
        assert!(ratings[1..].iter().all(|leaf| ratings[0] > *leaf));
    }
}
