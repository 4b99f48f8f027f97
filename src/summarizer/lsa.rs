// file: src/summarizer/lsa.rs
// description: latent semantic analysis summarizer
// reference: Steinberger & Ježek, "Using Latent Semantic Analysis in Text Summarization"

use crate::error::{Result, SummaryError};
use crate::models::{Algorithm, ResolvedDocument};
use crate::nlp::LanguageResources;
use crate::summarizer::Summarizer;
use nalgebra::DMatrix;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct LsaSummarizer {
    resources: Arc<LanguageResources>,
}

impl LsaSummarizer {
    pub const MIN_DIMENSIONS: usize = 3;
    pub const REDUCTION_RATIO: f64 = 1.0;
    pub const SMOOTHING: f64 = 0.4;
    /// SVD cost grows with terms × sentences², so larger documents are refused.
    pub const MAX_SENTENCES: usize = 500;
    pub const MAX_TERMS: usize = 5_000;

    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    fn create_dictionary(&self, document: &ResolvedDocument) -> BTreeMap<String, usize> {
        let mut terms: Vec<String> = document
            .words()
            .filter_map(|w| self.resources.term(w))
            .collect();
        terms.sort_unstable();
        terms.dedup();

        terms.into_iter().enumerate().map(|(i, t)| (t, i)).collect()
    }

    fn create_matrix(
        &self,
        document: &ResolvedDocument,
        dictionary: &BTreeMap<String, usize>,
    ) -> DMatrix<f64> {
        let sentences = document.sentences();
        let mut matrix = DMatrix::zeros(dictionary.len(), sentences.len());

        if dictionary.len() < sentences.len() {
            warn!(
                "Number of words ({}) is lower than number of sentences ({}), LSA may not work well",
                dictionary.len(),
                sentences.len()
            );
        }

        for (col, sentence) in sentences.iter().enumerate() {
            for term in self.resources.terms(&sentence.words) {
                if let Some(&row) = dictionary.get(&term) {
                    matrix[(row, col)] += 1.0;
                }
            }
        }

        matrix
    }

    /// Per-sentence term frequency, smoothed so absent terms keep a small weight.
    fn compute_term_frequency(matrix: &mut DMatrix<f64>) {
        for mut column in matrix.column_iter_mut() {
            let max_frequency = column.max();
            if max_frequency != 0.0 {
                for value in column.iter_mut() {
                    *value = Self::SMOOTHING + (1.0 - Self::SMOOTHING) * (*value / max_frequency);
                }
            }
        }
    }

    fn check_size(sentences: usize, terms: usize) -> Result<()> {
        if sentences > Self::MAX_SENTENCES || terms > Self::MAX_TERMS {
            return Err(SummaryError::Validation(format!(
                "Document is too large for LSA ({} sentences, {} distinct terms; max {} and {}), \
                 try another algorithm",
                sentences,
                terms,
                Self::MAX_SENTENCES,
                Self::MAX_TERMS
            )));
        }
        Ok(())
    }

    fn compute_ranks(sigma: &[f64], v_t: &DMatrix<f64>) -> Vec<f64> {
        let dimensions = Self::MIN_DIMENSIONS
            .max((sigma.len() as f64 * Self::REDUCTION_RATIO) as usize);
        let powered_sigma: Vec<f64> = sigma
            .iter()
            .enumerate()
            .map(|(i, s)| if i < dimensions { s * s } else { 0.0 })
            .collect();

        v_t.column_iter()
            .map(|column| {
                column
                    .iter()
                    .zip(&powered_sigma)
                    .map(|(v, s)| s * v * v)
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    }
}

impl Summarizer for LsaSummarizer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lsa
    }

    fn rate_sentences(&self, document: &ResolvedDocument) -> Result<Vec<f64>> {
        let sentence_count = document.sentence_count();
        Self::check_size(sentence_count, 0)?;

        let dictionary = self.create_dictionary(document);
        if dictionary.is_empty() {
            debug!("LSA dictionary is empty, nothing to rate");
            return Ok(Vec::new());
        }
        Self::check_size(sentence_count, dictionary.len())?;

        let mut matrix = self.create_matrix(document, &dictionary);
        Self::compute_term_frequency(&mut matrix);

        let svd = matrix
            .try_svd(false, true, f64::EPSILON, 0)
            .ok_or_else(|| SummaryError::Summarization("SVD did not converge".to_string()))?;
        let v_t = svd
            .v_t
            .ok_or_else(|| SummaryError::Summarization("SVD returned no V matrix".to_string()))?;
        let sigma: Vec<f64> = svd.singular_values.iter().copied().collect();

        Ok(Self::compute_ranks(&sigma, &v_t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, SentenceCount};
    use crate::summarizer::test_support::{ARTICLE, document};

    fn summarizer() -> LsaSummarizer {
        LsaSummarizer::new(Arc::new(LanguageResources::new(Language::English)))
    }

    #[test]
    fn test_three_sentence_example() {
        let doc = document(
            "Hello world. This is a test. Final sentence.",
            Language::English,
        );
        let selected = summarizer()
            .summarize(&doc, SentenceCount::Absolute(2))
            .unwrap();

        assert_eq!(selected.len(), 2);
        let order = ["Hello world.", "This is a test.", "Final sentence."];
        let positions: Vec<usize> = selected
            .iter()
            .map(|s| order.iter().position(|o| *o == s.text).unwrap())
            .collect();
        assert!(positions[0] < positions[1]);
    }

    #[test]
    fn test_term_frequency_smoothing() {
        let mut matrix = DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 1.0, 0.0]);
        LsaSummarizer::compute_term_frequency(&mut matrix);

        assert!((matrix[(0, 0)] - 1.0).abs() < 1e-12);
        assert!((matrix[(1, 0)] - 0.7).abs() < 1e-12);
        assert_eq!(matrix[(0, 1)], 0.0);
    }

    #[test]
    fn test_stop_words_only_document() {
        let doc = document("It is what it is. And so it was.", Language::English);
        assert!(summarizer().rate_sentences(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_ratings_cover_every_sentence() {
        let doc = document(ARTICLE, Language::English);
        let ratings = summarizer().rate_sentences(&doc).unwrap();
        assert_eq!(ratings.len(), doc.sentence_count());
        assert!(ratings.iter().all(|r| r.is_finite() && *r >= 0.0));
    }

    #[test]
    fn test_oversized_document_is_rejected() {
        let text: String = (0..=LsaSummarizer::MAX_SENTENCES)
            .map(|i| format!("Sentence {} mentions topic{}. ", i, i))
            .collect();
        let doc = document(&text, Language::English);
        assert!(doc.sentence_count() > LsaSummarizer::MAX_SENTENCES);

        let result = summarizer().summarize(&doc, SentenceCount::Absolute(3));
        assert!(matches!(result, Err(SummaryError::Validation(_))));
    }

    #[test]
    fn test_dictionary_size_limit() {
        assert!(LsaSummarizer::check_size(10, LsaSummarizer::MAX_TERMS).is_ok());
        assert!(matches!(
            LsaSummarizer::check_size(10, LsaSummarizer::MAX_TERMS + 1),
            Err(SummaryError::Validation(_))
        ));
    }
}
