// file: src/summarizer/mod.rs
// description: extractive summarizer trait, sentence selection and algorithm dispatch
// reference: internal module structure

pub mod lex_rank;
pub mod lsa;
pub mod luhn;
pub mod power;
pub mod text_rank;

pub use lex_rank::LexRankSummarizer;
pub use lsa::LsaSummarizer;
pub use luhn::LuhnSummarizer;
pub use text_rank::TextRankSummarizer;

use crate::error::{Result, SummaryError};
use crate::models::{Algorithm, ResolvedDocument, Sentence, SentenceCount};
use crate::nlp::LanguageResources;
use std::sync::Arc;

pub trait Summarizer: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// One rating per body sentence, in document order. An empty vector means
    /// the document has nothing the algorithm can rate.
    fn rate_sentences(&self, document: &ResolvedDocument) -> Result<Vec<f64>>;

    /// Best rated sentences, returned in document order.
    fn summarize<'d>(
        &self,
        document: &'d ResolvedDocument,
        count: SentenceCount,
    ) -> Result<Vec<&'d Sentence>> {
        let sentences = document.sentences();
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        let ratings = self.rate_sentences(document)?;
        if ratings.is_empty() {
            return Ok(Vec::new());
        }
        if ratings.len() != sentences.len() {
            return Err(SummaryError::Summarization(format!(
                "{} produced {} ratings for {} sentences",
                self.algorithm(),
                ratings.len(),
                sentences.len()
            )));
        }

        Ok(select_best(
            &sentences,
            &ratings,
            count.resolve(sentences.len()),
        ))
    }
}

pub fn for_algorithm(
    algorithm: Algorithm,
    resources: Arc<LanguageResources>,
) -> Box<dyn Summarizer> {
    match algorithm {
        Algorithm::Lsa => Box::new(LsaSummarizer::new(resources)),
        Algorithm::LexRank => Box::new(LexRankSummarizer::new(resources)),
        Algorithm::Luhn => Box::new(LuhnSummarizer::new(resources)),
        Algorithm::TextRank => Box::new(TextRankSummarizer::new(resources)),
    }
}

/// Takes the `count` highest rated sentences and puts them back in document
/// order. Equal ratings keep document order; NaN ranks last.
pub fn select_best<'d>(sentences: &[&'d Sentence], ratings: &[f64], count: usize) -> Vec<&'d Sentence> {
    let mut ranked: Vec<(usize, f64)> = ratings
        .iter()
        .map(|r| if r.is_nan() { f64::NEG_INFINITY } else { *r })
        .enumerate()
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut chosen: Vec<usize> = ranked.into_iter().take(count).map(|(i, _)| i).collect();
    chosen.sort_unstable();

    chosen.into_iter().map(|i| sentences[i]).collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::{ARTICLE, document};
    use super::*;
    use crate::models::Language;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_best_keeps_document_order() {
        let a = Sentence::new("a", vec![]);
        let b = Sentence::new("b", vec![]);
        let c = Sentence::new("c", vec![]);
        let sentences = vec![&a, &b, &c];

        let best = select_best(&sentences, &[0.1, 0.9, 0.5], 2);
        let texts: Vec<&str> = best.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn test_select_best_ties_and_nan() {
        let a = Sentence::new("a", vec![]);
        let b = Sentence::new("b", vec![]);
        let c = Sentence::new("c", vec![]);
        let sentences = vec![&a, &b, &c];

        let best = select_best(&sentences, &[f64::NAN, 1.0, 1.0], 2);
        let texts: Vec<&str> = best.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);

        let best = select_best(&sentences, &[0.0, 0.0, 0.0], 1);
        assert_eq!(best[0].text, "a");
    }

    #[test]
    fn test_every_algorithm_returns_requested_count() {
        let resources = Arc::new(LanguageResources::new(Language::English));
        let doc = document(ARTICLE, Language::English);
        let total = doc.sentence_count();
        assert_eq!(total, 6);

        for algorithm in Algorithm::ALL {
            let summarizer = for_algorithm(algorithm, Arc::clone(&resources));
            assert_eq!(summarizer.algorithm(), algorithm);

            for k in 1..=total {
                let selected = summarizer
                    .summarize(&doc, SentenceCount::Absolute(k))
                    .unwrap();
                assert_eq!(selected.len(), k, "{algorithm} with k={k}");
            }

            let selected = summarizer
                .summarize(&doc, SentenceCount::Absolute(total + 5))
                .unwrap();
            assert_eq!(selected.len(), total, "{algorithm} never exceeds source");
        }
    }

    #[test]
    fn test_selection_is_in_document_order() {
        let resources = Arc::new(LanguageResources::new(Language::English));
        let doc = document(ARTICLE, Language::English);
        let order: Vec<&str> = doc.sentences().iter().map(|s| s.text.as_str()).collect();

        for algorithm in Algorithm::ALL {
            let summarizer = for_algorithm(algorithm, Arc::clone(&resources));
            let selected = summarizer.summarize(&doc, SentenceCount::Absolute(3)).unwrap();
            let positions: Vec<usize> = selected
                .iter()
                .map(|s| order.iter().position(|o| *o == s.text).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "{algorithm}");
        }
    }

    #[test]
    fn test_algorithms_are_deterministic() {
        let resources = Arc::new(LanguageResources::new(Language::English));
        let doc = document(ARTICLE, Language::English);

        for algorithm in Algorithm::ALL {
            let summarizer = for_algorithm(algorithm, Arc::clone(&resources));
            let first = summarizer.rate_sentences(&doc).unwrap();
            let second = summarizer.rate_sentences(&doc).unwrap();
            assert_eq!(first, second, "{algorithm}");
        }
    }

    #[test]
    fn test_headings_never_selected() {
        let resources = Arc::new(LanguageResources::new(Language::English));
        let text = format!("RUST MEMORY SAFETY COMPILER\n{}", ARTICLE);
        let doc = document(&text, Language::English);

        for algorithm in Algorithm::ALL {
            let summarizer = for_algorithm(algorithm, Arc::clone(&resources));
            let selected = summarizer
                .summarize(&doc, SentenceCount::Absolute(10))
                .unwrap();
            assert!(selected.iter().all(|s| !s.is_heading), "{algorithm}");
        }
    }
}
