// file: src/summarizer/lex_rank.rs
// description: LexRank summarizer using idf-modified cosine similarity
// reference: Erkan & Radev, "LexRank: Graph-based Lexical Centrality as Salience in Text Summarization"

use crate::error::Result;
use crate::models::{Algorithm, ResolvedDocument};
use crate::nlp::LanguageResources;
use crate::summarizer::Summarizer;
use crate::summarizer::power::power_method;
use nalgebra::DMatrix;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

type TermWeights = HashMap<String, f64>;

pub struct LexRankSummarizer {
    resources: Arc<LanguageResources>,
    threshold: f64,
    epsilon: f64,
}

impl LexRankSummarizer {
    pub const THRESHOLD: f64 = 0.1;
    pub const EPSILON: f64 = 0.1;

    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self {
            resources,
            threshold: Self::THRESHOLD,
            epsilon: Self::EPSILON,
        }
    }

    /// Term counts of each sentence divided by that sentence's highest count.
    fn compute_tf(sentences: &[Vec<String>]) -> Vec<TermWeights> {
        sentences
            .iter()
            .map(|terms| {
                let mut counts: TermWeights = HashMap::new();
                for term in terms {
                    *counts.entry(term.clone()).or_insert(0.0) += 1.0;
                }
                let max_tf = counts.values().copied().fold(0.0, f64::max).max(1.0);
                for value in counts.values_mut() {
                    *value /= max_tf;
                }
                counts
            })
            .collect()
    }

    fn compute_idf(sentences: &[Vec<String>]) -> TermWeights {
        let sets: Vec<HashSet<&String>> = sentences.iter().map(|s| s.iter().collect()).collect();
        let total = sentences.len() as f64;
        let mut idf: TermWeights = HashMap::new();

        for set in &sets {
            for term in set {
                if idf.contains_key(*term) {
                    continue;
                }
                let containing = sets.iter().filter(|s| s.contains(*term)).count() as f64;
                idf.insert((*term).clone(), (total / (1.0 + containing)).ln());
            }
        }

        idf
    }

    fn cosine_similarity(tf1: &TermWeights, tf2: &TermWeights, idf: &TermWeights) -> f64 {
        let weight = |term: &String| idf.get(term).copied().unwrap_or(0.0);

        let numerator: f64 = tf1
            .iter()
            .filter_map(|(term, a)| tf2.get(term).map(|b| a * b * weight(term).powi(2)))
            .sum();
        let denominator1: f64 = tf1.iter().map(|(t, a)| (a * weight(t)).powi(2)).sum();
        let denominator2: f64 = tf2.iter().map(|(t, b)| (b * weight(t)).powi(2)).sum();

        if denominator1 > 0.0 && denominator2 > 0.0 {
            numerator / (denominator1.sqrt() * denominator2.sqrt())
        } else {
            0.0
        }
    }

    fn create_matrix(&self, tf: &[TermWeights], idf: &TermWeights) -> DMatrix<f64> {
        let n = tf.len();
        let mut matrix = DMatrix::zeros(n, n);

        for row in 0..n {
            let mut degree = 0.0;
            for col in 0..n {
                if Self::cosine_similarity(&tf[row], &tf[col], idf) > self.threshold {
                    matrix[(row, col)] = 1.0;
                    degree += 1.0;
                }
            }
            if degree > 0.0 {
                for col in 0..n {
                    matrix[(row, col)] /= degree;
                }
            }
        }

        matrix
    }
}

impl Summarizer for LexRankSummarizer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::LexRank
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

        let tf = Self::compute_tf(&sentences);
        let idf = Self::compute_idf(&sentences);
        let matrix = self.create_matrix(&tf, &idf);

        Ok(power_method(&matrix, self.epsilon).iter().copied().collect())
    }
}
