// file: src/pipeline/handler.rs
// description: resolves a summary request and runs the selected summarizer over it
// reference: one request is one resolve followed by one blocking summarization

use crate::config::Config;
use crate::error::{Result, SummaryError};
use crate::models::{
    Algorithm, DocumentSource, Language, ResolvedDocument, SentenceCount, SummaryRequest,
    SummaryResult,
};
use crate::nlp::LanguageResources;
use crate::parser::PlaintextParser;
use crate::resolver::{HttpFetcher, InputResolver, PageFetcher};
use crate::summarizer;
use crate::utils::{OperationTimer, Validator};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

const SLOW_SUMMARY: Duration = Duration::from_secs(5);

const SELF_CHECK_TEXT: &str = "Summaries keep the important sentences of a text. \
Extractive summaries copy sentences from the text unchanged. \
Short texts make quick checks.";

/// Ranks the sentences of `document` and returns the best ones in document order.
pub fn summarize(
    document: &ResolvedDocument,
    resources: Arc<LanguageResources>,
    count: SentenceCount,
    algorithm: Algorithm,
) -> Result<SummaryResult> {
    let timer = OperationTimer::new("summarize");
    let language = resources.language;

    let selected = summarizer::for_algorithm(algorithm, resources).summarize(document, count)?;
    let result = SummaryResult {
        sentences: selected.iter().map(|s| s.text.clone()).collect(),
        algorithm,
        language,
        requested: count.resolve(document.sentence_count()),
        source_sentences: document.sentence_count(),
        title: document.title.clone(),
    };

    timer.warn_if_slow(SLOW_SUMMARY, algorithm.label());
    timer.finish();
    Ok(result)
}

/// [`summarize`] for a language given by its code. Unknown codes fail with
/// `UnsupportedLanguage` before any ranking happens.
pub fn summarize_with_language(
    document: &ResolvedDocument,
    language: &str,
    count: SentenceCount,
    algorithm: Algorithm,
) -> Result<SummaryResult> {
    let resources = LanguageResources::for_code(language)?;
    summarize(document, Arc::new(resources), count, algorithm)
}

pub struct SummaryService {
    resolver: InputResolver,
    resources: HashMap<Language, Arc<LanguageResources>>,
}

impl SummaryService {
    pub fn new(fetcher: Arc<dyn PageFetcher>, max_input_chars: usize) -> Self {
        let resources = Language::ALL
            .iter()
            .map(|language| (*language, Arc::new(LanguageResources::new(*language))))
            .collect();

        Self {
            resolver: InputResolver::new(fetcher, max_input_chars),
            resources,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.fetch)?;
        Ok(Self::new(Arc::new(fetcher), config.summary.max_input_chars))
    }

    pub fn resources(&self, language: Language) -> Result<Arc<LanguageResources>> {
        self.resources
            .get(&language)
            .cloned()
            .ok_or_else(|| SummaryError::UnsupportedLanguage(language.to_string()))
    }

    #[instrument(skip(self, request), fields(language = %request.language, algorithm = %request.algorithm, url = request.is_url()))]
    pub async fn handle(&self, request: &SummaryRequest) -> Result<SummaryResult> {
        let resources = self.resources(request.language)?;
        info!(
            "Summarizing \"{}\"",
            Validator::truncate_text(request.raw_input.trim(), 60)
        );
        let document = self
            .resolver
            .resolve(&request.raw_input, request.language)
            .await?;

        let count = request.sentence_count;
        let algorithm = request.algorithm;
        let result = tokio::task::spawn_blocking(move || {
            summarize(&document, resources, count, algorithm)
        })
        .await
        .map_err(|e| SummaryError::Summarization(format!("Summarization task failed: {}", e)))??;

        info!(
            "Selected {} of {} sentences",
            result.len(),
            result.source_sentences
        );
        Ok(result)
    }

    /// Summarizes a short built-in text with every algorithm, used by `/health`.
    pub fn self_check(&self) -> Result<()> {
        let resources = self.resources(Language::English)?;
        let paragraphs = PlaintextParser::new(&resources.tokenizer).parse(SELF_CHECK_TEXT);
        let document = ResolvedDocument::new(DocumentSource::Text, Language::English, paragraphs);

        for algorithm in Algorithm::ALL {
            let result = summarize(
                &document,
                Arc::clone(&resources),
                SentenceCount::Absolute(1),
                algorithm,
            )?;
            if result.len() != 1 {
                return Err(SummaryError::Summarization(format!(
                    "{} selected {} sentences instead of 1",
                    algorithm,
                    result.len()
                )));
            }
        }

        Ok(())
    }

    /// Same as [`handle`](Self::handle) for untyped field values. Invalid
    /// selectors are rejected before any input is resolved.
    pub async fn handle_fields(
        &self,
        raw_input: &str,
        language: &str,
        sentences: &str,
        algorithm: &str,
    ) -> Result<SummaryResult> {
        let request = SummaryRequest::parse(raw_input, language, sentences, algorithm)?;
        self.handle(&request).await
    }
}
