// file: src/resolver/mod.rs
// description: turns raw user input into a parsed document, fetching urls when needed
// reference: internal module structure

pub mod fetcher;

pub use fetcher::{HttpFetcher, PageFetcher};

use crate::error::{Result, SummaryError};
use crate::models::{DocumentSource, Language, ResolvedDocument, is_url_input};
use crate::nlp::Tokenizer;
use crate::parser::{HtmlParser, PlaintextParser};
use crate::utils::{OperationTimer, Validator};
use std::sync::Arc;
use tracing::{debug, info};

pub struct InputResolver {
    fetcher: Arc<dyn PageFetcher>,
    max_input_chars: usize,
}

impl InputResolver {
    pub fn new(fetcher: Arc<dyn PageFetcher>, max_input_chars: usize) -> Self {
        Self {
            fetcher,
            max_input_chars,
        }
    }

    /// Inputs starting with `http` are fetched and parsed as HTML, anything
    /// else is parsed as plain text without touching the network.
    pub async fn resolve(&self, raw_input: &str, language: Language) -> Result<ResolvedDocument> {
        let timer = OperationTimer::new("resolve");
        let tokenizer = Tokenizer::new(language);

        let document = if is_url_input(raw_input) {
            let url = Validator::validate_url(raw_input.trim())?;
            info!("Fetching {}", url);

            let html = self.fetcher.fetch(url.as_str()).await?;
            let page = HtmlParser::new(&tokenizer).parse(&html);
            let document =
                ResolvedDocument::new(DocumentSource::Url(url.to_string()), language, page.paragraphs)
                    .with_title(page.title);
            if document.char_count() > self.max_input_chars {
                return Err(SummaryError::Validation(format!(
                    "Page text is too long ({} characters, max {})",
                    document.char_count(),
                    self.max_input_chars
                )));
            }
            document
        } else {
            Validator::validate_input_length(raw_input, self.max_input_chars)?;
            let paragraphs = PlaintextParser::new(&tokenizer).parse(raw_input);
            ResolvedDocument::new(DocumentSource::Text, language, paragraphs)
        };

        if document.is_empty() {
            return Err(SummaryError::ParseFailure(match &document.source {
                DocumentSource::Url(url) => format!("no readable sentences found at {}", url),
                DocumentSource::Text => "no sentences found in the input text".to_string(),
            }));
        }

        debug!(
            "Resolved document {} with {} sentences",
            document.fingerprint,
            document.sentence_count()
        );
        timer.finish();

        Ok(document)
    }
}
