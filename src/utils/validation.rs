// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{Result, SummaryError};
use url::Url;

pub struct Validator;

impl Validator {
    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(SummaryError::Validation(
                "Please provide some text or a URL to summarize".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_input_length(content: &str, max_chars: usize) -> Result<()> {
        let length = content.chars().count();
        if length > max_chars {
            return Err(SummaryError::Validation(format!(
                "Input is too long ({} characters, max {})",
                length, max_chars
            )));
        }
        Ok(())
    }

    /// Parses an http(s) URL. Anything else is reported as a fetch failure
    /// for that URL since the input was routed to the fetcher.
    pub fn validate_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw).map_err(|e| SummaryError::fetch(raw, format!("invalid URL: {}", e)))?;

        let supported = matches!(url.scheme(), "http" | "https") && url.host_str().is_some();
        if !supported {
            return Err(SummaryError::fetch(
                raw,
                format!(
                    "unsupported URL (scheme {}, host {:?})",
                    url.scheme(),
                    url.host_str()
                ),
            ));
        }
        Ok(url)
    }

    pub fn validate_port(port: u16) -> Result<()> {
        if port == 0 {
            return Err(SummaryError::Validation("Port cannot be 0".to_string()));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((index, _)) => format!("{}...", &text[..index]),
            None => text.to_string(),
        }
    }
}
