// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SummaryError>;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Unknown summarization algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid sentence count: {0}")]
    InvalidSentenceCount(String),

    #[error("Failed to fetch {url}: {message}")]
    FetchFailure { url: String, message: String },

    #[error("Could not extract sentences: {0}")]
    ParseFailure(String),

    #[error("Summarization failed: {0}")]
    Summarization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SummaryError {
    pub fn fetch(url: impl Into<String>, message: impl ToString) -> Self {
        Self::FetchFailure {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Stable identifier used by the JSON API and in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage(_) => "unsupported_language",
            Self::UnknownAlgorithm(_) => "unknown_algorithm",
            Self::InvalidSentenceCount(_) => "invalid_sentence_count",
            Self::FetchFailure { .. } => "fetch_failure",
            Self::ParseFailure(_) => "parse_failure",
            Self::Summarization(_) => "summarization",
            Self::Config(_) => "config",
            Self::Validation(_) => "validation",
            Self::Io(_) => "io",
        }
    }

    /// True when the error was caused by what the user submitted rather
    /// than by a remote host or the server itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedLanguage(_)
                | Self::UnknownAlgorithm(_)
                | Self::InvalidSentenceCount(_)
                | Self::ParseFailure(_)
                | Self::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_message() {
        let err = SummaryError::fetch("http://example.invalid", "dns error");
        assert_eq!(err.kind(), "fetch_failure");
        assert_eq!(
            err.to_string(),
            "Failed to fetch http://example.invalid: dns error"
        );
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_input_errors() {
        assert!(SummaryError::UnsupportedLanguage("klingon".into()).is_input_error());
        assert!(SummaryError::InvalidSentenceCount("0".into()).is_input_error());
        assert!(!SummaryError::Summarization("svd".into()).is_input_error());
    }
}
