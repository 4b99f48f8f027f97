// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod models;
pub mod nlp;
pub mod parser;
pub mod pipeline;
pub mod resolver;
pub mod server;
pub mod summarizer;
pub mod utils;

pub use config::{Config, FetchConfig, ServerConfig, SummaryConfig};
pub use error::{Result, SummaryError};
pub use models::{
    Algorithm, DocumentSource, Language, ResolvedDocument, Sentence, SentenceCount,
    SummaryRequest, SummaryResult,
};
pub use nlp::LanguageResources;
pub use pipeline::{SummaryService, summarize, summarize_with_language};
pub use resolver::{HttpFetcher, InputResolver, PageFetcher};
pub use summarizer::Summarizer;
pub use utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer, Validator};
