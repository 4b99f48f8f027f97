// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod request;
pub mod summary;

pub use document::{DocumentSource, Paragraph, ResolvedDocument, Sentence};
pub use request::{Algorithm, Language, SentenceCount, SummaryRequest, is_url_input};
pub use summary::{SENTENCE_SEPARATOR, SummaryResult};
