// file: src/pipeline/mod.rs
// description: summary request handling module exports
// reference: internal module structure

mod handler;

pub use handler::{SummaryService, summarize, summarize_with_language};
