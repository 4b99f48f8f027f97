// file: src/parser/mod.rs
// description: plain text and html parsing module exports
// reference: internal module structure

pub mod html;
pub mod normalizer;
pub mod plaintext;

pub use html::{HtmlParser, ParsedPage};
pub use normalizer::TextNormalizer;
pub use plaintext::PlaintextParser;
