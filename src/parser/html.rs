// file: src/parser/html.rs
// description: readable text extraction from html pages
// reference: https://docs.rs/scraper

use crate::models::{Paragraph, Sentence};
use crate::nlp::Tokenizer;
use crate::parser::TextNormalizer;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

lazy_static! {
    static ref TITLE: Selector = Selector::parse("title").expect("title selector is valid");
    static ref CONTENT_ROOTS: Vec<Selector> = ["article", "main", "[role=main]", "body"]
        .iter()
        .map(|s| Selector::parse(s).expect("content root selector is valid"))
        .collect();
}

const SKIPPED: &[&str] = &[
    "head", "title", "script", "style", "noscript", "template", "nav", "header", "footer", "aside",
    "form", "svg", "iframe", "button", "select",
];
const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];
const BLOCKS: &[&str] = &[
    "p",
    "li",
    "blockquote",
    "pre",
    "td",
    "dd",
    "dt",
    "figcaption",
];
const INLINE: &[&str] = &[
    "a", "abbr", "b", "cite", "code", "em", "i", "mark", "q", "s", "small", "span", "strong",
    "sub", "sup", "time", "u",
];

#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    pub title: Option<String>,
    pub paragraphs: Vec<Paragraph>,
}

enum Block {
    Heading(String),
    Text(String),
}

pub struct HtmlParser<'a> {
    tokenizer: &'a Tokenizer,
    normalizer: TextNormalizer,
}

impl<'a> HtmlParser<'a> {
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        Self {
            tokenizer,
            normalizer: TextNormalizer::new(),
        }
    }

    /// Never fails: broken markup is repaired by the html5ever tree builder
    /// and whatever text survives is used.
    pub fn parse(&self, html: &str) -> ParsedPage {
        let document = Html::parse_document(html);

        let title = document
            .select(&TITLE)
            .next()
            .map(|t| self.normalizer.collapse(&t.text().collect::<String>()))
            .filter(|t| !t.is_empty());

        let root = CONTENT_ROOTS
            .iter()
            .find_map(|selector| document.select(selector).next())
            .unwrap_or_else(|| document.root_element());

        let mut blocks = Vec::new();
        self.collect_blocks(root, &mut blocks);

        if !blocks.iter().any(|b| matches!(b, Block::Text(_))) {
            debug!("No block elements with text found, falling back to full page text");
            let mut text = String::new();
            collect_text(root, &mut text);
            let text = self.normalizer.collapse(&text);
            if !text.is_empty() {
                blocks.push(Block::Text(text));
            }
        }

        ParsedPage {
            title,
            paragraphs: self.to_paragraphs(blocks),
        }
    }

    /// Block elements become blocks of their own. Loose text and inline
    /// elements between them are gathered into text blocks.
    fn collect_blocks(&self, element: ElementRef<'_>, blocks: &mut Vec<Block>) {
        let mut loose = String::new();

        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                loose.push_str(text);
                continue;
            }
            let Some(child) = ElementRef::wrap(child) else {
                continue;
            };
            let name = child.value().name();

            if SKIPPED.contains(&name) {
                continue;
            }
            if INLINE.contains(&name) {
                collect_text(child, &mut loose);
                continue;
            }

            self.flush_loose(&mut loose, blocks);
            if HEADINGS.contains(&name) {
                let text = self.element_text(child);
                if !text.is_empty() {
                    blocks.push(Block::Heading(text));
                }
            } else if BLOCKS.contains(&name) {
                let text = self.element_text(child);
                if !text.is_empty() {
                    blocks.push(Block::Text(text));
                }
            } else {
                self.collect_blocks(child, blocks);
            }
        }

        self.flush_loose(&mut loose, blocks);
    }

    fn flush_loose(&self, loose: &mut String, blocks: &mut Vec<Block>) {
        let text = self.normalizer.collapse(loose);
        loose.clear();
        if !text.is_empty() {
            blocks.push(Block::Text(text));
        }
    }

    fn element_text(&self, element: ElementRef<'_>) -> String {
        let mut text = String::new();
        collect_text(element, &mut text);
        self.normalizer.collapse(&text)
    }

    /// A heading starts a new paragraph; text blocks are paragraphs of their own.
    fn to_paragraphs(&self, blocks: Vec<Block>) -> Vec<Paragraph> {
        let mut paragraphs = Vec::new();
        let mut pending_headings = Vec::new();

        for block in blocks {
            match block {
                Block::Heading(text) => {
                    let words = self.tokenizer.words(&text);
                    pending_headings.push(Sentence::heading(text, words));
                }
                Block::Text(text) => {
                    let mut sentences = std::mem::take(&mut pending_headings);
                    sentences.extend(self.tokenizer.sentences(&text).into_iter().map(|s| {
                        let words = self.tokenizer.words(&s);
                        Sentence::new(s, words)
                    }));
                    paragraphs.push(Paragraph::new(sentences));
                }
            }
        }

        if !pending_headings.is_empty() {
            paragraphs.push(Paragraph::new(pending_headings));
        }

        paragraphs
    }
}

/// Text content of an element, leaving out skipped subtrees.
fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            let name = child.value().name();
            if SKIPPED.contains(&name) {
                continue;
            }
            if INLINE.contains(&name) {
                collect_text(child, out);
            } else {
                out.push(' ');
                collect_text(child, out);
                out.push(' ');
            }
        }
    }
}
