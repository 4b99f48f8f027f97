// file: src/server/page.rs
// description: html rendering of the summary form and its result
// reference: server-side string templates

use crate::models::{Algorithm, Language, SummaryResult};

/// Field values echoed back into the form after a submit.
#[derive(Debug, Clone)]
pub struct FormState {
    pub text: String,
    pub language: String,
    pub sentences: String,
    pub algorithm: String,
}

#[derive(Debug)]
pub enum Outcome {
    /// Nothing submitted yet.
    Empty,
    Summary(SummaryResult),
    Error(String),
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
h1 { font-weight: 600; }
form { display: grid; gap: 0.75rem; }
textarea { width: 100%; min-height: 12rem; font: inherit; }
.controls { display: flex; flex-wrap: wrap; gap: 1.5rem; align-items: center; }
.summary { margin-top: 2rem; border-top: 1px solid #ddd; }
.meta { color: #666; font-size: 0.9rem; }
.error { margin-top: 2rem; color: #a40000; }
"#;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn language_select(selected: &str) -> String {
    let selected = selected.trim().to_lowercase();
    let options: String = Language::ALL
        .iter()
        .map(|language| {
            let mark = if language.code() == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                language.code(),
                mark,
                language.label()
            )
        })
        .collect();

    format!(
        r#"<label>Language <select name="language">{}</select></label>"#,
        options
    )
}

fn algorithm_radios(selected: &str) -> String {
    let selected = selected.parse::<Algorithm>().ok();
    let radios: String = Algorithm::ALL
        .iter()
        .map(|algorithm| {
            let mark = if Some(*algorithm) == selected { " checked" } else { "" };
            format!(
                r#"<label><input type="radio" name="algorithm" value="{}"{}> {}</label>"#,
                algorithm.code(),
                mark,
                algorithm.label()
            )
        })
        .collect();

    format!(r#"<fieldset><legend>Algorithm</legend>{}</fieldset>"#, radios)
}

fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Empty => String::new(),
        Outcome::Error(message) => {
            format!(r#"<div class="error">{}</div>"#, html_escape(message))
        }
        Outcome::Summary(result) => {
            let title = result
                .title
                .as_deref()
                .map(|t| format!("<h2>{}</h2>", html_escape(t)))
                .unwrap_or_default();
            let sentences: String = result
                .sentences
                .iter()
                .map(|s| format!(r#"<p class="sentence">{}</p>"#, html_escape(s)))
                .collect();

            format!(
                r#"<section class="summary">{}<p class="meta">{} selected {} of {} sentences</p>{}</section>"#,
                title,
                result.algorithm,
                result.len(),
                result.source_sentences,
                sentences
            )
        }
    }
}

pub fn render_page(form: &FormState, algorithm_choice: bool, outcome: &Outcome) -> String {
    let algorithms = if algorithm_choice {
        algorithm_radios(&form.algorithm)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AutoSummary</title>
    <style>{style}</style>
</head>
<body>
    <h1>AutoSummary</h1>
    <form method="post" action="/">
        <div class="controls">
            {languages}
            <label>Sentences <input type="text" name="sentences" value="{sentences}" size="5"></label>
        </div>
        {algorithms}
        <textarea name="text" placeholder="Paste text or a URL starting with http">{text}</textarea>
        <button type="submit">Summarize</button>
    </form>
    {outcome}
</body>
</html>"#,
        style = STYLE,
        languages = language_select(&form.language),
        sentences = html_escape(&form.sentences),
        algorithms = algorithms,
        text = html_escape(&form.text),
        outcome = render_outcome(outcome),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormState {
        FormState {
            text: String::new(),
            language: "czech".to_string(),
            sentences: "20%".to_string(),
            algorithm: "TextRank".to_string(),
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
        );
    }

    #[test]
    fn test_selected_values_echoed() {
        let html = render_page(&form(), true, &Outcome::Empty);
        assert!(html.contains(r#"<option value="czech" selected>Czech</option>"#));
        assert!(html.contains(r#"value="textrank" checked"#));
        assert!(html.contains(r#"value="20%""#));
    }

    #[test]
    fn test_error_outcome() {
        let html = render_page(&form(), false, &Outcome::Error("bad <input>".to_string()));
        assert!(html.contains(r#"<div class="error">bad &lt;input&gt;</div>"#));
        assert!(!html.contains("<fieldset>"));
    }
}
