// file: src/server/mod.rs
// description: web UI and JSON API for summarizing text and web pages
// reference: https://docs.rs/axum

mod handlers;
mod page;
mod routes;

pub use routes::create_router;

use crate::config::Config;
use crate::error::Result;
use crate::pipeline::SummaryService;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Immutable state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<SummaryService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let service = SummaryService::from_config(&config)?;
        Ok(Self::with_service(config, service))
    }

    pub fn with_service(config: Config, service: SummaryService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
            started_at: Instant::now(),
        }
    }
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::test_support::StaticFetcher;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    const PAGE: &str = "<html><head><title>Crabs</title></head><body><article>\
        <p>Ferris the crab is the Rust mascot. Crabs walk sideways on the beach. \
        Ferris appears on many Rust stickers.</p></article></body></html>";

    fn app_with(config: Config) -> axum::Router {
        let service = SummaryService::new(StaticFetcher::new(PAGE), config.summary.max_input_chars);
        create_router(AppState::with_service(config, service))
    }

    fn app() -> axum::Router {
        app_with(Config::default_config())
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_has_form_and_no_result() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"<textarea name="text""#));
        assert!(html.contains(r#"<option value="english" selected>"#));
        assert!(html.contains(r#"name="sentences" value="10""#));
        assert!(html.contains(r#"value="lsa" checked"#));
        assert!(!html.contains(r#"class="summary""#));
    }

    #[tokio::test]
    async fn test_form_post_renders_summary() {
        let response = app()
            .oneshot(form_request(
                "text=Hello+world.+This+is+a+test.+Final+sentence.&language=english&sentences=2&algorithm=lsa",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"class="summary""#));
        assert_eq!(html.matches("<p class=\"sentence\">").count(), 2);
        assert!(html.contains("Hello world. This is a test. Final sentence.</textarea>"));
    }

    #[tokio::test]
    async fn test_form_post_shows_error() {
        let response = app()
            .oneshot(form_request("text=Some+text.&language=klingon&sentences=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = body_string(response).await;
        assert!(html.contains(r#"class="error""#));
        assert!(html.contains("Unsupported language: klingon"));
    }

    #[tokio::test]
    async fn test_form_escapes_input() {
        let response = app()
            .oneshot(form_request("text=%3Cscript%3Ealert(1)%3C%2Fscript%3E+is+bad.&sentences=1"))
            .await
            .unwrap();

        let html = body_string(response).await;
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_algorithm_selector_hidden() {
        let mut config = Config::default_config();
        config.server.algorithm_choice = false;
        config.summary.default_algorithm = crate::models::Algorithm::Luhn;

        let response = app_with(config.clone())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(!html.contains(r#"name="algorithm""#));

        let response = app_with(config)
            .oneshot(json_request(
                "/api/summarize",
                serde_json::json!({"text": "One sentence here. Another one there.", "algorithm": "lsa"}),
            ))
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["algorithm"], "luhn");
    }

    #[tokio::test]
    async fn test_api_summarize_url() {
        let response = app()
            .oneshot(json_request(
                "/api/summarize",
                serde_json::json!({
                    "text": "https://example.com/crabs",
                    "language": "english",
                    "sentences": 2,
                    "algorithm": "textrank"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["sentences"].as_array().unwrap().len(), 2);
        assert_eq!(json["algorithm"], "textrank");
        assert_eq!(json["language"], "english");
        assert_eq!(json["title"], "Crabs");
    }

    #[tokio::test]
    async fn test_api_accepts_percentage() {
        let response = app()
            .oneshot(json_request(
                "/api/summarize",
                serde_json::json!({"text": "https://example.com/crabs", "sentences": "34%"}),
            ))
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["sentences"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_api_input_error() {
        let response = app()
            .oneshot(json_request(
                "/api/summarize",
                serde_json::json!({"text": "Some text.", "sentences": 0}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["kind"], "invalid_sentence_count");
    }

    #[tokio::test]
    async fn test_api_fractional_sentences_is_invalid_count() {
        let response = app()
            .oneshot(json_request(
                "/api/summarize",
                serde_json::json!({"text": "Some text. More text.", "sentences": 2.5}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["kind"], "invalid_sentence_count");
        assert_eq!(json["error"], "Invalid sentence count: 2.5");
    }

    #[tokio::test]
    async fn test_api_malformed_body_is_json_error() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/summarize")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"sentences": 2"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["kind"], "validation");
        assert!(json["error"].as_str().unwrap().starts_with("Validation error: Invalid request body"));
    }

    #[tokio::test]
    async fn test_api_languages() {
        let response = app()
            .oneshot(Request::builder().uri("/api/languages").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        let languages = json.as_array().unwrap();
        assert_eq!(languages.len(), 9);
        assert!(languages.iter().any(|l| l["code"] == "czech" && l["label"] == "Czech"));
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["overall_status"], "healthy");
    }
}
