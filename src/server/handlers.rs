// file: src/server/handlers.rs
// description: request handlers for the form page, the JSON API and health checks
// reference: https://docs.rs/axum

use super::AppState;
use super::page::{FormState, Outcome, render_page};
use crate::error::SummaryError;
use crate::models::{Language, SummaryResult};
use crate::utils::{HealthCheck, HealthReport, Validator};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

const SLOW_PROBE: Duration = Duration::from_secs(2);

#[derive(Debug, Default, Deserialize)]
pub struct SummaryForm {
    #[serde(default)]
    pub text: String,
    pub language: Option<String>,
    pub sentences: Option<String>,
    pub algorithm: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiRequest {
    pub text: String,
    pub language: Option<String>,
    /// A number or a string such as `"20%"`; validated like the form field.
    pub sentences: Option<serde_json::Value>,
    pub algorithm: Option<String>,
}

fn sentences_field(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub summary: String,
    #[serde(flatten)]
    pub result: SummaryResult,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub label: &'static str,
}

fn error_status(error: &SummaryError) -> StatusCode {
    if error.is_input_error() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else if matches!(error, SummaryError::FetchFailure { .. }) {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for SummaryError {
    fn into_response(self) -> Response {
        let status = error_status(&self);
        let body = ApiError {
            error: self.to_string(),
            kind: self.kind(),
        };
        (status, Json(body)).into_response()
    }
}

impl AppState {
    /// Fills in configured defaults for missing fields. Without an algorithm
    /// selector the submitted algorithm is ignored.
    fn complete_form(&self, form: SummaryForm) -> FormState {
        let defaults = &self.config.summary;
        let algorithm = if self.config.server.algorithm_choice {
            form.algorithm
        } else {
            None
        };

        FormState {
            text: form.text,
            language: form
                .language
                .unwrap_or_else(|| defaults.default_language.code().to_string()),
            sentences: form
                .sentences
                .unwrap_or_else(|| defaults.default_sentences.to_string()),
            algorithm: algorithm.unwrap_or_else(|| defaults.default_algorithm.code().to_string()),
        }
    }

    async fn run(&self, form: &FormState) -> Result<SummaryResult, SummaryError> {
        Validator::validate_content_not_empty(&form.text)?;
        self.service
            .handle_fields(&form.text, &form.language, &form.sentences, &form.algorithm)
            .await
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let form = state.complete_form(SummaryForm::default());
    Html(render_page(
        &form,
        state.config.server.algorithm_choice,
        &Outcome::Empty,
    ))
}

pub async fn index_submit(
    State(state): State<AppState>,
    Form(form): Form<SummaryForm>,
) -> (StatusCode, Html<String>) {
    let form = state.complete_form(form);

    let (status, outcome) = match state.run(&form).await {
        Ok(result) => (StatusCode::OK, Outcome::Summary(result)),
        Err(e) => {
            warn!("Summary request failed ({}): {}", e.kind(), e);
            (error_status(&e), Outcome::Error(e.to_string()))
        }
    };

    (
        status,
        Html(render_page(
            &form,
            state.config.server.algorithm_choice,
            &outcome,
        )),
    )
}

pub async fn api_summarize(
    State(state): State<AppState>,
    payload: Result<Json<ApiRequest>, JsonRejection>,
) -> Result<Json<ApiResponse>, SummaryError> {
    let Json(request) = payload.map_err(|rejection| {
        SummaryError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let form = state.complete_form(SummaryForm {
        text: request.text,
        language: request.language,
        sentences: request.sentences.map(sentences_field),
        algorithm: request.algorithm,
    });

    let result = state.run(&form).await?;
    info!("API summary with {} sentences", result.len());

    Ok(Json(ApiResponse {
        summary: result.to_text(),
        result,
    }))
}

pub async fn api_languages() -> Json<Vec<LanguageInfo>> {
    Json(
        Language::ALL
            .iter()
            .map(|language| LanguageInfo {
                code: language.code(),
                label: language.label(),
            })
            .collect(),
    )
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let service = state.service.clone();
    let checks = tokio::task::spawn_blocking(move || {
        vec![
            HealthCheck::probe("language_resources", SLOW_PROBE, || {
                Language::ALL
                    .iter()
                    .try_for_each(|language| service.resources(*language).map(|_| ()))
            }),
            HealthCheck::probe("summarizers", SLOW_PROBE, || service.self_check()),
        ]
    })
    .await
    .unwrap_or_else(|e| {
        vec![HealthCheck::unhealthy(
            "summarizers",
            e.to_string(),
            Duration::ZERO,
        )]
    });

    let report = HealthReport::new(checks, state.started_at);
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(report))
}
