use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use ns_analysis::{build_company_report, CompanyReport};
use ns_core::{Article, Error, SentimentModel, SpeechSynthesizer};
use ns_nlp::classify_articles;
use ns_speech::summary_text;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::AppState;

const DEFAULT_ARTICLE_COUNT: usize = 10;
const SUMMARY_MAX_CHARS: usize = 150;

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        let status = match e {
            Error::EmptyInput => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct CompanyQuery {
    pub company: Option<String>,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub company: Option<String>,
    pub articles: Option<Vec<Article>>,
}

#[derive(Deserialize)]
pub struct TtsRequest {
    pub report: Option<CompanyReport>,
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "message": "API is running" }))
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompanyQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let company = query
        .company
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::bad_request("Company parameter is required"))?;

    let mut articles = state
        .extractor
        .company_news(&company, DEFAULT_ARTICLE_COUNT)
        .await?;

    // Fill in summaries the extractor could not find
    for article in &mut articles {
        if article.summary.is_none() && !article.content.is_empty() {
            article.summary = Some(
                state
                    .model
                    .summarize(&article.content, SUMMARY_MAX_CHARS)
                    .await?,
            );
        }
    }

    Ok(Json(json!({ "company": company, "articles": articles })))
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<CompanyReport>, ApiError> {
    let (Some(company), Some(articles)) = (request.company, request.articles) else {
        return Err(ApiError::bad_request(
            "Company and articles are required in the request body",
        ));
    };

    let records = classify_articles(state.model.as_ref(), &articles).await?;
    let report = build_company_report(&company, records)?;
    info!(
        "Analyzed {} articles for {}",
        report.article_count, report.company
    );
    Ok(Json(report))
}

pub async fn tts(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TtsRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let report = request
        .report
        .ok_or_else(|| ApiError::bad_request("Report is required in the request body"))?;

    let text = summary_text(&report);
    let audio = state.synthesizer.synthesize(&text).await?;

    Ok(Json(json!({
        "success": true,
        "audio_data": BASE64.encode(audio),
        "language": state.synthesizer.language(),
        "text": text,
    })))
}

pub async fn full_analysis(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CompanyQuery>,
) -> Result<Json<CompanyReport>, ApiError> {
    let company = query
        .company
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::bad_request("Company parameter is required"))?;

    let articles = state
        .extractor
        .company_news(&company, DEFAULT_ARTICLE_COUNT)
        .await?;
    if articles.is_empty() {
        return Err(Error::EmptyInput.into());
    }

    let records = classify_articles(state.model.as_ref(), &articles).await?;
    let report = build_company_report(&company, records)?;
    Ok(Json(report))
}
