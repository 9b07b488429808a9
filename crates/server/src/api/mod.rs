use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use shared::{
    domain::{ContactSubmission, NewsletterSubscription},
    error::{ApiError, ErrorCode},
    protocol::{
        iso_timestamp, ArticleSummary, AssessmentRequest, AssessmentResponse, DemoResponse,
        HealthResponse, PlaceholderResponse, PlanSummary, PromptResponse, ResourceSummary,
        RoiQuery, RoiResponse, SubmissionResponse,
    },
};
use site_api::resources;
use tracing::{debug, info};

use crate::app_state::AppState;

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

const CONTACT_REPLY: &str = "Thank you for your interest! We will contact you soon.";
const NEWSLETTER_REPLY: &str =
    "Welcome to EU AI Act Weekly! Check your email for confirmation.";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(err: ApiError) -> (StatusCode, Json<ApiError>) {
    (status_for(err.code), Json(err))
}

pub(crate) async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: iso_timestamp(Utc::now()),
        environment: state.settings.environment.as_str().to_string(),
        uptime: state.uptime_seconds(),
    })
}

/// Accepts any body; only JSON objects get structured log fields.
pub(crate) async fn contact(body: Bytes) -> Json<SubmissionResponse> {
    match serde_json::from_slice::<ContactSubmission>(&body) {
        Ok(submission) => info!(
            name = %submission.name,
            email = %submission.email,
            company = submission.company.as_deref().unwrap_or(""),
            service = submission.service.as_deref().unwrap_or(""),
            message_len = submission.message.len(),
            "contact form submission"
        ),
        Err(_) => info!(
            raw = %String::from_utf8_lossy(&body),
            "contact form submission with unstructured body"
        ),
    }

    Json(SubmissionResponse {
        success: true,
        message: CONTACT_REPLY.to_string(),
    })
}

pub(crate) async fn newsletter(body: Bytes) -> Json<SubmissionResponse> {
    match serde_json::from_slice::<NewsletterSubscription>(&body) {
        Ok(subscription) => info!(
            email = %subscription.email,
            role = subscription.role.as_deref().unwrap_or("unknown"),
            consent = subscription.gdpr_consent.is_some(),
            "newsletter subscription"
        ),
        Err(_) => info!(
            raw = %String::from_utf8_lossy(&body),
            "newsletter subscription with unstructured body"
        ),
    }

    Json(SubmissionResponse {
        success: true,
        message: NEWSLETTER_REPLY.to_string(),
    })
}

pub(crate) async fn article5_card_placeholder() -> Json<PlaceholderResponse> {
    Json(PlaceholderResponse {
        message: "Article 5 card download will be implemented soon.".to_string(),
    })
}

fn parse_assessment(body: &Bytes) -> ApiResult<AssessmentRequest> {
    serde_json::from_slice(body).map_err(|e| {
        reject(ApiError::validation(format!(
            "invalid assessment payload: {e}"
        )))
    })
}

pub(crate) async fn assessment(body: Bytes) -> ApiResult<Json<AssessmentResponse>> {
    let req = parse_assessment(&body)?;
    let response = site_api::score_assessment(req);
    info!(score = response.score, level = %response.label, "assessment completed");
    Ok(Json(response))
}

pub(crate) async fn assessment_report(body: Bytes) -> ApiResult<impl IntoResponse> {
    let req = parse_assessment(&body)?;
    let now = Utc::now();
    let (response, report) = site_api::assessment_report(req, now);
    debug!(score = response.score, "risk report generated");
    Ok(text_attachment(
        &resources::risk_report_filename(now.date_naive()),
        report,
    ))
}

pub(crate) async fn roi(Query(query): Query<RoiQuery>) -> ApiResult<Json<RoiResponse>> {
    site_api::quote_roi(&query).map(Json).map_err(reject)
}

pub(crate) async fn plans() -> Json<Vec<PlanSummary>> {
    Json(site_api::list_plans())
}

pub(crate) async fn articles() -> Json<Vec<ArticleSummary>> {
    Json(site_api::list_articles())
}

pub(crate) async fn article_prompt(Path(article): Path<String>) -> Json<PromptResponse> {
    Json(site_api::article_prompt(&article))
}

pub(crate) async fn article_demo(Path(article): Path<String>) -> ApiResult<Json<DemoResponse>> {
    let demo = site_api::article_demo(&article, &mut rand::rng()).map_err(reject)?;
    info!(article = demo.article.number(), "article demo run");
    Ok(Json(demo))
}

pub(crate) async fn resource_list() -> Json<Vec<ResourceSummary>> {
    Json(resources::resource_catalog())
}

pub(crate) async fn article5_card() -> impl IntoResponse {
    text_attachment(
        resources::ARTICLE5_CARD_FILENAME,
        resources::article5_card(Utc::now().date_naive()),
    )
}

pub(crate) async fn prompt_guide() -> impl IntoResponse {
    text_attachment(resources::PROMPT_GUIDE_FILENAME, resources::prompt_guide())
}

fn text_attachment(filename: &str, body: String) -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\"")) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    (StatusCode::OK, headers, body)
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
