use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ArticleId, AssessmentAnswer, PlanKind, RiskLevel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub environment: String,
    pub uptime: f64,
}

/// Reply for form submissions, which never fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderResponse {
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub answers: Vec<AssessmentAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: String,
    pub heading: String,
    pub summary: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub score: u8,
    pub level: RiskLevel,
    pub label: String,
    pub color: String,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoiQuery {
    pub revenue: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiResponse {
    pub revenue: f64,
    pub potential_fine: f64,
    pub protection_cost: f64,
    pub roi_percentage: i64,
    pub display: RoiDisplay,
}

/// Pre-formatted strings for the calculator widgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiDisplay {
    pub fine: String,
    pub protection_cost: String,
    pub roi: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub kind: PlanKind,
    pub name: String,
    pub monthly_price: Option<u64>,
    pub annual_price: Option<u64>,
    pub contact_service: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub article: ArticleId,
    pub title: String,
    pub scenarios: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "ATTENTION NEEDED")]
    AttentionNeeded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoResult {
    pub scenario: String,
    pub status: DemoStatus,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoResponse {
    pub article: ArticleId,
    pub results: Vec<DemoResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse {
    pub article: ArticleId,
    pub title: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub key: String,
    pub title: String,
    pub filename: String,
}

pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
