use chrono::{DateTime, Utc};
use rand::Rng;
use shared::{
    error::ApiError,
    protocol::{
        ArticleSummary, AssessmentRequest, AssessmentResponse, DemoResponse, PlanSummary,
        PromptResponse, RoiDisplay, RoiQuery, RoiResponse,
    },
};

pub mod articles;
pub mod assessment;
pub mod pricing;
pub mod resources;

use articles::ArticleError;
use assessment::RiskAssessment;
use pricing::PricingError;

impl From<RiskAssessment> for AssessmentResponse {
    fn from(value: RiskAssessment) -> Self {
        Self {
            score: value.score,
            level: value.level,
            label: value.level.label().to_string(),
            color: value.level.color().to_string(),
            recommendation: value.recommendation,
        }
    }
}

pub fn score_assessment(req: AssessmentRequest) -> AssessmentResponse {
    let answers = assessment::collect_answers(req.answers);
    assessment::assess(answers.values()).into()
}

/// Scored assessment plus the downloadable report body.
pub fn assessment_report(
    req: AssessmentRequest,
    generated_at: DateTime<Utc>,
) -> (AssessmentResponse, String) {
    let answers = assessment::collect_answers(req.answers);
    let scored = assessment::assess(answers.values());
    let report = resources::risk_report(&scored, answers.values(), generated_at);
    (scored.into(), report)
}

pub fn quote_roi(query: &RoiQuery) -> Result<RoiResponse, ApiError> {
    let revenue = pricing::parse_revenue(query.revenue.as_deref()).map_err(validation)?;
    let quote = pricing::roi_quote(revenue).map_err(validation)?;
    Ok(RoiResponse {
        revenue: quote.revenue,
        potential_fine: quote.potential_fine,
        protection_cost: quote.protection_cost,
        roi_percentage: quote.roi_percentage,
        display: RoiDisplay {
            fine: format!("€{}", pricing::format_amount(quote.potential_fine)),
            protection_cost: format!("€{}", pricing::format_amount(quote.protection_cost)),
            roi: format!("{}%", pricing::format_amount(quote.roi_percentage as f64)),
        },
    })
}

pub fn list_plans() -> Vec<PlanSummary> {
    pricing::PLANS
        .iter()
        .map(|plan| PlanSummary {
            kind: plan.kind,
            name: plan.name.to_string(),
            monthly_price: plan.monthly_price,
            annual_price: plan.annual_price,
            contact_service: plan.contact_service().map(str::to_string),
        })
        .collect()
}

pub fn list_articles() -> Vec<ArticleSummary> {
    articles::all()
        .iter()
        .map(|article| ArticleSummary {
            article: article.id,
            title: article.title.to_string(),
            scenarios: article.scenarios.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

pub fn article_prompt(raw_article: &str) -> PromptResponse {
    let article = articles::prompt_target(raw_article);
    PromptResponse {
        article: article.id,
        title: article.title.to_string(),
        prompt: articles::render_prompt(article),
    }
}

pub fn article_demo<R: Rng + ?Sized>(
    raw_article: &str,
    rng: &mut R,
) -> Result<DemoResponse, ApiError> {
    let article = articles::lookup(raw_article).map_err(not_found)?;
    Ok(DemoResponse {
        article: article.id,
        results: articles::run_demo(article, rng),
    })
}

fn validation(err: PricingError) -> ApiError {
    ApiError::validation(err.to_string())
}

fn not_found(err: ArticleError) -> ApiError {
    ApiError::not_found(err.to_string())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
