use std::fmt;

use serde::{Deserialize, Serialize};

pub const QUESTION_COUNT: u8 = 5;

/// 1-based position of a question in the risk assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuestionIndex(u8);

impl QuestionIndex {
    pub const FIRST: QuestionIndex = QuestionIndex(1);
    pub const LAST: QuestionIndex = QuestionIndex(QUESTION_COUNT);

    pub fn new(value: u8) -> Option<Self> {
        (1..=QUESTION_COUNT).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    pub fn previous(self) -> Option<Self> {
        Self::new(self.0.saturating_sub(1))
    }

    pub fn all() -> impl Iterator<Item = QuestionIndex> {
        (1..=QUESTION_COUNT).map(QuestionIndex)
    }
}

impl TryFrom<u8> for QuestionIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
            .ok_or_else(|| format!("question index must be between 1 and {QUESTION_COUNT}, got {value}"))
    }
}

impl From<QuestionIndex> for u8 {
    fn from(value: QuestionIndex) -> Self {
        value.0
    }
}

impl fmt::Display for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskWeight {
    Low,
    Medium,
    High,
}

impl RiskWeight {
    pub const MAX: u32 = 3;

    pub fn weight(self) -> u32 {
        match self {
            RiskWeight::Low => 1,
            RiskWeight::Medium => 2,
            RiskWeight::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskWeight::Low => "low",
            RiskWeight::Medium => "medium",
            RiskWeight::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentAnswer {
    pub question: QuestionIndex,
    pub value: String,
    pub risk: RiskWeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => RiskLevel::High,
            60..=79 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "#10b981",
            RiskLevel::Medium => "#f59e0b",
            RiskLevel::High => "#ef4444",
        }
    }
}

/// EU AI Act articles covered by the article selector and prompt generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum ArticleId {
    Art5,
    Art50,
    Art51,
    Art52,
    Art53,
    Art54,
    Art55,
}

impl ArticleId {
    pub const ALL: [ArticleId; 7] = [
        ArticleId::Art5,
        ArticleId::Art50,
        ArticleId::Art51,
        ArticleId::Art52,
        ArticleId::Art53,
        ArticleId::Art54,
        ArticleId::Art55,
    ];

    pub fn number(self) -> u16 {
        match self {
            ArticleId::Art5 => 5,
            ArticleId::Art50 => 50,
            ArticleId::Art51 => 51,
            ArticleId::Art52 => 52,
            ArticleId::Art53 => 53,
            ArticleId::Art54 => 54,
            ArticleId::Art55 => 55,
        }
    }

    pub fn from_number(number: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|article| article.number() == number)
    }

    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u16>().ok().and_then(Self::from_number)
    }
}

impl TryFrom<u16> for ArticleId {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or_else(|| format!("unknown article {value}"))
    }
}

impl From<ArticleId> for u16 {
    fn from(value: ArticleId) -> Self {
        value.number()
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Article {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Starter,
    Enterprise,
    Custom,
}

impl PlanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanKind::Starter => "starter",
            PlanKind::Enterprise => "enterprise",
            PlanKind::Custom => "custom",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub gdpr_consent: Option<String>,
}
