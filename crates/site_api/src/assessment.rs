//! Five-question EU AI Act risk assessment.
//!
//! The [`Wizard`] is the authoritative model of the browser flow: one question
//! at a time, forward only once the current question is answered, backward
//! from anywhere but the first question, and a terminal results step that
//! scores the answers. The landing page renders its controls from
//! [`Wizard::view`] and the page script follows the same transitions.

use std::collections::BTreeMap;

use serde::Serialize;
use shared::{
    domain::{AssessmentAnswer, QuestionIndex, RiskLevel, RiskWeight, QUESTION_COUNT},
    protocol::Recommendation,
};
use thiserror::Error;

/// Highest possible sum of answer weights.
pub const MAX_TOTAL_WEIGHT: u32 = QUESTION_COUNT as u32 * RiskWeight::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("question {0} has no recorded answer")]
    Unanswered(QuestionIndex),
    #[error("already at the first question")]
    FirstQuestion,
    #[error("already at the last question; show results instead")]
    LastQuestion,
    #[error("results are only available from question {}", QuestionIndex::LAST)]
    ResultsUnavailable(QuestionIndex),
    #[error("assessment already finished")]
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Question(QuestionIndex),
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
    pub risk: RiskWeight,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub index: u8,
    pub prompt: &'static str,
    pub options: &'static [QuestionOption],
}

const fn option(value: &'static str, label: &'static str, risk: RiskWeight) -> QuestionOption {
    QuestionOption { value, label, risk }
}

pub static QUESTIONS: [Question; QUESTION_COUNT as usize] = [
    Question {
        index: 1,
        prompt: "What kind of AI system are you deploying in the EU?",
        options: &[
            option("internal-tool", "Internal productivity tool", RiskWeight::Low),
            option("customer-assistant", "Customer-facing chatbot or assistant", RiskWeight::Medium),
            option(
                "decision-system",
                "System that makes decisions about people (hiring, credit, education)",
                RiskWeight::High,
            ),
        ],
    },
    Question {
        index: 2,
        prompt: "Does the system process biometric or emotional data?",
        options: &[
            option("no-biometrics", "No", RiskWeight::Low),
            option("limited-biometrics", "Limited, with explicit consent", RiskWeight::Medium),
            option(
                "biometric-identification",
                "Yes, identification or emotion recognition",
                RiskWeight::High,
            ),
        ],
    },
    Question {
        index: 3,
        prompt: "Who are the primary users or subjects of the system?",
        options: &[
            option("employees", "Trained internal staff", RiskWeight::Low),
            option("general-public", "The general adult public", RiskWeight::Medium),
            option("vulnerable-groups", "Children or vulnerable groups", RiskWeight::High),
        ],
    },
    Question {
        index: 4,
        prompt: "How complete is your AI governance documentation?",
        options: &[
            option("documented", "Comprehensive and maintained", RiskWeight::Low),
            option("partial", "Partial or out of date", RiskWeight::Medium),
            option("undocumented", "None yet", RiskWeight::High),
        ],
    },
    Question {
        index: 5,
        prompt: "Have you run adversarial testing or red teaming on the system?",
        options: &[
            option("continuous", "Yes, on a regular schedule", RiskWeight::Low),
            option("one-off", "Once, before launch", RiskWeight::Medium),
            option("never", "Never", RiskWeight::High),
        ],
    },
];

pub fn question(index: QuestionIndex) -> &'static Question {
    &QUESTIONS[usize::from(index.get() - 1)]
}

/// Score in `0..=100`: the weight total over [`MAX_TOTAL_WEIGHT`], rounded half up.
pub fn risk_score<I>(weights: I) -> u8
where
    I: IntoIterator<Item = RiskWeight>,
{
    let total: u32 = weights.into_iter().map(RiskWeight::weight).sum();
    let total = total.min(MAX_TOTAL_WEIGHT);
    let score = (total * 200 + MAX_TOTAL_WEIGHT) / (MAX_TOTAL_WEIGHT * 2);
    score as u8
}

pub fn recommendation(level: RiskLevel) -> Recommendation {
    let (priority, heading, summary, actions): (&str, &str, &str, [&str; 3]) = match level {
        RiskLevel::High => (
            "high-priority",
            "Immediate Action Required",
            "Your AI system poses significant EU AI Act compliance risks. We recommend immediate consultation and comprehensive red teaming.",
            [
                "Schedule emergency compliance audit",
                "Implement immediate risk mitigation measures",
                "Prepare regulatory notification procedures",
            ],
        ),
        RiskLevel::Medium => (
            "medium-priority",
            "Moderate Risk - Action Needed",
            "Your AI system has moderate compliance risks that should be addressed before EU deployment.",
            [
                "Conduct comprehensive red teaming assessment",
                "Develop compliance documentation",
                "Implement monitoring and logging systems",
            ],
        ),
        RiskLevel::Low => (
            "low-priority",
            "Good Foundation - Enhance Protection",
            "Your AI system shows good compliance foundations. Consider proactive measures to ensure ongoing compliance.",
            [
                "Annual compliance health check",
                "Continuous monitoring implementation",
                "Stay updated on regulatory changes",
            ],
        ),
    };

    Recommendation {
        priority: priority.to_string(),
        heading: heading.to_string(),
        summary: summary.to_string(),
        actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

/// Keys answers by question; a later answer to the same question wins.
pub fn collect_answers<I>(answers: I) -> BTreeMap<QuestionIndex, AssessmentAnswer>
where
    I: IntoIterator<Item = AssessmentAnswer>,
{
    answers
        .into_iter()
        .map(|answer| (answer.question, answer))
        .collect()
}

pub fn assess<'a, I>(answers: I) -> RiskAssessment
where
    I: IntoIterator<Item = &'a AssessmentAnswer>,
{
    let score = risk_score(answers.into_iter().map(|answer| answer.risk));
    let level = RiskLevel::from_score(score);
    RiskAssessment {
        score,
        level,
        recommendation: recommendation(level),
    }
}

/// Control state for rendering the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardView {
    pub question: u8,
    pub progress: u8,
    pub can_advance: bool,
    pub can_go_back: bool,
    pub on_last_question: bool,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    answers: BTreeMap<QuestionIndex, AssessmentAnswer>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::Question(QuestionIndex::FIRST),
            answers: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn answers(&self) -> impl Iterator<Item = &AssessmentAnswer> {
        self.answers.values()
    }

    /// The answer already recorded for the question on screen, if any.
    pub fn selected(&self) -> Option<&AssessmentAnswer> {
        match self.state {
            WizardState::Question(current) => self.answers.get(&current),
            WizardState::Results => None,
        }
    }

    pub fn select(&mut self, value: impl Into<String>, risk: RiskWeight) -> Result<(), WizardError> {
        let current = self.current()?;
        self.answers.insert(
            current,
            AssessmentAnswer {
                question: current,
                value: value.into(),
                risk,
            },
        );
        Ok(())
    }

    pub fn can_advance(&self) -> bool {
        self.selected().is_some()
    }

    pub fn next(&mut self) -> Result<QuestionIndex, WizardError> {
        let current = self.current()?;
        if !self.answers.contains_key(&current) {
            return Err(WizardError::Unanswered(current));
        }
        let next = current.next().ok_or(WizardError::LastQuestion)?;
        self.state = WizardState::Question(next);
        Ok(next)
    }

    pub fn previous(&mut self) -> Result<QuestionIndex, WizardError> {
        let current = self.current()?;
        let previous = current.previous().ok_or(WizardError::FirstQuestion)?;
        self.state = WizardState::Question(previous);
        Ok(previous)
    }

    pub fn show_results(&mut self) -> Result<RiskAssessment, WizardError> {
        let current = self.current()?;
        if current != QuestionIndex::LAST {
            return Err(WizardError::ResultsUnavailable(current));
        }
        if !self.answers.contains_key(&current) {
            return Err(WizardError::Unanswered(current));
        }
        self.state = WizardState::Results;
        Ok(assess(self.answers.values()))
    }

    pub fn progress_percent(&self) -> u8 {
        match self.state {
            WizardState::Question(current) => current.get() * 100 / QUESTION_COUNT,
            WizardState::Results => 100,
        }
    }

    pub fn view(&self) -> WizardView {
        let current = match self.state {
            WizardState::Question(current) => Some(current),
            WizardState::Results => None,
        };
        WizardView {
            question: current.unwrap_or(QuestionIndex::LAST).get(),
            progress: self.progress_percent(),
            can_advance: self.can_advance(),
            can_go_back: current.is_some_and(|c| c != QuestionIndex::FIRST),
            on_last_question: current == Some(QuestionIndex::LAST),
            finished: current.is_none(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn current(&self) -> Result<QuestionIndex, WizardError> {
        match self.state {
            WizardState::Question(current) => Ok(current),
            WizardState::Results => Err(WizardError::Finished),
        }
    }
}

#[cfg(test)]
#[path = "tests/assessment_tests.rs"]
mod tests;
