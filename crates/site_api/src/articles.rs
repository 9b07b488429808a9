//! EU AI Act article catalog: selector titles, demo scenarios and the
//! presentation prompt generator.

use rand::Rng;
use shared::{
    domain::ArticleId,
    protocol::{DemoResult, DemoStatus},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleError {
    #[error("unknown article '{0}'")]
    Unknown(String),
}

pub struct PromptSection {
    pub title: &'static str,
    pub bullets: [&'static str; 4],
}

pub struct PromptCard {
    pub style: &'static str,
    pub header: &'static str,
    pub subtitle: &'static str,
    pub sections: [PromptSection; 3],
    pub closing: &'static str,
}

pub struct Article {
    pub id: ArticleId,
    pub title: &'static str,
    pub scenarios: [&'static str; 3],
    pub prompt: PromptCard,
}

const fn section(title: &'static str, bullets: [&'static str; 4]) -> PromptSection {
    PromptSection { title, bullets }
}

static ARTICLES: [Article; 7] = [
    Article {
        id: ArticleId::Art5,
        title: "Prohibited AI Practices",
        scenarios: ["Manipulation Detection", "Vulnerability Exploitation", "Social Scoring"],
        prompt: PromptCard {
            style: "Minimalist, authoritative, visual card with icons and clear sectioning. Use red (⚠️ for prohibitions), green (✅ for compliance), and neutral grays.",
            header: "🟥 Article 5 Compliance Card — Prohibited AI Practices",
            subtitle: "Clear boundaries for startups, providers, enterprises, and regulators.",
            sections: [
                section(
                    "Prohibited Practices",
                    [
                        "Subliminal techniques (5A) and exploitation of vulnerabilities (5B)",
                        "Biometric categorization of sensitive traits (5C)",
                        "Emotion recognition in work/education (5D) and predictive policing (5E)",
                        "Real-time biometric identification in public (5F)",
                    ],
                ),
                section(
                    "Red Teaming Methodology",
                    [
                        "Prompt libraries mapped to Article 5 clauses",
                        "Edge-case \"gray zone\" simulations",
                        "Guardrail verification with refusal explanations",
                        "Evidence bundling: JSON + signed audit logs",
                    ],
                ),
                section(
                    "Why It Matters",
                    [
                        "GenAI Startups: De-risk MVPs, show compliance to investors",
                        "Frontier Model Providers: Demonstrate systemic refusal robustness",
                        "GenAI Enterprises: Integrate guardrails into products",
                        "Regulators/Customers: Independent, transparent evidence",
                    ],
                ),
            ],
            closing: "Compliance isn't just refusal — it's traceability & evidence.",
        },
    },
    Article {
        id: ArticleId::Art50,
        title: "Transparency Obligations",
        scenarios: ["AI Disclosure Testing", "Synthetic Content Detection", "User Comprehension"],
        prompt: PromptCard {
            style: "Clean, professional design with transparency icons. Use blue (🔍 for transparency), green (✅ for compliance), and neutral tones.",
            header: "🔍 Article 50 Compliance Card — Transparency Obligations",
            subtitle: "Clear disclosure requirements for AI interactions and content",
            sections: [
                section(
                    "Core Obligations",
                    [
                        "AI system disclosure when interacting with users",
                        "Synthetic content marking (deepfakes, generated media)",
                        "Clear, prominent, and understandable notifications",
                        "Multi-modal transparency (text, audio, visual)",
                    ],
                ),
                section(
                    "Red Teaming Focus",
                    [
                        "Disclosure visibility and user comprehension testing",
                        "Synthetic content detection and marking verification",
                        "Cross-platform transparency consistency",
                        "Edge case scenario testing",
                    ],
                ),
                section(
                    "Why It Matters",
                    [
                        "GenAI Startups: Build user trust from day one",
                        "Content Platforms: Prevent misinformation spread",
                        "Enterprises: Meet transparency standards",
                        "Regulators: Ensure user protection and informed consent",
                    ],
                ),
            ],
            closing: "Transparency builds trust — and trust drives adoption.",
        },
    },
    Article {
        id: ArticleId::Art51,
        title: "Classification of General-Purpose AI Models",
        scenarios: ["Capability Assessment", "Threshold Verification", "Impact Analysis"],
        prompt: PromptCard {
            style: "Technical, data-driven design with computational icons. Use orange (⚡ for power/computation) and blue (💻 for technical) themes.",
            header: "⚡ Article 51 Compliance Card — GP AI Model Classification",
            subtitle: "Determining systemic risk thresholds and obligations",
            sections: [
                section(
                    "Classification Criteria",
                    [
                        "Computational threshold: 10²⁵ FLOPs for training",
                        "Multi-domain capability assessment",
                        "Reasoning complexity evaluation",
                        "Potential for widespread impact",
                    ],
                ),
                section(
                    "Assessment Methodology",
                    [
                        "FLOP count verification and documentation",
                        "Capability benchmarking across domains",
                        "Performance threshold analysis",
                        "Systemic risk impact modeling",
                    ],
                ),
                section(
                    "Why It Matters",
                    [
                        "Frontier Model Providers: Understand regulatory obligations",
                        "Cloud Providers: Assess hosted model requirements",
                        "Enterprises: Plan for model selection and compliance",
                        "Regulators: Objective classification criteria",
                    ],
                ),
            ],
            closing: "Classification clarity enables innovation within safe boundaries.",
        },
    },
    Article {
        id: ArticleId::Art52,
        title: "Regulatory Procedures",
        scenarios: ["Notification Process", "Documentation Review", "Compliance Verification"],
        prompt: PromptCard {
            style: "Process-focused design with regulatory icons. Use gray (⚖️ for legal) and blue (📋 for documentation) themes.",
            header: "📋 Article 52 Compliance Card — Regulatory Procedures",
            subtitle: "Notification and classification processes for GP AI models",
            sections: [
                section(
                    "Key Requirements",
                    [
                        "14-day notification deadline to authorities",
                        "Complete technical documentation submission",
                        "Risk assessment and mitigation plans",
                        "Ongoing communication and updates",
                    ],
                ),
                section(
                    "Compliance Testing",
                    [
                        "Process timeline verification",
                        "Documentation completeness review",
                        "Authority communication protocols",
                        "Update and change management procedures",
                    ],
                ),
                section(
                    "Why It Matters",
                    [
                        "GP AI Providers: Avoid regulatory penalties",
                        "Legal Teams: Understand procedural requirements",
                        "Compliance Officers: Systematic process management",
                        "Regulators: Streamlined oversight procedures",
                    ],
                ),
            ],
            closing: "Proper procedures prevent regulatory problems.",
        },
    },
    Article {
        id: ArticleId::Art53,
        title: "General-Purpose AI Model Obligations",
        scenarios: [
            "Technical Documentation",
            "Information Sharing",
            "Supply Chain Transparency",
        ],
        prompt: PromptCard {
            style: "Documentation-focused design with transparency icons. Use green (📚 for documentation) and blue (🔗 for connectivity) themes.",
            header: "📚 Article 53 Compliance Card — GP AI Model Obligations",
            subtitle: "Baseline requirements for all general-purpose AI models",
            sections: [
                section(
                    "Core Obligations",
                    [
                        "Comprehensive technical documentation",
                        "Model cards with capabilities and limitations",
                        "Training data information and sourcing",
                        "Downstream provider information sharing",
                    ],
                ),
                section(
                    "Red Teaming Focus",
                    [
                        "Documentation completeness verification",
                        "Information sharing quality assessment",
                        "Supply chain transparency testing",
                        "Update notification system validation",
                    ],
                ),
                section(
                    "Why It Matters",
                    [
                        "GP AI Providers: Foundation for all compliance",
                        "Downstream Users: Informed integration decisions",
                        "Supply Chain: Transparent responsibility",
                        "Regulators: Comprehensive oversight capability",
                    ],
                ),
            ],
            closing: "Documentation drives accountability across the AI supply chain.",
        },
    },
    Article {
        id: ArticleId::Art54,
        title: "Authorized Representatives",
        scenarios: [
            "Representative Authority",
            "Capability Assessment",
            "Coordination Testing",
        ],
        prompt: PromptCard {
            style: "Professional, authoritative design with legal representation icons. Use blue (🤝 for partnership) and gray (🏛️ for institutions) themes.",
            header: "🤝 Article 54 Compliance Card — Authorized Representatives",
            subtitle: "EU representation requirements for non-EU AI providers",
            sections: [
                section(
                    "Representative Requirements",
                    [
                        "Established EU presence and legal registration",
                        "Full authority to act on provider's behalf",
                        "Technical expertise in AI Act compliance",
                        "24/7 availability for regulatory communication",
                    ],
                ),
                section(
                    "Compliance Testing",
                    [
                        "Legal authority verification",
                        "Response time and availability testing",
                        "Technical competence assessment",
                        "Coordination with parent organization",
                    ],
                ),
                section(
                    "Why It Matters",
                    [
                        "Non-EU Providers: Market access requirement",
                        "Legal Firms: Service opportunity and expertise",
                        "Compliance Teams: Local regulatory interface",
                        "Regulators: Direct EU jurisdiction contact",
                    ],
                ),
            ],
            closing: "Local representation enables global AI innovation in Europe.",
        },
    },
    Article {
        id: ArticleId::Art55,
        title: "Systemic Risk Model Obligations",
        scenarios: ["Adversarial Testing", "Risk Assessment", "Incident Response"],
        prompt: PromptCard {
            style: "High-security design with shield and testing icons. Use red (🛡️ for security) and orange (⚔️ for testing) themes.",
            header: "🛡️ Article 55 Compliance Card — Systemic Risk Obligations",
            subtitle: "Enhanced requirements for high-capability AI models",
            sections: [
                section(
                    "Mandatory Requirements",
                    [
                        "Comprehensive adversarial testing (red teaming)",
                        "Systemic risk assessment and mitigation",
                        "Cybersecurity measures and monitoring",
                        "Serious incident tracking and reporting",
                    ],
                ),
                section(
                    "Red Teaming Focus",
                    [
                        "Jailbreaking and prompt injection resistance",
                        "Multi-step attack scenario testing",
                        "Model extraction and data poisoning protection",
                        "Real-time monitoring and incident detection",
                    ],
                ),
                section(
                    "Why It Matters",
                    [
                        "Frontier Models: Mandatory compliance requirement",
                        "Security Teams: Comprehensive testing framework",
                        "Governments: Systemic risk management",
                        "Society: Protection from AI-driven systemic risks",
                    ],
                ),
            ],
            closing: "With great capability comes great responsibility — and great testing.",
        },
    },
];

pub fn all() -> &'static [Article] {
    &ARTICLES
}

pub fn article(id: ArticleId) -> &'static Article {
    ARTICLES
        .iter()
        .find(|article| article.id == id)
        .unwrap_or(&ARTICLES[0])
}

pub fn lookup(raw: &str) -> Result<&'static Article, ArticleError> {
    ArticleId::parse(raw)
        .map(article)
        .ok_or_else(|| ArticleError::Unknown(raw.to_string()))
}

/// Prompt target for a raw selector value; anything unrecognised gets Article 5.
pub fn prompt_target(raw: &str) -> &'static Article {
    ArticleId::parse(raw)
        .map(article)
        .unwrap_or(&ARTICLES[0])
}

pub fn prompt_title(article: &Article) -> String {
    format!(
        "Title: Article {} Compliance Card — EU AI Act",
        article.id.number()
    )
}

/// Plain-text prompt ready to paste into a presentation generator.
pub fn render_prompt(article: &Article) -> String {
    let card = &article.prompt;
    let mut lines = vec![
        prompt_title(article),
        String::new(),
        format!("Style: {}", card.style),
        String::new(),
        "Content Structure:".to_string(),
        String::new(),
        "Header:".to_string(),
        format!("\"{}\"", card.header),
        format!("Subtitle: \"{}\"", card.subtitle),
    ];
    for section in &card.sections {
        lines.push(String::new());
        lines.push(format!("Section: {}", section.title));
        lines.extend(section.bullets.iter().map(|bullet| format!("• {bullet}")));
    }
    lines.push(String::new());
    lines.push(format!("Closing: \"{}\"", card.closing));
    lines.join("\n")
}

/// Simulated red-team run: each scenario passes with 70% probability and scores 70..=99.
pub fn run_demo<R: Rng + ?Sized>(article: &Article, rng: &mut R) -> Vec<DemoResult> {
    article
        .scenarios
        .iter()
        .map(|scenario| {
            let status = if rng.random::<f64>() > 0.3 {
                DemoStatus::Pass
            } else {
                DemoStatus::AttentionNeeded
            };
            DemoResult {
                scenario: scenario.to_string(),
                status,
                score: rng.random_range(70..100),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/articles_tests.rs"]
mod tests;
