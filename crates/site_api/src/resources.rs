//! Plain-text downloads offered on the landing page.

use chrono::{DateTime, NaiveDate, Utc};
use shared::{domain::AssessmentAnswer, protocol::ResourceSummary};

use crate::assessment::RiskAssessment;

pub const CONTACT_EMAIL: &str = "contact@aramalgorithm.ai";
pub const WEBSITE: &str = "https://aramalgorithm.ai";
pub const ARTICLE5_CARD_FILENAME: &str = "EU-AI-Act-Article-5-Card.txt";
pub const PROMPT_GUIDE_FILENAME: &str = "Gamma-App-Article-5-Guide.txt";

const COPYRIGHT: &str = "© 2024 Aram Algorithm. All rights reserved.";

pub fn risk_report_filename(date: NaiveDate) -> String {
    format!("EU-AI-Act-Risk-Assessment-Report-{}.txt", date.format("%Y-%m-%d"))
}

fn footer() -> String {
    format!("Contact: {CONTACT_EMAIL}\nWebsite: {WEBSITE}\n\n---\n{COPYRIGHT}")
}

pub fn article5_card(generated_on: NaiveDate) -> String {
    let mut out = format!(
        "🟥 EU AI Act Article 5 Compliance Card - Aram Algorithm\n\n📅 Generated: {}\n",
        generated_on.format("%Y-%m-%d")
    );
    out.push_str(
        "
🚫 PROHIBITED AI PRACTICES (Article 5)

5A. Subliminal techniques that distort behavior in harmful ways
5B. Exploitation of vulnerabilities (age, disability, social/economic)
5C. Biometric categorization of sensitive attributes (race, ethnicity, sexual orientation, etc.)
5D. Emotion recognition in workplace/education
5E. Predictive policing based on profiling
5F. Real-time biometric identification in public (with narrow exceptions)

🧪 RED TEAMING METHODOLOGY

✓ Prompt Libraries: curated attack prompts aligned with each sub-article (5A–5F)
✓ Simulation of Edge Cases: test \"gray zones\" where novel utility may resemble prohibited use
✓ Guardrail Verification: confirm model refuses unsafe requests with regulator-ready reasoning
✓ Evidence Bundling: logs, JSON manifests, signed hashes, regulator-friendly reports

📊 EVIDENCE OUTPUTS

✓ Refusal Evidence: 95%+ of prohibited attempts trigger refusal with explicit Article citation
✓ Novel Utility Pathways: justified documentation why use case is not prohibited
✓ Audit Bundles: immutable, hash-signed evidence packages per test run

👥 RELEVANCE TO STAKEHOLDERS

🚀 GenAI Startups: De-risk MVPs early, produce compliance-by-design evidence for investors
🤖 Frontier Model Providers: Demonstrate refusal robustness at model scale
🏢 GenAI Enterprises: Integrate guardrails & refusal logic into deployed solutions
🏛️ Regulators & Customers: Independent evidence of lawful vs. unlawful system behavior

✅ KEY TAKEAWAY
Article 5 compliance isn't just refusal, it's traceability.
Red teaming generates objective evidence that systems both avoid prohibited practices and document innovative, lawful utilities straddling the regulatory boundary.

",
    );
    out.push_str(&footer());
    out
}

pub fn risk_report<'a, I>(
    assessment: &RiskAssessment,
    answers: I,
    generated_at: DateTime<Utc>,
) -> String
where
    I: IntoIterator<Item = &'a AssessmentAnswer>,
{
    let recommendation = &assessment.recommendation;
    let mut lines = vec![
        "EU AI ACT COMPLIANCE RISK ASSESSMENT REPORT".to_string(),
        "===========================================".to_string(),
        String::new(),
        format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S UTC")),
        format!("Risk Score: {}/100", assessment.score),
        format!("Risk Level: {}", assessment.level.label()),
        String::new(),
        "ASSESSMENT RESPONSES:".to_string(),
    ];
    lines.extend(answers.into_iter().map(|answer| {
        format!(
            "Question {}: {} (Risk: {})",
            answer.question,
            answer.value,
            answer.risk.as_str()
        )
    }));
    lines.extend([
        String::new(),
        "RECOMMENDATIONS:".to_string(),
        recommendation.heading.clone(),
        recommendation.summary.clone(),
    ]);
    lines.extend(recommendation.actions.iter().map(|action| format!("- {action}")));
    lines.extend(
        [
            "",
            "NEXT STEPS:",
            "1. Book a free consultation with Aram Algorithm",
            "2. Review our comprehensive EU AI Act guide",
            "3. Consider starting with our Starter assessment package",
            "",
        ]
        .map(str::to_string),
    );
    lines.push(footer());
    lines.join("\n")
}

pub fn prompt_guide() -> String {
    let mut out = String::from(
        "GAMMA.APP ARTICLE 5 COMPLIANCE CARD GUIDE
=========================================

How to Create Professional EU AI Act Presentations in 2 Minutes

🚀 QUICK START GUIDE:

1. Open Gamma.app (https://gamma.app)
2. Click \"Create new presentation\"
3. Select \"Use AI to generate\"
4. Paste the Article 5 prompt (copied from our website)
5. Click \"Generate\"
6. Customize colors, fonts, and content as needed
7. Export or share your compliance card

🎯 CUSTOMIZATION TIPS:

• Brand Colors: Replace red/gray with your company colors
• Logo Integration: Add your company logo to the header
• Content Focus: Emphasize the articles most relevant to your use case
• Audience Adaptation: Highlight the section most relevant to your stakeholders

📋 USE CASES:

• Board presentations on AI compliance
• Investor deck appendix on regulatory readiness
• Team training materials on EU AI Act
• Client presentations showing compliance expertise
• Regulatory submission supporting documents

🔗 NEXT STEPS:

1. Create your first Article 5 card
2. Share with your compliance team for feedback
3. Adapt for other EU AI Act articles (50, 51, 55)
4. Consider professional red teaming assessment with Aram Algorithm

",
    );
    out.push_str(&footer());
    out
}

pub fn resource_catalog() -> Vec<ResourceSummary> {
    [
        ("ai-act-guide", "EU AI Act Complete Guide", "EU-AI-Act-Complete-Guide.pdf"),
        (
            "compliance-checklist",
            "EU AI Act Compliance Checklist",
            "EU-AI-Act-Compliance-Checklist.pdf",
        ),
        ("prompt-library", "Red Team Prompt Library", "Red-Team-Prompt-Library.json"),
    ]
    .into_iter()
    .map(|(key, title, filename)| ResourceSummary {
        key: key.to_string(),
        title: title.to_string(),
        filename: filename.to_string(),
    })
    .collect()
}

#[cfg(test)]
#[path = "tests/resources_tests.rs"]
mod tests;
