use serde::Serialize;
use shared::domain::PlanKind;
use thiserror::Error;

/// Revenue assumed when the calculator input is empty, zero or not a number.
pub const DEFAULT_REVENUE: f64 = 10_000_000.0;
pub const FINE_RATE: f64 = 0.06;
pub const MINIMUM_FINE: f64 = 30_000_000.0;
/// Annual enterprise plan price.
pub const PROTECTION_COST: f64 = 144_000.0;
/// Largest revenue quoted; keeps the ROI percentage inside `i64`.
pub const MAX_REVENUE: f64 = 1e23;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PricingError {
    #[error("revenue must not be negative, got {0}")]
    NegativeRevenue(f64),
    #[error("revenue must be a finite number")]
    NonFiniteRevenue,
    #[error("revenue must not exceed 1e23, got {0:e}")]
    RevenueTooLarge(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiQuote {
    pub revenue: f64,
    pub potential_fine: f64,
    pub protection_cost: f64,
    pub roi_percentage: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub kind: PlanKind,
    pub name: &'static str,
    pub tagline: &'static str,
    pub monthly_price: Option<u64>,
    pub annual_price: Option<u64>,
    pub features: &'static [&'static str],
}

impl Plan {
    /// Service preset for the contact form opened from this plan.
    pub fn contact_service(&self) -> Option<&'static str> {
        match self.kind {
            PlanKind::Custom => Some("custom"),
            PlanKind::Starter | PlanKind::Enterprise => None,
        }
    }
}

pub static PLANS: [Plan; 3] = [
    Plan {
        kind: PlanKind::Starter,
        name: "Starter",
        tagline: "Article 5 screening for a single AI system",
        monthly_price: Some(2_500),
        annual_price: Some(25_000),
        features: &[
            "Article 5 prohibited-practice probes",
            "Quarterly red teaming report",
            "Email support",
        ],
    },
    Plan {
        kind: PlanKind::Enterprise,
        name: "Enterprise",
        tagline: "Continuous red teaming across your AI portfolio",
        monthly_price: Some(12_000),
        annual_price: Some(144_000),
        features: &[
            "Full EU AI Act probe library",
            "Monthly adversarial testing",
            "Signed evidence bundles for regulators",
            "Dedicated compliance engineer",
        ],
    },
    Plan {
        kind: PlanKind::Custom,
        name: "Custom",
        tagline: "Frontier models and systemic-risk obligations",
        monthly_price: None,
        annual_price: None,
        features: &[
            "Article 55 adversarial testing",
            "Incident response playbooks",
            "On-site workshops",
        ],
    },
];

pub fn plan(kind: PlanKind) -> &'static Plan {
    PLANS
        .iter()
        .find(|plan| plan.kind == kind)
        .unwrap_or(&PLANS[0])
}

/// Interprets the raw calculator input.
pub fn parse_revenue(raw: Option<&str>) -> Result<f64, PricingError> {
    let parsed = raw
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| raw.parse::<f64>().ok());

    match parsed {
        None => Ok(DEFAULT_REVENUE),
        Some(value) if value.is_nan() || value == 0.0 => Ok(DEFAULT_REVENUE),
        Some(value) if value.is_infinite() => Err(PricingError::NonFiniteRevenue),
        Some(value) if value < 0.0 => Err(PricingError::NegativeRevenue(value)),
        Some(value) if value > MAX_REVENUE => Err(PricingError::RevenueTooLarge(value)),
        Some(value) => Ok(value),
    }
}

pub fn potential_fine(revenue: f64) -> f64 {
    (revenue * FINE_RATE).max(MINIMUM_FINE)
}

pub fn roi_quote(revenue: f64) -> Result<RoiQuote, PricingError> {
    if !revenue.is_finite() {
        return Err(PricingError::NonFiniteRevenue);
    }
    if revenue < 0.0 {
        return Err(PricingError::NegativeRevenue(revenue));
    }
    if revenue > MAX_REVENUE {
        return Err(PricingError::RevenueTooLarge(revenue));
    }

    let potential_fine = potential_fine(revenue);
    let roi = (potential_fine - PROTECTION_COST) / PROTECTION_COST * 100.0;
    Ok(RoiQuote {
        revenue,
        potential_fine,
        protection_cost: PROTECTION_COST,
        roi_percentage: roi.round() as i64,
    })
}

/// Whole-unit amount with comma thousands separators, e.g. `30,000,000`.
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round();
    // `{:.0}` prints every integer digit of the float, so large amounts do not saturate.
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
#[path = "tests/pricing_tests.rs"]
mod tests;
