use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use saberwing_core::{DomainError, DomainResult};

/// Priority of an in-house capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MakePriority {
    Critical,
    High,
    Medium,
}

/// A capability developed in-house.
///
/// `investment` is kept in its display form (e.g. `"$50M"`); use
/// [`parse_investment_millions`] for arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeDecision {
    pub id: String,
    pub name: String,
    pub category: String,
    pub rationale: String,
    pub team_size: String,
    pub timeline: String,
    pub investment: String,
    pub priority: MakePriority,
}

/// A component sourced from an external supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyDecision {
    pub id: String,
    pub name: String,
    pub supplier: String,
    pub model: String,
    pub unit_cost: String,
    pub rationale: String,
    pub lead_time: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcingStrategy {
    pub make: Vec<MakeDecision>,
    pub buy: Vec<BuyDecision>,
}

static STRATEGY: OnceLock<SourcingStrategy> = OnceLock::new();

pub fn sourcing_strategy() -> &'static SourcingStrategy {
    STRATEGY.get_or_init(build_strategy)
}

/// Parse a `"$<amount>M"` investment label into millions.
pub fn parse_investment_millions(label: &str) -> DomainResult<f64> {
    let amount = label
        .trim()
        .strip_prefix('$')
        .and_then(|s| s.strip_suffix('M'))
        .ok_or_else(|| {
            DomainError::validation(format!("investment '{label}' is not of the form $<n>M"))
        })?;

    amount
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| DomainError::validation(format!("investment '{label}' has an invalid amount")))
}

/// Sum of in-house investment, in millions.
pub fn total_make_investment(make: &[MakeDecision]) -> DomainResult<f64> {
    make.iter()
        .map(|m| parse_investment_millions(&m.investment))
        .sum()
}

#[allow(clippy::too_many_arguments)]
fn make(
    id: &str,
    name: &str,
    category: &str,
    rationale: &str,
    team_size: &str,
    timeline: &str,
    investment: &str,
    priority: MakePriority,
) -> MakeDecision {
    MakeDecision {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        rationale: rationale.to_string(),
        team_size: team_size.to_string(),
        timeline: timeline.to_string(),
        investment: investment.to_string(),
        priority,
    }
}

#[allow(clippy::too_many_arguments)]
fn buy(
    id: &str,
    name: &str,
    supplier: &str,
    model: &str,
    unit_cost: &str,
    rationale: &str,
    lead_time: &str,
    quantity: &str,
) -> BuyDecision {
    BuyDecision {
        id: id.to_string(),
        name: name.to_string(),
        supplier: supplier.to_string(),
        model: model.to_string(),
        unit_cost: unit_cost.to_string(),
        rationale: rationale.to_string(),
        lead_time: lead_time.to_string(),
        quantity: quantity.to_string(),
    }
}

fn build_strategy() -> SourcingStrategy {
    SourcingStrategy {
        make: vec![
            make(
                "aero",
                "Aerodynamic Design & Airframe",
                "Shape",
                "Proprietary designs enable superior performance, stealth profiles, and competitive differentiation. This is the foundational IP.",
                "25-30 engineers",
                "24-36 months",
                "$50M",
                MakePriority::Critical,
            ),
            make(
                "fcs",
                "Flight Control Software",
                "Brain",
                "Mission-critical safety system. In-house ensures no vendor lock-in and enables rapid iteration.",
                "15-20 engineers",
                "18-24 months",
                "$30M",
                MakePriority::Critical,
            ),
            make(
                "autonomy",
                "Mission Planning & Autonomy",
                "Brain",
                "Core IP for autonomous operations, threat assessment, and tactical decision-making. Critical for export differentiation.",
                "20-25 engineers",
                "24-30 months",
                "$40M",
                MakePriority::High,
            ),
            make(
                "stealth",
                "Stealth Coatings & RAM",
                "Shape",
                "Proprietary radar-absorbent materials provide critical competitive advantage. Formulations are highly classified.",
                "10-12 scientists",
                "12-18 months",
                "$15M",
                MakePriority::High,
            ),
            make(
                "avionics",
                "Avionics Integration Architecture",
                "Brain",
                "Custom integration layer ensures optimal performance and prevents dependency on integrators.",
                "12-15 engineers",
                "18-24 months",
                "$25M",
                MakePriority::Medium,
            ),
        ],
        buy: vec![
            buy(
                "engines",
                "Turbofan Engines",
                "GE Aerospace",
                "F414-GE-400",
                "$5.0M",
                "Mature technology. Dual-source strategy with P&W reduces supply chain risk.",
                "18 months",
                "2 per aircraft",
            ),
            buy(
                "radar",
                "AESA Radar",
                "Raytheon Technologies",
                "APG-79",
                "$3.0M",
                "Proven technology with 1000+ T/R modules. Global support network available.",
                "15 months",
                "1 per aircraft",
            ),
            buy(
                "seats",
                "Ejection Seats",
                "Martin-Baker",
                "Mk18",
                "$500K",
                "Safety-critical with proven 0-0 capability. Industry-leading track record.",
                "9 months",
                "1-2 per aircraft",
            ),
            buy(
                "landing-gear",
                "Landing Gear",
                "Safran Landing Systems",
                "Custom",
                "$1.0M",
                "Heavy structural integration expertise. Carrier variant experience essential.",
                "14 months",
                "1 set per aircraft",
            ),
            buy(
                "ins",
                "INS/GPS Navigation",
                "Honeywell Aerospace",
                "HG9900",
                "$230K",
                "Ring laser gyro with GPS-aided positioning. SAASM encryption for secure ops.",
                "8 months",
                "1 per aircraft",
            ),
            buy(
                "hmd",
                "Helmet Mounted Display",
                "Elbit Systems",
                "HMDS Gen 3",
                "$500K",
                "Wide FOV with night vision integration. Critical for situational awareness.",
                "12 months",
                "2 per aircraft",
            ),
        ],
    }
}
