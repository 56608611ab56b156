// ABOUTME: Daily protein and water requirement ranges scaled by weight, activity, and goal
// ABOUTME: Protein per-kg bands rise with activity level; water is a fixed 30-35 ml/kg band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Nutrition Needs Calculator
//!
//! Produces daily protein and water requirement ranges. Protein scales per
//! kilogram of body weight with the activity level, from the 0.8 g/kg RDA
//! floor for sedentary adults up to 2.2 g/kg for hard daily training, and the
//! dietary goal shifts the band: a deficit raises the floor to spare lean
//! mass, a hypertrophy goal raises the whole band, both capped at 2.2 g/kg.
//! Water uses the standard 30-35 ml/kg band. The result is informational: the
//! midpoint of the protein range is the primary value and the classification
//! describes the requirement tier, never a health risk.
//!
//! # Scientific References
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). "Dietary protein for athletes:
//!   from requirements to optimum adaptation." *J Sports Sci*, 29(sup1),
//!   S29-S38. <https://doi.org/10.1080/02640414.2011.619204>
//! - Helms, E.R. et al. (2014). "Evidence-based recommendations for natural
//!   bodybuilding contest preparation." *J Int Soc Sports Nutr*, 11, 20.
//! - EFSA Panel on Dietetic Products (2010). "Scientific opinion on dietary
//!   reference values for water." *EFSA Journal*, 8(3), 1459.

use crate::analysis::AnalysisResult;
use crate::classification::Classification;
use crate::errors::AppResult;
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::types::{ActivityLevel, Goal, IntermediateValue, MetricKind, RiskLevel, Sex};
use crate::validation::{require_age, require_weight};
use tracing::debug;

/// Water requirement band (ml per kg of body weight)
const WATER_ML_PER_KG: (f64, f64) = (30.0, 35.0);

/// Upper cap on the per-kg protein band after goal adjustment (g/kg)
const PROTEIN_G_PER_KG_CAP: f64 = 2.2;

static NUTRITION_RULES: RuleSet = RuleSet {
    risk_factors: &[],
    strategies: &[
        Rule::new(
            RiskLevel::Low,
            "Reparta la proteína a lo largo del día en lugar de concentrarla en una comida",
        ),
        Rule::new(
            RiskLevel::Low,
            "Priorice fuentes proteicas completas: huevo, lácteos, legumbres con cereal",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Beba agua de forma regular sin esperar a tener sed",
        ),
        Rule::new(
            RiskLevel::Low,
            "Aumente la ingesta de líquidos en días de calor o entrenamiento intenso",
        ),
    ],
};

/// Inputs for a nutrition-needs analysis
#[derive(Debug, Clone, Copy)]
pub struct NutritionNeedsInput {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Physical activity level
    pub activity: ActivityLevel,
    /// Dietary goal
    pub goal: Goal,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
}

/// An inclusive daily requirement range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequirementRange {
    /// Lower bound of the daily requirement
    pub low: f64,
    /// Upper bound of the daily requirement
    pub high: f64,
}

impl RequirementRange {
    /// Midpoint of the range
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// Base protein band in g per kg of body weight for an activity level
const fn activity_band(activity: ActivityLevel) -> (f64, f64) {
    match activity {
        ActivityLevel::Sedentary => (0.8, 1.0),
        ActivityLevel::LightlyActive => (1.0, 1.2),
        ActivityLevel::ModeratelyActive => (1.2, 1.6),
        ActivityLevel::VeryActive => (1.6, 2.0),
        ActivityLevel::ExtraActive => (1.8, 2.2),
    }
}

/// Per-kg band shift for a dietary goal: (floor shift, ceiling shift)
const fn goal_shift(goal: Goal) -> (f64, f64) {
    match goal {
        Goal::Maintenance => (0.0, 0.0),
        // Higher floor in a deficit to spare lean mass
        Goal::WeightLoss => (0.2, 0.2),
        Goal::MuscleGain => (0.2, 0.4),
    }
}

/// Protein band in g per kg of body weight for an activity level and goal
///
/// The goal shifts the activity band upward; the result is capped at the
/// 2.2 g/kg ceiling so an extra-active hypertrophy band does not exceed it.
#[must_use]
pub fn protein_g_per_kg(activity: ActivityLevel, goal: Goal) -> (f64, f64) {
    let (low, high) = activity_band(activity);
    let (low_shift, high_shift) = goal_shift(goal);
    (
        (low + low_shift).min(PROTEIN_G_PER_KG_CAP),
        (high + high_shift).min(PROTEIN_G_PER_KG_CAP),
    )
}

/// Daily protein requirement range in grams
#[must_use]
pub fn protein_requirement(weight_kg: f64, activity: ActivityLevel, goal: Goal) -> RequirementRange {
    let (low, high) = protein_g_per_kg(activity, goal);
    RequirementRange {
        low: low * weight_kg,
        high: high * weight_kg,
    }
}

/// Daily water requirement range in millilitres
#[must_use]
pub fn water_requirement(weight_kg: f64) -> RequirementRange {
    RequirementRange {
        low: WATER_ML_PER_KG.0 * weight_kg,
        high: WATER_ML_PER_KG.1 * weight_kg,
    }
}

/// Requirement tier for a per-kg protein midpoint
#[must_use]
pub fn classify_tier(g_per_kg_midpoint: f64) -> Classification {
    // Informational tiers; nutrition needs carry no health risk by themselves
    if g_per_kg_midpoint < 1.0 {
        Classification::with_status("Requerimiento básico", 0, RiskLevel::Low, "Informativo")
    } else if g_per_kg_midpoint < 1.6 {
        Classification::with_status("Requerimiento moderado", 1, RiskLevel::Low, "Informativo")
    } else {
        Classification::with_status("Requerimiento alto", 2, RiskLevel::Low, "Informativo")
    }
}

/// Full nutrition-needs analysis; the protein midpoint is the primary value
///
/// # Errors
///
/// Returns `AppError` if weight or age is outside its range.
pub fn analyze_nutrition_needs(input: &NutritionNeedsInput) -> AppResult<AnalysisResult> {
    require_weight(input.weight_kg)?;
    require_age(input.age_years)?;

    let protein = protein_requirement(input.weight_kg, input.activity, input.goal);
    let water = water_requirement(input.weight_kg);
    let (low_per_kg, high_per_kg) = protein_g_per_kg(input.activity, input.goal);
    let classification = classify_tier((low_per_kg + high_per_kg) / 2.0);
    debug!(
        protein_low = protein.low,
        protein_high = protein.high,
        water_low = water.low,
        goal = %input.goal.display_name(),
        "nutrition needs computed"
    );

    let interpretation = format!(
        "Para un nivel de actividad {} con objetivo de {} necesita entre {:.0} y {:.0} g de proteína y entre {:.0} y {:.0} ml de agua al día.",
        input.activity.display_name().to_lowercase(),
        input.goal.display_name().to_lowercase(),
        protein.low,
        protein.high,
        water.low,
        water.high
    );
    let plan = NUTRITION_RULES.generate(
        classification.risk_level,
        Demographics {
            sex: input.sex,
            age_years: input.age_years,
        },
        interpretation,
    );

    Ok(AnalysisResult::new(
        MetricKind::NutritionNeeds,
        protein.midpoint(),
        "g/día",
        classification,
    )
    .with_intermediates(vec![
        IntermediateValue::new("proteina_min", protein.low, "g/día"),
        IntermediateValue::new("proteina_max", protein.high, "g/día"),
        IntermediateValue::new("agua_min", water.low, "ml/día"),
        IntermediateValue::new("agua_max", water.high, "ml/día"),
    ])
    .with_plan(plan))
}
