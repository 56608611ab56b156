// ABOUTME: Resting metabolic rate: Mifflin-St Jeor primary, Harris-Benedict alternative
// ABOUTME: Katch-McArdle activates only when body fat is supplied; TDEE when activity is known
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Metabolic Rate Calculator
//!
//! Estimates resting energy expenditure in kcal/day. Mifflin-St Jeor is the
//! primary estimate; the revised Harris-Benedict value always travels as an
//! intermediate, and Katch-`McArdle` joins it when a body-fat percentage is
//! available to derive lean mass. Total daily energy expenditure is the
//! primary estimate scaled by the activity factor.
//!
//! # Scientific References
//!
//! - Mifflin, M.D. et al. (1990). "A new predictive equation for resting
//!   energy expenditure in healthy individuals." *Am J Clin Nutr*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - Roza, A.M., & Shizgal, H.M. (1984). "The Harris Benedict equation
//!   reevaluated." *Am J Clin Nutr*, 40(1), 168-182.
//! - Katch, F.I., & `McArdle`, W.D. (1996). "Exercise Physiology", 4th ed.

use crate::analysis::AnalysisResult;
use crate::classification::{Band, Classification, ThresholdTable};
use crate::config::AnalysisConfig;
use crate::errors::AppResult;
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::reference::{populations, ReferenceComparison};
use crate::types::{ActivityLevel, IntermediateValue, MetricKind, RiskLevel, Sex};
use crate::validation::{require_age, require_height, require_range, require_weight};
use tracing::debug;

/// RMR z-score bands against the sex-keyed adult reference
static RMR_Z_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(-1.0, ("Baja", RiskLevel::Moderate)),
    Band::new(1.0, ("Normal", RiskLevel::Low)),
    Band::new(f64::INFINITY, ("Alta", RiskLevel::Moderate)),
]);

static METABOLIC_RULES: RuleSet = RuleSet {
    risk_factors: &[Rule::new(
        RiskLevel::Moderate,
        "Gasto energético en reposo alejado del promedio para su sexo",
    )],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "El entrenamiento de fuerza aumenta la masa magra y el gasto en reposo",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Evite restricciones calóricas severas que deprimen el metabolismo",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Use su gasto diario estimado como base para planificar la ingesta",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Ajuste la ingesta calórica de forma gradual y reevalúe en unas semanas",
        ),
    ],
};

/// Inputs for a metabolic-rate analysis
#[derive(Debug, Clone, Copy)]
pub struct MetabolicRateInput {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Standing height (cm)
    pub height_cm: f64,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
    /// Body fat percentage; activates the Katch-`McArdle` estimate
    pub body_fat_pct: Option<f64>,
    /// Activity level; activates the TDEE estimate
    pub activity: Option<ActivityLevel>,
}

/// Mifflin-St Jeor resting metabolic rate (kcal/day)
#[must_use]
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let base = 10.0f64.mul_add(
        weight_kg,
        6.25f64.mul_add(height_cm, -5.0 * f64::from(age_years)),
    );
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Revised Harris-Benedict basal metabolic rate (kcal/day)
#[must_use]
pub fn harris_benedict(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let age = f64::from(age_years);
    match sex {
        Sex::Male => {
            88.362
                + 13.397f64.mul_add(weight_kg, 4.799f64.mul_add(height_cm, -5.677 * age))
        }
        Sex::Female => {
            447.593
                + 9.247f64.mul_add(weight_kg, 3.098f64.mul_add(height_cm, -4.330 * age))
        }
    }
}

/// Katch-`McArdle` resting metabolic rate from lean body mass (kcal/day)
#[must_use]
pub fn katch_mcardle(lean_mass_kg: f64) -> f64 {
    21.6f64.mul_add(lean_mass_kg, 370.0)
}

/// Classify an RMR by its z-score against the sex-keyed reference
#[must_use]
pub fn classify_rmr_z(z: f64) -> Classification {
    let (ordinal, (category, risk)) = RMR_Z_BANDS.classify_indexed(z);
    Classification::new(category, ordinal as u8, risk)
}

/// Reference population label for the RMR comparison
const fn rmr_population(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "Adultos (hombres), gasto en reposo",
        Sex::Female => "Adultas (mujeres), gasto en reposo",
    }
}

/// Full metabolic-rate analysis; Mifflin-St Jeor is the primary value
///
/// # Errors
///
/// Returns `AppError` if any measurement is outside its physiological range.
pub fn analyze_metabolic_rate(input: &MetabolicRateInput) -> AppResult<AnalysisResult> {
    require_weight(input.weight_kg)?;
    require_height(input.height_cm)?;
    require_age(input.age_years)?;
    if let Some(body_fat_pct) = input.body_fat_pct {
        require_range(
            "body_fat_pct",
            body_fat_pct,
            &AnalysisConfig::global().limits.body_fat_pct,
        )?;
    }

    let rmr = mifflin_st_jeor(input.weight_kg, input.height_cm, input.age_years, input.sex);
    let hb = harris_benedict(input.weight_kg, input.height_cm, input.age_years, input.sex);
    let mut intermediates = vec![IntermediateValue::new("harris_benedict", hb, "kcal/día")];

    if let Some(body_fat_pct) = input.body_fat_pct {
        let lean_mass = input.weight_kg * (1.0 - body_fat_pct / 100.0);
        intermediates.push(IntermediateValue::new("masa_magra", lean_mass, "kg"));
        intermediates.push(IntermediateValue::new(
            "katch_mcardle",
            katch_mcardle(lean_mass),
            "kcal/día",
        ));
    }
    if let Some(activity) = input.activity {
        intermediates.push(IntermediateValue::new(
            "gasto_diario_total",
            rmr * activity.factor(),
            "kcal/día",
        ));
    }

    let reference = ReferenceComparison::against(
        rmr,
        &populations::resting_metabolic_rate(input.sex),
        rmr_population(input.sex),
    );
    let classification = classify_rmr_z(reference.z_score);
    debug!(rmr, hb, z = reference.z_score, "metabolic rate estimated");

    let interpretation = format!(
        "Su gasto en reposo estimado es {rmr:.0} kcal/día, un valor {} para su sexo.",
        classification.category.to_lowercase()
    );
    let plan = METABOLIC_RULES.generate(
        classification.risk_level,
        Demographics {
            sex: input.sex,
            age_years: input.age_years,
        },
        interpretation,
    );

    Ok(
        AnalysisResult::new(MetricKind::MetabolicRate, rmr, "kcal/día", classification)
            .with_intermediates(intermediates)
            .with_reference(reference)
            .with_plan(plan),
    )
}
