// ABOUTME: Bone mineral density scoring: T-score vs young adults, Z-score vs age-matched peers
// ABOUTME: WHO operational bands, with the severe category gated on a fragility fracture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Bone Density Calculator
//!
//! Converts a measured bone mineral density (g/cm²) into a T-score against
//! the sex-keyed young-adult reference and a Z-score against an age-matched
//! reference. Categories follow the WHO operational definition: osteoporosis
//! at T ≤ −2.5 (inclusive, unlike the half-open bands used elsewhere in
//! this crate), osteopenia between −2.5 and −1, and the severe category
//! only when a fragility fracture is reported alongside an osteoporotic
//! T-score.
//!
//! # Scientific References
//!
//! - World Health Organization (1994). "Assessment of fracture risk and its
//!   application to screening for postmenopausal osteoporosis."
//!   *WHO Technical Report Series*, 843.

use crate::analysis::AnalysisResult;
use crate::classification::Classification;
use crate::config::AnalysisConfig;
use crate::errors::AppResult;
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::reference::{populations, ReferenceComparison};
use crate::types::{IntermediateValue, MetricKind, RiskLevel, Sex};
use crate::validation::{require_age, require_range};
use tracing::debug;

static BONE_RULES: RuleSet = RuleSet {
    risk_factors: &[
        Rule::new(
            RiskLevel::Moderate,
            "Densidad mineral ósea por debajo del promedio del adulto joven",
        ),
        Rule::new(
            RiskLevel::High,
            "Mayor probabilidad de fractura por fragilidad",
        ),
        Rule::new(
            RiskLevel::VeryHigh,
            "Fractura por fragilidad previa con densidad osteoporótica",
        ),
    ],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "Asegure una ingesta adecuada de calcio y vitamina D",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Realice ejercicio con carga e impacto moderado de forma regular",
        ),
        Rule::new(
            RiskLevel::High,
            "Minimice el riesgo de caídas en el hogar",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Repita la densitometría según la pauta de su médico",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Comente el resultado con su médico en el próximo control",
        ),
        Rule::new(
            RiskLevel::High,
            "Solicite una evaluación médica del riesgo de fractura",
        ),
        Rule::new(
            RiskLevel::VeryHigh,
            "Requiere valoración especializada y tratamiento activo",
        ),
    ],
};

/// Inputs for a bone-density analysis
#[derive(Debug, Clone, Copy)]
pub struct BoneDensityInput {
    /// Measured bone mineral density (g/cm²)
    pub bmd_g_cm2: f64,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
    /// Whether the subject reports a prior fragility fracture
    pub fragility_fracture: bool,
}

/// T-score: standard deviations below the sex-keyed young-adult mean
#[must_use]
pub fn t_score(bmd_g_cm2: f64, sex: Sex) -> f64 {
    populations::bmd_young_adult(sex).z_score(bmd_g_cm2)
}

/// Z-score: standard deviations against the age-matched reference
#[must_use]
pub fn z_score(bmd_g_cm2: f64, sex: Sex, age_years: u32) -> f64 {
    populations::bmd_age_matched(sex, age_years).z_score(bmd_g_cm2)
}

/// WHO operational classification of a T-score
///
/// Osteoporosis is inclusive at T = −2.5; the severe category additionally
/// requires a reported fragility fracture.
#[must_use]
pub fn classify(t: f64, fragility_fracture: bool) -> Classification {
    if t <= -2.5 {
        if fragility_fracture {
            Classification::new("Osteoporosis severa", 3, RiskLevel::VeryHigh)
        } else {
            Classification::new("Osteoporosis", 2, RiskLevel::High)
        }
    } else if t < -1.0 {
        Classification::new("Osteopenia", 1, RiskLevel::Moderate)
    } else {
        Classification::new("Normal", 0, RiskLevel::Low)
    }
}

/// Reference population label for the T-score comparison
const fn young_adult_population(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "Adultos jóvenes (hombres, 20-29 años)",
        Sex::Female => "Adultas jóvenes (mujeres, 20-29 años)",
    }
}

/// Full bone-density analysis
///
/// # Errors
///
/// Returns `AppError` if the BMD or age is outside its physiological range.
pub fn analyze_bone_density(input: &BoneDensityInput) -> AppResult<AnalysisResult> {
    require_range(
        "bmd_g_cm2",
        input.bmd_g_cm2,
        &AnalysisConfig::global().limits.bmd_g_cm2,
    )?;
    require_age(input.age_years)?;

    let reference = ReferenceComparison::against(
        input.bmd_g_cm2,
        &populations::bmd_young_adult(input.sex),
        young_adult_population(input.sex),
    );
    let t = reference.z_score;
    let z = z_score(input.bmd_g_cm2, input.sex, input.age_years);
    let classification = classify(t, input.fragility_fracture);
    debug!(t, z, category = %classification.category, "bone density scored");

    let interpretation = format!(
        "Su densidad ósea es {:.3} g/cm² (T-score {t:.1}), resultado: {}.",
        input.bmd_g_cm2, classification.category
    );
    let plan = BONE_RULES.generate(
        classification.risk_level,
        Demographics {
            sex: input.sex,
            age_years: input.age_years,
        },
        interpretation,
    );

    Ok(AnalysisResult::new(
        MetricKind::BoneDensity,
        input.bmd_g_cm2,
        "g/cm²",
        classification,
    )
    .with_intermediates(vec![
        IntermediateValue::new("t_score", t, "DE"),
        IntermediateValue::new("z_score_edad", z, "DE"),
    ])
    .with_reference(reference)
    .with_plan(plan))
}
