// ABOUTME: Skeletal muscle mass via the Lee anthropometric equation, indexed to height
// ABOUTME: Sarcopenia-risk bands follow the sex-specific Janssen SMI cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Muscle Mass Calculator
//!
//! Estimates whole-body skeletal muscle mass (SMM) from weight, height,
//! sex, and age using the Lee regression, then derives the skeletal muscle
//! index (SMM / height²) and the muscle share of body weight. When a
//! body-fat percentage is supplied, fat mass and lean mass are derived as
//! well. Sarcopenia risk follows the Janssen SMI cutoffs, which are
//! sex-specific.
//!
//! # Scientific References
//!
//! - Lee, R.C. et al. (2000). "Total-body skeletal muscle mass: development
//!   and cross-validation of anthropometric prediction models."
//!   *Am J Clin Nutr*, 72(3), 796-803. <https://doi.org/10.1093/ajcn/72.3.796>
//! - Janssen, I. et al. (2004). "Skeletal muscle cutpoints associated with
//!   elevated physical disability risk in older men and women."
//!   *Am J Epidemiol*, 159(4), 413-421.

use crate::analysis::AnalysisResult;
use crate::classification::{Band, Classification, ThresholdTable};
use crate::comparison::{companion_entries, MeasurementSnapshot};
use crate::config::AnalysisConfig;
use crate::errors::AppResult;
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::types::{IntermediateValue, MetricKind, RiskLevel, Sex};
use crate::validation::{require_age, require_height, require_range, require_weight};
use tracing::debug;

/// Janssen SMI cutoffs (kg/m²), male
static SMI_BANDS_MALE: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(8.51, ("Riesgo alto de sarcopenia", RiskLevel::High)),
    Band::new(10.76, ("Riesgo moderado de sarcopenia", RiskLevel::Moderate)),
    Band::new(f64::INFINITY, ("Normal", RiskLevel::Low)),
]);

/// Janssen SMI cutoffs (kg/m²), female
static SMI_BANDS_FEMALE: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(5.76, ("Riesgo alto de sarcopenia", RiskLevel::High)),
    Band::new(6.76, ("Riesgo moderado de sarcopenia", RiskLevel::Moderate)),
    Band::new(f64::INFINITY, ("Normal", RiskLevel::Low)),
]);

static MUSCLE_RULES: RuleSet = RuleSet {
    risk_factors: &[
        Rule::new(
            RiskLevel::Moderate,
            "Masa muscular por debajo del nivel protector para su estatura",
        ),
        Rule::new(
            RiskLevel::High,
            "Riesgo de sarcopenia y pérdida de funcionalidad",
        ),
    ],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "Entrene fuerza al menos 2 o 3 veces por semana con sobrecarga progresiva",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Distribuya la proteína en 3 o 4 comidas de al menos 25 g",
        ),
        Rule::new(
            RiskLevel::High,
            "Priorice ejercicios multiarticulares con supervisión profesional",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Mantenga su rutina de fuerza actual",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Reevalúe su masa muscular cada 3 meses durante el entrenamiento",
        ),
        Rule::new(
            RiskLevel::High,
            "Consulte sobre un programa estructurado contra la sarcopenia",
        ),
    ],
};

/// Inputs for a muscle-mass analysis
#[derive(Debug, Clone, Copy)]
pub struct MuscleMassInput {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Standing height (cm)
    pub height_cm: f64,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
    /// Body fat percentage; enables the lean/fat-mass derivation
    pub body_fat_pct: Option<f64>,
}

/// Lee skeletal muscle mass (kg)
#[must_use]
pub fn lee_skeletal_muscle_mass(weight_kg: f64, height_cm: f64, sex: Sex, age_years: u32) -> f64 {
    let height_m = height_cm / 100.0;
    0.244f64.mul_add(
        weight_kg,
        7.8f64.mul_add(
            height_m,
            6.6f64.mul_add(sex.indicator(), -0.098 * f64::from(age_years)),
        ),
    ) - 3.3
}

/// Skeletal muscle index: SMM / height² (kg/m²)
#[must_use]
pub fn skeletal_muscle_index(smm_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    smm_kg / (height_m * height_m)
}

/// Classify an SMI against the sex-specific Janssen cutoffs
#[must_use]
pub fn classify_smi(smi: f64, sex: Sex) -> Classification {
    let table = match sex {
        Sex::Male => &SMI_BANDS_MALE,
        Sex::Female => &SMI_BANDS_FEMALE,
    };
    let (ordinal, (category, risk)) = table.classify_indexed(smi);
    Classification::new(category, ordinal as u8, risk)
}

/// Full muscle-mass analysis; SMM is the primary value
///
/// # Errors
///
/// Returns `AppError` if weight, height, or age is outside its range.
pub fn analyze_muscle_mass(input: &MuscleMassInput) -> AppResult<AnalysisResult> {
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

    let smm = lee_skeletal_muscle_mass(input.weight_kg, input.height_cm, input.sex, input.age_years);
    let smi = skeletal_muscle_index(smm, input.height_cm);
    let muscle_pct = smm / input.weight_kg * 100.0;
    let classification = classify_smi(smi, input.sex);
    debug!(smm, smi, muscle_pct, category = %classification.category, "muscle mass estimated");

    let interpretation = format!(
        "Su masa muscular estimada es {smm:.1} kg (índice {smi:.2} kg/m²), estado: {}.",
        classification.category.to_lowercase()
    );
    let plan = MUSCLE_RULES.generate(
        classification.risk_level,
        Demographics {
            sex: input.sex,
            age_years: input.age_years,
        },
        interpretation,
    );

    let snapshot = MeasurementSnapshot {
        weight_kg: input.weight_kg,
        height_cm: input.height_cm,
        waist_cm: None,
        sex: input.sex,
        age_years: input.age_years,
    };

    let mut intermediates = vec![
        IntermediateValue::new("indice_musculo_esqueletico", smi, "kg/m²"),
        IntermediateValue::new("porcentaje_muscular", muscle_pct, "%"),
    ];
    if let Some(body_fat_pct) = input.body_fat_pct {
        let fat_mass = input.weight_kg * body_fat_pct / 100.0;
        intermediates.push(IntermediateValue::new("masa_grasa", fat_mass, "kg"));
        intermediates.push(IntermediateValue::new(
            "masa_magra",
            input.weight_kg - fat_mass,
            "kg",
        ));
    }

    Ok(
        AnalysisResult::new(MetricKind::MuscleMass, smm, "kg", classification)
            .with_intermediates(intermediates)
            .with_comparisons(companion_entries(&snapshot, MetricKind::MuscleMass))
            .with_plan(plan),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lee_equation_typical_male() {
        // 0.244*70 + 7.8*1.75 + 6.6 - 0.098*30 - 3.3 = 31.09
        let smm = lee_skeletal_muscle_mass(70.0, 175.0, Sex::Male, 30);
        assert!((smm - 31.09).abs() < 1e-9);
    }

    #[test]
    fn test_sex_term_is_6_6_kg() {
        let male = lee_skeletal_muscle_mass(65.0, 170.0, Sex::Male, 40);
        let female = lee_skeletal_muscle_mass(65.0, 170.0, Sex::Female, 40);
        assert!((male - female - 6.6).abs() < 1e-9);
    }

    #[test]
    fn test_smm_declines_with_age() {
        let young = lee_skeletal_muscle_mass(70.0, 175.0, Sex::Male, 25);
        let old = lee_skeletal_muscle_mass(70.0, 175.0, Sex::Male, 75);
        assert!((young - old - 0.098 * 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_janssen_cutoffs_are_sex_specific() {
        assert_eq!(classify_smi(9.0, Sex::Male).category, "Riesgo moderado de sarcopenia");
        assert_eq!(classify_smi(9.0, Sex::Female).category, "Normal");
        assert_eq!(classify_smi(5.5, Sex::Female).category, "Riesgo alto de sarcopenia");
    }

    #[test]
    fn test_analysis_derives_index_and_percentage() {
        let input = MuscleMassInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            sex: Sex::Male,
            age_years: 30,
            body_fat_pct: None,
        };
        let result = analyze_muscle_mass(&input).unwrap();
        let smi = result
            .intermediates
            .iter()
            .find(|i| i.name == "indice_musculo_esqueletico")
            .unwrap();
        assert!((smi.value - skeletal_muscle_index(result.value, 175.0)).abs() < 1e-12);
        let pct = result
            .intermediates
            .iter()
            .find(|i| i.name == "porcentaje_muscular")
            .unwrap();
        assert!(pct.value > 35.0 && pct.value < 55.0);
        // No lean/fat split without a body-fat percentage
        assert!(!result.intermediates.iter().any(|i| i.name == "masa_magra"));
    }

    #[test]
    fn test_body_fat_enables_lean_and_fat_mass_derivation() {
        let result = analyze_muscle_mass(&MuscleMassInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            sex: Sex::Male,
            age_years: 30,
            body_fat_pct: Some(15.0),
        })
        .unwrap();
        let fat = result
            .intermediates
            .iter()
            .find(|i| i.name == "masa_grasa")
            .unwrap();
        let lean = result
            .intermediates
            .iter()
            .find(|i| i.name == "masa_magra")
            .unwrap();
        assert!((fat.value - 10.5).abs() < 1e-9);
        assert!((fat.value + lean.value - 70.0).abs() < 1e-9);
        // The muscle estimate is a subset of lean mass
        assert!(result.value < lean.value);
    }

    #[test]
    fn test_body_fat_out_of_range_is_rejected() {
        let err = analyze_muscle_mass(&MuscleMassInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            sex: Sex::Male,
            age_years: 30,
            body_fat_pct: Some(90.0),
        })
        .unwrap_err();
        assert_eq!(err.field, Some("body_fat_pct"));
    }
}
