// ABOUTME: Navy circumference method: log-based body-fat regressions branched by sex
// ABOUTME: The female branch requires a hip measurement; the male branch ignores it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Body Composition Calculator
//!
//! Estimates body-fat percentage from tape measurements using the U.S. Navy
//! regressions. Sex selects the regression branch: males use waist minus
//! neck, females use waist plus hip minus neck, so a hip circumference is
//! required for female subjects and unused for males. Fat and lean mass are
//! derived from the percentage and the actual weight.
//!
//! # Scientific References
//!
//! - Hodgdon, J.A., & Beckett, M.B. (1984). "Prediction of percent body fat
//!   for U.S. Navy men and women from body circumferences and height."
//!   *Naval Health Research Center*, Reports 84-29 and 84-11.

use crate::analysis::AnalysisResult;
use crate::classification::{Band, Classification, ThresholdTable};
use crate::comparison::{companion_entries, MeasurementSnapshot};
use crate::errors::{AppError, AppResult};
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::types::{IntermediateValue, MetricKind, RiskLevel, Sex};
use crate::validation::{require_age, require_circumference, require_height, require_weight};
use tracing::debug;

/// Body-fat bands, male (ACE-style)
static BODY_FAT_BANDS_MALE: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(6.0, ("Esencial", RiskLevel::Moderate)),
    Band::new(14.0, ("Atlético", RiskLevel::Low)),
    Band::new(18.0, ("Fitness", RiskLevel::Low)),
    Band::new(25.0, ("Aceptable", RiskLevel::Moderate)),
    Band::new(f64::INFINITY, ("Obesidad", RiskLevel::High)),
]);

/// Body-fat bands, female (ACE-style)
static BODY_FAT_BANDS_FEMALE: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(14.0, ("Esencial", RiskLevel::Moderate)),
    Band::new(21.0, ("Atlético", RiskLevel::Low)),
    Band::new(25.0, ("Fitness", RiskLevel::Low)),
    Band::new(32.0, ("Aceptable", RiskLevel::Moderate)),
    Band::new(f64::INFINITY, ("Obesidad", RiskLevel::High)),
]);

static COMPOSITION_RULES: RuleSet = RuleSet {
    risk_factors: &[
        Rule::new(
            RiskLevel::Moderate,
            "Porcentaje de grasa corporal fuera del rango saludable",
        ),
        Rule::new(
            RiskLevel::High,
            "Exceso de grasa corporal asociado a riesgo metabólico",
        ),
    ],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "Priorice la recomposición: fuerza más déficit calórico ligero",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Asegure una ingesta proteica suficiente para preservar masa magra",
        ),
        Rule::new(
            RiskLevel::High,
            "Aumente el gasto energético diario con actividad estructurada y NEAT",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Mantenga su composición corporal con entrenamiento regular",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Repita las mediciones mensualmente en las mismas condiciones",
        ),
        Rule::new(
            RiskLevel::High,
            "Considere una evaluación profesional de composición corporal",
        ),
    ],
};

/// Inputs for a Navy-method body-composition analysis
#[derive(Debug, Clone, Copy)]
pub struct BodyCompositionInput {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Standing height (cm)
    pub height_cm: f64,
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Neck circumference (cm)
    pub neck_cm: f64,
    /// Hip circumference (cm); required for female subjects
    pub hip_cm: Option<f64>,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
}

/// Navy body-fat percentage, male branch (all lengths in cm)
///
/// Caller must guarantee `waist_cm > neck_cm`.
#[must_use]
pub fn navy_body_fat_male(waist_cm: f64, neck_cm: f64, height_cm: f64) -> f64 {
    495.0
        / 0.154_56f64.mul_add(
            height_cm.log10(),
            0.190_77f64.mul_add(-(waist_cm - neck_cm).log10(), 1.0324),
        )
        - 450.0
}

/// Navy body-fat percentage, female branch (all lengths in cm)
///
/// Caller must guarantee `waist_cm + hip_cm > neck_cm`.
#[must_use]
pub fn navy_body_fat_female(waist_cm: f64, hip_cm: f64, neck_cm: f64, height_cm: f64) -> f64 {
    495.0
        / 0.221f64.mul_add(
            height_cm.log10(),
            0.350_04f64.mul_add(-(waist_cm + hip_cm - neck_cm).log10(), 1.295_79),
        )
        - 450.0
}

/// Classify a body-fat percentage against the sex-specific bands
#[must_use]
pub fn classify(body_fat_pct: f64, sex: Sex) -> Classification {
    let table = match sex {
        Sex::Male => &BODY_FAT_BANDS_MALE,
        Sex::Female => &BODY_FAT_BANDS_FEMALE,
    };
    let (ordinal, (category, risk)) = table.classify_indexed(body_fat_pct);
    Classification::new(category, ordinal as u8, risk)
}

/// Full body-composition analysis; body-fat percentage is the primary value
///
/// # Errors
///
/// Returns `AppError` if a measurement is out of range, the hip is missing
/// for a female subject, or the circumference combination makes the
/// logarithm argument non-positive.
pub fn analyze_body_composition(input: &BodyCompositionInput) -> AppResult<AnalysisResult> {
    require_weight(input.weight_kg)?;
    require_height(input.height_cm)?;
    require_circumference("waist_cm", input.waist_cm)?;
    require_circumference("neck_cm", input.neck_cm)?;
    require_age(input.age_years)?;

    let body_fat_pct = match input.sex {
        Sex::Male => {
            if input.waist_cm <= input.neck_cm {
                return Err(AppError::ordering(
                    "waist_cm",
                    format!(
                        "waist_cm ({}) must exceed neck_cm ({}) for the male regression",
                        input.waist_cm, input.neck_cm
                    ),
                ));
            }
            navy_body_fat_male(input.waist_cm, input.neck_cm, input.height_cm)
        }
        Sex::Female => {
            let hip_cm = input.hip_cm.ok_or_else(|| AppError::missing_field("hip_cm"))?;
            require_circumference("hip_cm", hip_cm)?;
            if input.waist_cm + hip_cm <= input.neck_cm {
                return Err(AppError::ordering(
                    "waist_cm",
                    format!(
                        "waist_cm + hip_cm ({}) must exceed neck_cm ({}) for the female regression",
                        input.waist_cm + hip_cm,
                        input.neck_cm
                    ),
                ));
            }
            navy_body_fat_female(input.waist_cm, hip_cm, input.neck_cm, input.height_cm)
        }
    };

    let fat_mass = input.weight_kg * body_fat_pct / 100.0;
    let lean_mass = input.weight_kg - fat_mass;
    let classification = classify(body_fat_pct, input.sex);
    debug!(body_fat_pct, fat_mass, lean_mass, category = %classification.category, "navy method");

    let interpretation = format!(
        "Su grasa corporal estimada es {body_fat_pct:.1}%, categoría {} para sexo {}.",
        classification.category.to_lowercase(),
        input.sex.display_name().to_lowercase()
    );
    let plan = COMPOSITION_RULES.generate(
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
        waist_cm: Some(input.waist_cm),
        sex: input.sex,
        age_years: input.age_years,
    };

    Ok(AnalysisResult::new(
        MetricKind::BodyComposition,
        body_fat_pct,
        "%",
        classification,
    )
    .with_intermediates(vec![
        IntermediateValue::new("masa_grasa", fat_mass, "kg"),
        IntermediateValue::new("masa_magra", lean_mass, "kg"),
    ])
    .with_comparisons(companion_entries(&snapshot, MetricKind::BodyComposition))
    .with_plan(plan))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_regression_typical_subject() {
        let bf = navy_body_fat_male(85.0, 37.0, 175.0);
        // Mid-teens for these measurements
        assert!(bf > 14.0 && bf < 20.0);
    }

    #[test]
    fn test_female_regression_typical_subject() {
        let bf = navy_body_fat_female(75.0, 97.0, 33.0, 163.0);
        assert!(bf > 20.0 && bf < 35.0);
    }

    #[test]
    fn test_hip_required_for_female_only() {
        let input = BodyCompositionInput {
            weight_kg: 62.0,
            height_cm: 163.0,
            waist_cm: 75.0,
            neck_cm: 33.0,
            hip_cm: None,
            sex: Sex::Female,
            age_years: 28,
        };
        let err = analyze_body_composition(&input).unwrap_err();
        assert_eq!(err.field, Some("hip_cm"));

        let male = BodyCompositionInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            waist_cm: 85.0,
            neck_cm: 37.0,
            hip_cm: None,
            sex: Sex::Male,
            age_years: 30,
        };
        assert!(analyze_body_composition(&male).is_ok());
    }

    #[test]
    fn test_waist_must_exceed_neck_for_males() {
        let input = BodyCompositionInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            waist_cm: 36.0,
            neck_cm: 37.0,
            hip_cm: None,
            sex: Sex::Male,
            age_years: 30,
        };
        let err = analyze_body_composition(&input).unwrap_err();
        assert_eq!(err.field, Some("waist_cm"));
    }

    #[test]
    fn test_fat_and_lean_mass_sum_to_weight() {
        let input = BodyCompositionInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            waist_cm: 85.0,
            neck_cm: 37.0,
            hip_cm: None,
            sex: Sex::Male,
            age_years: 30,
        };
        let result = analyze_body_composition(&input).unwrap();
        let fat = result.intermediates.iter().find(|i| i.name == "masa_grasa").unwrap();
        let lean = result.intermediates.iter().find(|i| i.name == "masa_magra").unwrap();
        assert!((fat.value + lean.value - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_bands_are_sex_specific() {
        assert_eq!(classify(16.0, Sex::Male).category, "Fitness");
        assert_eq!(classify(16.0, Sex::Female).category, "Atlético");
        assert_eq!(classify(25.0, Sex::Male).category, "Obesidad");
        assert_eq!(classify(25.0, Sex::Female).category, "Aceptable");
    }
}
