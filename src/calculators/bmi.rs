// ABOUTME: Body mass index: formula, WHO classification bands, and full analysis assembly
// ABOUTME: Boundary values belong to the higher band (BMI 25.0 is overweight)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Body Mass Index Calculator
//!
//! BMI = weight / height², with weight in kg and height in metres. Bands
//! follow the WHO adult classification, including the three obesity grades.
//!
//! # Scientific References
//!
//! - World Health Organization (2000). "Obesity: preventing and managing
//!   the global epidemic." *WHO Technical Report Series*, 894.

use crate::analysis::AnalysisResult;
use crate::classification::{Band, Classification, ThresholdTable};
use crate::comparison::{companion_entries, MeasurementSnapshot};
use crate::errors::AppResult;
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::types::{MetricKind, RiskLevel, Sex};
use crate::validation::{require_circumference, require_age, require_height, require_weight};
use tracing::debug;

/// WHO adult BMI bands (kg/m²)
static BMI_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(18.5, ("Bajo peso", RiskLevel::Moderate)),
    Band::new(25.0, ("Peso normal", RiskLevel::Low)),
    Band::new(30.0, ("Sobrepeso", RiskLevel::Moderate)),
    Band::new(35.0, ("Obesidad grado I", RiskLevel::High)),
    Band::new(40.0, ("Obesidad grado II", RiskLevel::VeryHigh)),
    Band::new(f64::INFINITY, ("Obesidad grado III", RiskLevel::VeryHigh)),
]);

static UNDERWEIGHT_RULES: RuleSet = RuleSet {
    risk_factors: &[
        Rule::new(
            RiskLevel::Moderate,
            "Peso por debajo del rango saludable para su estatura",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Posible ingesta energética insuficiente",
        ),
    ],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "Aumente la ingesta calórica con alimentos densos en nutrientes",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Incorpore entrenamiento de fuerza para ganar masa magra",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Moderate,
            "Consulte con un nutricionista para un plan de ganancia de peso",
        ),
        Rule::new(
            RiskLevel::Low,
            "Mantenga una alimentación variada y suficiente",
        ),
    ],
};

static EXCESS_WEIGHT_RULES: RuleSet = RuleSet {
    risk_factors: &[
        Rule::new(
            RiskLevel::Moderate,
            "Exceso de peso respecto al rango saludable",
        ),
        Rule::new(
            RiskLevel::High,
            "Mayor probabilidad de hipertensión y resistencia a la insulina",
        ),
        Rule::new(
            RiskLevel::VeryHigh,
            "Riesgo cardiometabólico muy elevado asociado a la obesidad",
        ),
    ],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "Genere un déficit calórico moderado y sostenible",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Acumule al menos 150 minutos semanales de actividad aeróbica",
        ),
        Rule::new(
            RiskLevel::High,
            "Priorice cambios de hábito supervisados sobre dietas restrictivas",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Mantenga sus hábitos actuales de alimentación y ejercicio",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Controle su peso y perímetro de cintura mensualmente",
        ),
        Rule::new(
            RiskLevel::High,
            "Solicite una valoración médica de su riesgo cardiometabólico",
        ),
        Rule::new(
            RiskLevel::VeryHigh,
            "Busque manejo médico especializado de la obesidad",
        ),
    ],
};

/// Inputs for a BMI analysis
#[derive(Debug, Clone, Copy)]
pub struct BmiInput {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Standing height (cm)
    pub height_cm: f64,
    /// Waist circumference (cm); enables the BRI/ABSI companions
    pub waist_cm: Option<f64>,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
}

/// BMI in kg/m² from weight in kg and height in cm
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value against the WHO adult bands
#[must_use]
pub fn classify(bmi: f64) -> Classification {
    let (ordinal, (category, risk)) = BMI_BANDS.classify_indexed(bmi);
    Classification::new(category, ordinal as u8, risk)
}

/// Full BMI analysis: validate, compute, classify, compare, recommend
///
/// # Errors
///
/// Returns `AppError` if any measurement is outside its physiological range.
pub fn analyze_bmi(input: &BmiInput) -> AppResult<AnalysisResult> {
    require_weight(input.weight_kg)?;
    require_height(input.height_cm)?;
    require_age(input.age_years)?;
    if let Some(waist_cm) = input.waist_cm {
        require_circumference("waist_cm", waist_cm)?;
    }

    let bmi = body_mass_index(input.weight_kg, input.height_cm);
    let classification = classify(bmi);
    debug!(bmi, category = %classification.category, "bmi computed");

    let rules = if classification.ordinal == 0 {
        &UNDERWEIGHT_RULES
    } else {
        &EXCESS_WEIGHT_RULES
    };
    let interpretation = format!(
        "Su IMC es {bmi:.1} kg/m², clasificado como {}.",
        classification.category
    );
    let plan = rules.generate(
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
        waist_cm: input.waist_cm,
        sex: input.sex,
        age_years: input.age_years,
    };

    Ok(
        AnalysisResult::new(MetricKind::Bmi, bmi, "kg/m²", classification)
            .with_comparisons(companion_entries(&snapshot, MetricKind::Bmi))
            .with_plan(plan),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_formula() {
        // 70 / 1.75^2
        assert!((body_mass_index(70.0, 175.0) - 22.857_142_857).abs() < 1e-6);
    }

    #[test]
    fn test_who_band_boundaries_belong_to_higher_band() {
        assert_eq!(classify(18.4).category, "Bajo peso");
        assert_eq!(classify(18.5).category, "Peso normal");
        assert_eq!(classify(24.9).category, "Peso normal");
        assert_eq!(classify(25.0).category, "Sobrepeso");
        assert_eq!(classify(30.0).category, "Obesidad grado I");
        assert_eq!(classify(40.0).category, "Obesidad grado III");
    }

    #[test]
    fn test_analysis_normal_weight_subject() {
        let input = BmiInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            waist_cm: Some(85.0),
            sex: Sex::Male,
            age_years: 30,
        };
        let result = analyze_bmi(&input).unwrap();
        assert!((result.value - 22.86).abs() < 0.01);
        assert_eq!(result.classification.category, "Peso normal");
        assert_eq!(result.classification.risk_level, RiskLevel::Low);
        // BMI itself is never its own companion
        assert!(result.comparisons.iter().all(|c| c.metric != MetricKind::Bmi));
        assert_eq!(result.comparisons.len(), 3);
        assert!(result.interpretation.contains("22.9"));
    }

    #[test]
    fn test_underweight_uses_gain_oriented_rules() {
        let input = BmiInput {
            weight_kg: 48.0,
            height_cm: 175.0,
            waist_cm: None,
            sex: Sex::Female,
            age_years: 25,
        };
        let result = analyze_bmi(&input).unwrap();
        assert_eq!(result.classification.category, "Bajo peso");
        assert!(result
            .strategies
            .iter()
            .any(|s| s.contains("ingesta calórica")));
    }

    #[test]
    fn test_analysis_rejects_out_of_range_weight() {
        let input = BmiInput {
            weight_kg: 400.0,
            height_cm: 175.0,
            waist_cm: None,
            sex: Sex::Male,
            age_years: 30,
        };
        let err = analyze_bmi(&input).unwrap_err();
        assert_eq!(err.field, Some("weight_kg"));
    }

    #[test]
    fn test_identical_inputs_yield_identical_results() {
        let input = BmiInput {
            weight_kg: 92.5,
            height_cm: 168.0,
            waist_cm: Some(103.0),
            sex: Sex::Male,
            age_years: 55,
        };
        let a = analyze_bmi(&input).unwrap();
        let b = analyze_bmi(&input).unwrap();
        assert_eq!(a, b);
    }
}
