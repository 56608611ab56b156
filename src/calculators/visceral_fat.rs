// ABOUTME: Anthropometric visceral adipose tissue estimation from waist, age, sex, and BMI
// ABOUTME: Regression coefficients live in a versioned constants module, not inline literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Visceral Fat Calculator
//!
//! Estimates visceral adipose tissue (VAT) area in cm² from anthropometric
//! measurements using two published-style linear regressions. The primary
//! estimate is waist-led; a BMI-led alternative travels as an intermediate
//! so callers can see when the two disagree. Coefficients are versioned
//! configuration: changing an estimate means publishing a new coefficient
//! set, never editing a formula body.
//!
//! # Scientific References
//!
//! - Després, J.P., & Lemieux, I. (2006). "Abdominal obesity and metabolic
//!   syndrome." *Nature*, 444(7121), 881-887.
//! - Ryo, M. et al. (2005). "A new simple method for the measurement of
//!   visceral fat accumulation by bioelectrical impedance." *Diabetes Care*,
//!   28(2), 451-453.

use crate::analysis::AnalysisResult;
use crate::calculators::bmi::body_mass_index;
use crate::classification::{Band, Classification, ThresholdTable};
use crate::comparison::{companion_entries, MeasurementSnapshot};
use crate::errors::AppResult;
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::types::{IntermediateValue, MetricKind, RiskLevel, Sex};
use crate::validation::{require_age, require_circumference, require_height, require_weight};
use tracing::debug;

/// Versioned regression coefficient sets
pub mod coefficients {
    /// Linear VAT regression over waist, age, sex indicator, and BMI
    #[derive(Debug, Clone, Copy)]
    pub struct VatRegression {
        /// Coefficient on waist circumference (cm)
        pub waist: f64,
        /// Coefficient on age (years)
        pub age: f64,
        /// Coefficient on the sex indicator (male = 1)
        pub sex: f64,
        /// Coefficient on BMI (kg/m²)
        pub bmi: f64,
        /// Intercept
        pub intercept: f64,
    }

    impl VatRegression {
        /// Evaluate the regression; output in cm², floored at zero
        #[must_use]
        pub fn estimate(&self, waist_cm: f64, age_years: f64, sex_indicator: f64, bmi: f64) -> f64 {
            let vat = self.waist.mul_add(
                waist_cm,
                self.age
                    .mul_add(age_years, self.sex.mul_add(sex_indicator, self.bmi * bmi)),
            ) + self.intercept;
            vat.max(0.0)
        }
    }

    /// Waist-led regression, coefficient set v1
    pub const WAIST_LED_V1: VatRegression = VatRegression {
        waist: 2.2,
        age: 1.7,
        sex: 25.0,
        bmi: -0.9,
        intercept: -150.0,
    };

    /// BMI-led regression, coefficient set v1
    pub const BMI_LED_V1: VatRegression = VatRegression {
        waist: 0.0,
        age: 1.8,
        sex: 18.0,
        bmi: 5.0,
        intercept: -120.0,
    };
}

/// VAT area bands (cm²); 100 cm² is the widely used excess threshold
static VAT_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(100.0, ("Normal", RiskLevel::Low)),
    Band::new(130.0, ("Elevado", RiskLevel::Moderate)),
    Band::new(f64::INFINITY, ("Alto", RiskLevel::High)),
]);

static VISCERAL_RULES: RuleSet = RuleSet {
    risk_factors: &[
        Rule::new(
            RiskLevel::Moderate,
            "Acumulación de grasa visceral por encima del umbral saludable",
        ),
        Rule::new(
            RiskLevel::High,
            "La grasa visceral elevada impulsa inflamación y resistencia a la insulina",
        ),
    ],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "El ejercicio aeróbico regular reduce preferentemente la grasa visceral",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Reduzca azúcares añadidos, alcohol y alimentos ultraprocesados",
        ),
        Rule::new(
            RiskLevel::High,
            "Combine restricción calórica con al menos 4 sesiones semanales de ejercicio",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Mantenga sus niveles actuales de actividad física",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Controle su perímetro de cintura cada mes",
        ),
        Rule::new(
            RiskLevel::High,
            "Solicite una evaluación de glucosa, lípidos y presión arterial",
        ),
    ],
};

/// Inputs for a visceral-fat analysis
#[derive(Debug, Clone, Copy)]
pub struct VisceralFatInput {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Standing height (cm)
    pub height_cm: f64,
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
}

/// Primary (waist-led) VAT estimate in cm²
#[must_use]
pub fn estimated_vat_area(waist_cm: f64, age_years: u32, sex: Sex, bmi: f64) -> f64 {
    coefficients::WAIST_LED_V1.estimate(waist_cm, f64::from(age_years), sex.indicator(), bmi)
}

/// Classify a VAT area estimate
#[must_use]
pub fn classify(vat_cm2: f64) -> Classification {
    let (ordinal, (category, risk)) = VAT_BANDS.classify_indexed(vat_cm2);
    Classification::new(category, ordinal as u8, risk)
}

/// Full visceral-fat analysis
///
/// # Errors
///
/// Returns `AppError` if any measurement is outside its physiological range.
pub fn analyze_visceral_fat(input: &VisceralFatInput) -> AppResult<AnalysisResult> {
    require_weight(input.weight_kg)?;
    require_height(input.height_cm)?;
    require_circumference("waist_cm", input.waist_cm)?;
    require_age(input.age_years)?;

    let bmi = body_mass_index(input.weight_kg, input.height_cm);
    let vat = estimated_vat_area(input.waist_cm, input.age_years, input.sex, bmi);
    let alternative = coefficients::BMI_LED_V1.estimate(
        input.waist_cm,
        f64::from(input.age_years),
        input.sex.indicator(),
        bmi,
    );
    let classification = classify(vat);
    debug!(vat, alternative, category = %classification.category, "visceral fat estimated");

    let interpretation = format!(
        "Su área de grasa visceral estimada es {vat:.0} cm², un nivel {}.",
        classification.category.to_lowercase()
    );
    let plan = VISCERAL_RULES.generate(
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

    Ok(
        AnalysisResult::new(MetricKind::VisceralFat, vat, "cm²", classification)
            .with_intermediates(vec![
                IntermediateValue::new("imc", bmi, "kg/m²"),
                IntermediateValue::new("vat_alternativa_imc", alternative, "cm²"),
            ])
            .with_comparisons(companion_entries(&snapshot, MetricKind::VisceralFat))
            .with_plan(plan),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waist_led_regression_typical_subject() {
        let bmi = body_mass_index(70.0, 175.0);
        let vat = estimated_vat_area(85.0, 30, Sex::Male, bmi);
        // 2.2*85 + 1.7*30 + 25 - 0.9*22.857 - 150
        assert!((vat - 92.428_571).abs() < 1e-3);
        assert_eq!(classify(vat).category, "Normal");
    }

    #[test]
    fn test_estimate_never_negative() {
        let vat = estimated_vat_area(50.0, 12, Sex::Female, 16.0);
        assert!(vat >= 0.0);
    }

    #[test]
    fn test_sex_indicator_raises_male_estimate() {
        let male = estimated_vat_area(90.0, 45, Sex::Male, 27.0);
        let female = estimated_vat_area(90.0, 45, Sex::Female, 27.0);
        assert!((male - female - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify(99.9).category, "Normal");
        assert_eq!(classify(100.0).category, "Elevado");
        assert_eq!(classify(130.0).category, "Alto");
    }

    #[test]
    fn test_analysis_carries_alternative_estimate() {
        let input = VisceralFatInput {
            weight_kg: 95.0,
            height_cm: 170.0,
            waist_cm: 108.0,
            sex: Sex::Male,
            age_years: 52,
        };
        let result = analyze_visceral_fat(&input).unwrap();
        assert_eq!(result.classification.category, "Alto");
        assert!(result
            .intermediates
            .iter()
            .any(|i| i.name == "vat_alternativa_imc"));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("glucosa")));
    }
}
