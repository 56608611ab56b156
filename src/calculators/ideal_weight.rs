// ABOUTME: Ideal body weight as the average of five height-based formulas, plus adjusted weight
// ABOUTME: Classification keys off the percentage deviation of actual weight from the average
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Ideal Weight Calculator
//!
//! Five published height-based estimators (Robinson, Miller, Devine, Hamwi,
//! Peterson) run in parallel and their arithmetic mean is the primary value.
//! Adjusted body weight, used for dosing and nutrition planning in subjects
//! far from the ideal, is ideal + 0.4 × (actual − ideal). All but Peterson
//! work in inches over five feet; heights below five feet clamp that term
//! to zero.
//!
//! # Scientific References
//!
//! - Robinson, J.D. et al. (1983). "Determination of ideal body weight for
//!   drug dosage calculations." *Am J Hosp Pharm*, 40(6), 1016-1019.
//! - Pai, M.P., & Paloucek, F.P. (2000). "The origin of the 'ideal' body
//!   weight equations." *Ann Pharmacother*, 34(9), 1066-1069.
//! - Peterson, C.M. et al. (2016). "Universal equation for estimating ideal
//!   body weight and body weight at any BMI." *Am J Clin Nutr*, 103(5),
//!   1197-1203. <https://doi.org/10.3945/ajcn.115.121178>

use crate::analysis::AnalysisResult;
use crate::classification::{Band, Classification, ThresholdTable};
use crate::comparison::{companion_entries, MeasurementSnapshot};
use crate::errors::AppResult;
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::types::{IntermediateValue, MetricKind, RiskLevel, Sex};
use crate::validation::{require_age, require_height, require_weight};
use tracing::debug;

const CM_PER_INCH: f64 = 2.54;

/// Deviation of actual weight from the ideal average (%)
static DEVIATION_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(-15.0, ("Muy por debajo del ideal", RiskLevel::High)),
    Band::new(-5.0, ("Por debajo del ideal", RiskLevel::Moderate)),
    Band::new(10.0, ("Cercano al ideal", RiskLevel::Low)),
    Band::new(20.0, ("Por encima del ideal", RiskLevel::Moderate)),
    Band::new(f64::INFINITY, ("Muy por encima del ideal", RiskLevel::High)),
]);

static WEIGHT_RULES: RuleSet = RuleSet {
    risk_factors: &[
        Rule::new(
            RiskLevel::Moderate,
            "Peso corporal alejado del rango ideal para su estatura",
        ),
        Rule::new(
            RiskLevel::High,
            "Desviación marcada respecto al peso ideal estimado",
        ),
    ],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "Apunte a cambios de peso graduales, de 0.25 a 0.5 kg por semana",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Combine ajuste calórico con entrenamiento de fuerza",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Mantenga su peso actual con hábitos estables",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Use el peso ajustado como referencia para planificar la ingesta",
        ),
        Rule::new(
            RiskLevel::High,
            "Solicite acompañamiento profesional para normalizar su peso",
        ),
    ],
};

/// Inputs for an ideal-weight analysis
#[derive(Debug, Clone, Copy)]
pub struct IdealWeightInput {
    /// Actual body weight (kg)
    pub weight_kg: f64,
    /// Standing height (cm)
    pub height_cm: f64,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
}

/// The five component estimates, in kg
#[derive(Debug, Clone, Copy)]
pub struct IdealWeightEstimates {
    /// Robinson (1983)
    pub robinson: f64,
    /// Miller (1983)
    pub miller: f64,
    /// Devine (1974)
    pub devine: f64,
    /// Hamwi (1964)
    pub hamwi: f64,
    /// Peterson (2016), BMI-22 based
    pub peterson: f64,
}

impl IdealWeightEstimates {
    /// Arithmetic mean of the five estimates
    #[must_use]
    pub fn average(&self) -> f64 {
        (self.robinson + self.miller + self.devine + self.hamwi + self.peterson) / 5.0
    }
}

/// Inches of height above five feet, clamped at zero
fn inches_over_five_feet(height_cm: f64) -> f64 {
    (height_cm / CM_PER_INCH - 60.0).max(0.0)
}

/// All five ideal-weight estimates for a height and sex
#[must_use]
pub fn ideal_weight_estimates(height_cm: f64, sex: Sex) -> IdealWeightEstimates {
    let over = inches_over_five_feet(height_cm);
    let height_m = height_cm / 100.0;
    let (robinson, miller, devine, hamwi) = match sex {
        Sex::Male => (
            1.9f64.mul_add(over, 52.0),
            1.41f64.mul_add(over, 56.2),
            2.3f64.mul_add(over, 50.0),
            2.7f64.mul_add(over, 48.0),
        ),
        Sex::Female => (
            1.7f64.mul_add(over, 49.0),
            1.36f64.mul_add(over, 53.1),
            2.3f64.mul_add(over, 45.5),
            2.2f64.mul_add(over, 45.5),
        ),
    };
    // Peterson targets BMI 22 directly and is sex-independent
    let peterson = 2.2f64.mul_add(22.0, 3.5 * 22.0 * (height_m - 1.5));
    IdealWeightEstimates {
        robinson,
        miller,
        devine,
        hamwi,
        peterson,
    }
}

/// Adjusted body weight: ideal + 0.4 × (actual − ideal)
#[must_use]
pub fn adjusted_weight(ideal_kg: f64, actual_kg: f64) -> f64 {
    0.4f64.mul_add(actual_kg - ideal_kg, ideal_kg)
}

/// Classify the percentage deviation of actual weight from the ideal
#[must_use]
pub fn classify_deviation(deviation_pct: f64) -> Classification {
    let (ordinal, (category, risk)) = DEVIATION_BANDS.classify_indexed(deviation_pct);
    Classification::new(category, ordinal as u8, risk)
}

/// Full ideal-weight analysis; the five-formula average is the primary value
///
/// # Errors
///
/// Returns `AppError` if weight, height, or age is outside its range.
pub fn analyze_ideal_weight(input: &IdealWeightInput) -> AppResult<AnalysisResult> {
    require_weight(input.weight_kg)?;
    require_height(input.height_cm)?;
    require_age(input.age_years)?;

    let estimates = ideal_weight_estimates(input.height_cm, input.sex);
    let ideal = estimates.average();
    let adjusted = adjusted_weight(ideal, input.weight_kg);
    let deviation_pct = (input.weight_kg - ideal) / ideal * 100.0;
    let classification = classify_deviation(deviation_pct);
    debug!(ideal, adjusted, deviation_pct, "ideal weight computed");

    let interpretation = format!(
        "Su peso ideal estimado es {ideal:.1} kg; su peso actual está {} ({deviation_pct:+.1}%).",
        classification.category.to_lowercase()
    );
    let plan = WEIGHT_RULES.generate(
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

    Ok(
        AnalysisResult::new(MetricKind::IdealWeight, ideal, "kg", classification)
            .with_intermediates(vec![
                IntermediateValue::new("robinson", estimates.robinson, "kg"),
                IntermediateValue::new("miller", estimates.miller, "kg"),
                IntermediateValue::new("devine", estimates.devine, "kg"),
                IntermediateValue::new("hamwi", estimates.hamwi, "kg"),
                IntermediateValue::new("peterson", estimates.peterson, "kg"),
                IntermediateValue::new("peso_ajustado", adjusted, "kg"),
                IntermediateValue::new("desviacion", deviation_pct, "%"),
            ])
            .with_comparisons(companion_entries(&snapshot, MetricKind::IdealWeight))
            .with_plan(plan),
    )
}
