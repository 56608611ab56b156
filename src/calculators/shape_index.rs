// ABOUTME: Waist-derived shape indices: WHtR, waist-to-hip, ABSI with z-scoring, and BRI
// ABOUTME: BRI clamps a negative eccentricity radicand to zero rather than erroring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Body Shape Index Calculator
//!
//! Central-adiposity indices built on the waist circumference. ABSI is the
//! primary value: it normalizes waist by BMI and height, so it captures the
//! mortality risk of abdominal fat independently of overall size, and is
//! scored as a z-score against sex-keyed reference means. WHtR, the
//! waist-to-hip ratio (when a hip measurement exists), and BRI travel as
//! intermediates.
//!
//! # Scientific References
//!
//! - Krakauer, N.Y., & Krakauer, J.C. (2012). "A new body shape index
//!   predicts mortality hazard independently of body mass index."
//!   *PLoS ONE*, 7(7), e39504. <https://doi.org/10.1371/journal.pone.0039504>
//! - Thomas, D.M. et al. (2013). "Relationships between body roundness with
//!   body fat and visceral adipose tissue emerging from a new geometrical
//!   model." *Obesity*, 21(11), 2264-2271. <https://doi.org/10.1002/oby.20408>
//! - Ashwell, M., & Hsieh, S.D. (2005). "Six reasons why the waist-to-height
//!   ratio is a rapid and effective global indicator for health risks of
//!   obesity." *Int J Food Sci Nutr*, 56(5), 303-307.

use crate::analysis::AnalysisResult;
use crate::calculators::bmi::body_mass_index;
use crate::classification::{Band, Classification, ThresholdTable};
use crate::comparison::{companion_entries, MeasurementSnapshot};
use crate::errors::AppResult;
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::reference::{populations, ReferenceComparison};
use crate::types::{IntermediateValue, MetricKind, RiskLevel, Sex};
use crate::validation::{require_age, require_circumference, require_height, require_weight};
use std::f64::consts::PI;
use tracing::debug;

/// Waist-to-height ratio bands (Ashwell)
static WHTR_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(0.40, ("Bajo", RiskLevel::Moderate)),
    Band::new(0.50, ("Saludable", RiskLevel::Low)),
    Band::new(0.60, ("Riesgo aumentado", RiskLevel::Moderate)),
    Band::new(f64::INFINITY, ("Riesgo alto", RiskLevel::High)),
]);

/// Waist-to-hip ratio bands, WHO cutoffs, male
static WHR_BANDS_MALE: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(0.90, ("Bajo", RiskLevel::Low)),
    Band::new(1.00, ("Moderado", RiskLevel::Moderate)),
    Band::new(f64::INFINITY, ("Alto", RiskLevel::High)),
]);

/// Waist-to-hip ratio bands, WHO cutoffs, female
static WHR_BANDS_FEMALE: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(0.80, ("Bajo", RiskLevel::Low)),
    Band::new(0.85, ("Moderado", RiskLevel::Moderate)),
    Band::new(f64::INFINITY, ("Alto", RiskLevel::High)),
]);

/// ABSI z-score mortality quintiles (Krakauer 2012)
static ABSI_Z_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(-0.868, ("Muy bajo", RiskLevel::Low)),
    Band::new(-0.272, ("Bajo", RiskLevel::Low)),
    Band::new(0.229, ("Promedio", RiskLevel::Moderate)),
    Band::new(0.798, ("Elevado", RiskLevel::High)),
    Band::new(f64::INFINITY, ("Muy alto", RiskLevel::VeryHigh)),
]);

/// BRI population quintiles
static BRI_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(3.41, ("Muy bajo", RiskLevel::Low)),
    Band::new(4.45, ("Bajo", RiskLevel::Low)),
    Band::new(5.46, ("Medio", RiskLevel::Moderate)),
    Band::new(6.91, ("Elevado", RiskLevel::High)),
    Band::new(f64::INFINITY, ("Muy alto", RiskLevel::VeryHigh)),
]);

static SHAPE_RULES: RuleSet = RuleSet {
    risk_factors: &[
        Rule::new(
            RiskLevel::Moderate,
            "Acumulación de grasa abdominal por encima del promedio poblacional",
        ),
        Rule::new(
            RiskLevel::High,
            "La grasa central se asocia a mayor riesgo cardiovascular y metabólico",
        ),
        Rule::new(
            RiskLevel::VeryHigh,
            "Perfil de forma corporal asociado al quintil de mayor mortalidad",
        ),
    ],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "Reduzca el perímetro de cintura con déficit calórico y ejercicio aeróbico",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Limite azúcares añadidos y alcohol, principales impulsores de grasa visceral",
        ),
        Rule::new(
            RiskLevel::High,
            "Añada entrenamiento de fuerza para preservar masa magra durante la pérdida",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Mantenga su perímetro de cintura actual con actividad física regular",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Mida su cintura mensualmente en el mismo punto anatómico",
        ),
        Rule::new(
            RiskLevel::High,
            "Solicite un perfil lipídico y de glucosa en su próximo control",
        ),
    ],
};

/// Inputs for a shape-index analysis
#[derive(Debug, Clone, Copy)]
pub struct ShapeIndexInput {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Standing height (cm)
    pub height_cm: f64,
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Hip circumference (cm); enables the waist-to-hip ratio
    pub hip_cm: Option<f64>,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
}

/// BRI outcome, flagging when the eccentricity radicand was clamped
#[derive(Debug, Clone, Copy)]
pub struct RoundnessOutcome {
    /// Body roundness index
    pub value: f64,
    /// True when waist/height implied an eccentricity above 1 and the
    /// radicand was clamped to zero
    pub eccentricity_clamped: bool,
}

/// Waist-to-height ratio (both in cm)
#[must_use]
pub fn waist_to_height_ratio(waist_cm: f64, height_cm: f64) -> f64 {
    waist_cm / height_cm
}

/// Waist-to-hip ratio (both in cm)
#[must_use]
pub fn waist_to_hip_ratio(waist_cm: f64, hip_cm: f64) -> f64 {
    waist_cm / hip_cm
}

/// A Body Shape Index: waist / (BMI^(2/3) · height^(1/2)), waist and height in metres
#[must_use]
pub fn a_body_shape_index(waist_cm: f64, weight_kg: f64, height_cm: f64) -> f64 {
    let bmi = body_mass_index(weight_kg, height_cm);
    let waist_m = waist_cm / 100.0;
    let height_m = height_cm / 100.0;
    waist_m / (bmi.powf(2.0 / 3.0) * height_m.sqrt())
}

/// Body roundness index (Thomas 2013), radicand clamped at zero
#[must_use]
pub fn body_roundness_index(waist_cm: f64, height_cm: f64) -> RoundnessOutcome {
    let waist_m = waist_cm / 100.0;
    let height_m = height_cm / 100.0;
    let waist_radius = waist_m / (2.0 * PI);
    let half_height = 0.5 * height_m;
    let eccentricity_sq = (waist_radius * waist_radius) / (half_height * half_height);
    let radicand = 1.0 - eccentricity_sq;
    let clamped = radicand < 0.0;
    let value = 365.5f64.mul_add(-radicand.max(0.0).sqrt(), 364.2);
    RoundnessOutcome {
        value,
        eccentricity_clamped: clamped,
    }
}

/// Classify a waist-to-height ratio
#[must_use]
pub fn classify_whtr(whtr: f64) -> Classification {
    let (ordinal, (category, risk)) = WHTR_BANDS.classify_indexed(whtr);
    Classification::new(category, ordinal as u8, risk)
}

/// Classify a waist-to-hip ratio against the sex-specific WHO cutoffs
#[must_use]
pub fn classify_whr(whr: f64, sex: Sex) -> Classification {
    let table = match sex {
        Sex::Male => &WHR_BANDS_MALE,
        Sex::Female => &WHR_BANDS_FEMALE,
    };
    let (ordinal, (category, risk)) = table.classify_indexed(whr);
    Classification::new(category, ordinal as u8, risk)
}

/// Classify an ABSI z-score against the mortality quintiles
#[must_use]
pub fn classify_absi_z(z: f64) -> Classification {
    let (ordinal, (category, risk)) = ABSI_Z_BANDS.classify_indexed(z);
    Classification::new(category, ordinal as u8, risk)
}

/// Classify a body roundness index against the population quintiles
#[must_use]
pub fn classify_bri(bri: f64) -> Classification {
    let (ordinal, (category, risk)) = BRI_BANDS.classify_indexed(bri);
    Classification::new(category, ordinal as u8, risk)
}

/// Reference population label for the ABSI comparison
const fn absi_population(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "Adultos (hombres), NHANES 1999-2004",
        Sex::Female => "Adultas (mujeres), NHANES 1999-2004",
    }
}

/// Full shape-index analysis; ABSI is the primary value
///
/// # Errors
///
/// Returns `AppError` if any measurement is outside its physiological range.
pub fn analyze_shape_index(input: &ShapeIndexInput) -> AppResult<AnalysisResult> {
    require_weight(input.weight_kg)?;
    require_height(input.height_cm)?;
    require_circumference("waist_cm", input.waist_cm)?;
    require_age(input.age_years)?;
    if let Some(hip_cm) = input.hip_cm {
        require_circumference("hip_cm", hip_cm)?;
    }

    let absi = a_body_shape_index(input.waist_cm, input.weight_kg, input.height_cm);
    let reference = ReferenceComparison::against(
        absi,
        &populations::absi(input.sex),
        absi_population(input.sex),
    );
    let classification = classify_absi_z(reference.z_score);
    debug!(
        absi,
        z = reference.z_score,
        category = %classification.category,
        "shape indices computed"
    );

    let whtr = waist_to_height_ratio(input.waist_cm, input.height_cm);
    let roundness = body_roundness_index(input.waist_cm, input.height_cm);
    let mut intermediates = vec![
        IntermediateValue::new("relacion_cintura_altura", whtr, "ratio"),
        IntermediateValue::new("indice_redondez_corporal", roundness.value, "adimensional"),
    ];
    if let Some(hip_cm) = input.hip_cm {
        intermediates.push(IntermediateValue::new(
            "relacion_cintura_cadera",
            waist_to_hip_ratio(input.waist_cm, hip_cm),
            "ratio",
        ));
    }

    let interpretation = format!(
        "Su ABSI es {absi:.4} (percentil {:.0}), un riesgo {} según la forma corporal.",
        reference.percentile,
        classification.category.to_lowercase()
    );
    let plan = SHAPE_RULES.generate(
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
        MetricKind::Absi,
        absi,
        "m^(11/6)·kg^(-2/3)",
        classification,
    )
    .with_intermediates(intermediates)
    .with_reference(reference)
    .with_comparisons(companion_entries(&snapshot, MetricKind::Absi))
    .with_plan(plan))
}
