// ABOUTME: Mean arterial pressure from systolic/diastolic readings with ordering validation
// ABOUTME: MAP = diastolic + pulse pressure / 3; systolic must strictly exceed diastolic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Blood Pressure Calculator
//!
//! Mean arterial pressure (MAP) approximates the average perfusion pressure
//! over a cardiac cycle: diastolic plus one third of the pulse pressure.
//! Readings where systolic does not strictly exceed diastolic are rejected
//! before anything is computed.

use crate::analysis::AnalysisResult;
use crate::classification::{Band, Classification, ThresholdTable};
use crate::errors::AppResult;
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::types::{IntermediateValue, MetricKind, RiskLevel, Sex};
use crate::validation::{require_age, require_ordered, require_pressure};
use tracing::debug;

/// MAP bands (mmHg); 70-100 is the usual perfusion target
static MAP_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(60.0, ("Baja", RiskLevel::High)),
    Band::new(70.0, ("Límite inferior", RiskLevel::Moderate)),
    Band::new(100.0, ("Normal", RiskLevel::Low)),
    Band::new(110.0, ("Límite superior", RiskLevel::Moderate)),
    Band::new(f64::INFINITY, ("Alta", RiskLevel::High)),
]);

static PRESSURE_RULES: RuleSet = RuleSet {
    risk_factors: &[
        Rule::new(
            RiskLevel::Moderate,
            "Presión arterial media fuera del rango óptimo de perfusión",
        ),
        Rule::new(
            RiskLevel::High,
            "Valores sostenidos en este rango dañan órganos diana",
        ),
    ],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "Reduzca la ingesta de sodio y modere el consumo de alcohol",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Practique ejercicio aeróbico regular y gestione el estrés",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Mida su presión arterial al menos una vez al año",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Registre mediciones en casa durante una semana y repita la evaluación",
        ),
        Rule::new(
            RiskLevel::High,
            "Consulte a su médico a la brevedad con un registro de mediciones",
        ),
    ],
};

/// Inputs for a blood-pressure analysis
#[derive(Debug, Clone, Copy)]
pub struct BloodPressureInput {
    /// Systolic pressure (mmHg)
    pub systolic_mmhg: f64,
    /// Diastolic pressure (mmHg)
    pub diastolic_mmhg: f64,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
}

/// Mean arterial pressure in mmHg
#[must_use]
pub fn mean_arterial_pressure(systolic_mmhg: f64, diastolic_mmhg: f64) -> f64 {
    diastolic_mmhg + (systolic_mmhg - diastolic_mmhg) / 3.0
}

/// Classify a MAP value
#[must_use]
pub fn classify(map_mmhg: f64) -> Classification {
    let (ordinal, (category, risk)) = MAP_BANDS.classify_indexed(map_mmhg);
    Classification::new(category, ordinal as u8, risk)
}

/// Full blood-pressure analysis
///
/// # Errors
///
/// Returns `AppError` if either reading is outside the physiological range
/// or systolic does not strictly exceed diastolic.
pub fn analyze_blood_pressure(input: &BloodPressureInput) -> AppResult<AnalysisResult> {
    require_pressure("systolic_mmhg", input.systolic_mmhg)?;
    require_pressure("diastolic_mmhg", input.diastolic_mmhg)?;
    require_ordered(
        ("systolic_mmhg", input.systolic_mmhg),
        ("diastolic_mmhg", input.diastolic_mmhg),
    )?;
    require_age(input.age_years)?;

    let map = mean_arterial_pressure(input.systolic_mmhg, input.diastolic_mmhg);
    let pulse_pressure = input.systolic_mmhg - input.diastolic_mmhg;
    let classification = classify(map);
    debug!(map, pulse_pressure, category = %classification.category, "map computed");

    let interpretation = format!(
        "Su presión arterial media es {map:.1} mmHg ({}/{} mmHg), un valor {}.",
        input.systolic_mmhg,
        input.diastolic_mmhg,
        classification.category.to_lowercase()
    );
    let plan = PRESSURE_RULES.generate(
        classification.risk_level,
        Demographics {
            sex: input.sex,
            age_years: input.age_years,
        },
        interpretation,
    );

    Ok(AnalysisResult::new(
        MetricKind::MeanArterialPressure,
        map,
        "mmHg",
        classification,
    )
    .with_intermediates(vec![IntermediateValue::new(
        "presion_de_pulso",
        pulse_pressure,
        "mmHg",
    )])
    .with_plan(plan))
}
