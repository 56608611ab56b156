// ABOUTME: Heart-rate reserve, Karvonen training zones, and post-exercise recovery scoring
// ABOUTME: Max HR comes from a selectable formula; recovery needs at least one post-exercise reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Heart Rate Calculator
//!
//! Heart-rate reserve (estimated max HR minus resting HR) is the primary
//! value; Karvonen training zones are derived from it. When a recovery
//! measurement is supplied, the drop from exercise peak at one and/or two
//! minutes is scored as well; an abnormal recovery escalates the overall
//! risk even when the reserve alone looks good.
//!
//! # Scientific References
//!
//! - Karvonen, M.J. et al. (1957). "The effects of training on heart rate."
//!   *Ann Med Exp Biol Fenn*, 35(3), 307-315.
//! - Cole, C.R. et al. (1999). "Heart-rate recovery immediately after
//!   exercise as a predictor of mortality." *N Engl J Med*, 341(18),
//!   1351-1357. <https://doi.org/10.1056/NEJM199910283411804>

use crate::algorithms::MaxHrFormula;
use crate::analysis::AnalysisResult;
use crate::classification::{Band, Classification, ThresholdTable};
use crate::config::AnalysisConfig;
use crate::errors::{AppError, AppResult};
use crate::recommendations::{Demographics, Rule, RuleSet};
use crate::types::{IntermediateValue, MetricKind, RiskLevel, Sex};
use crate::validation::{require_age, require_heart_rate, require_ordered};
use tracing::debug;

/// Heart-rate reserve bands (bpm)
static RESERVE_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(80.0, ("Baja", RiskLevel::High)),
    Band::new(110.0, ("Moderada", RiskLevel::Moderate)),
    Band::new(140.0, ("Buena", RiskLevel::Low)),
    Band::new(f64::INFINITY, ("Excelente", RiskLevel::Low)),
]);

/// One-minute recovery drop bands (bpm); <12 is the Cole abnormal cutoff
static RECOVERY_1MIN_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(12.0, ("Anormal", RiskLevel::High)),
    Band::new(22.0, ("Normal", RiskLevel::Low)),
    Band::new(f64::INFINITY, ("Excelente", RiskLevel::Low)),
]);

/// Two-minute recovery drop bands (bpm)
static RECOVERY_2MIN_BANDS: ThresholdTable<(&str, RiskLevel)> = ThresholdTable::new(&[
    Band::new(22.0, ("Anormal", RiskLevel::High)),
    Band::new(42.0, ("Normal", RiskLevel::Low)),
    Band::new(f64::INFINITY, ("Excelente", RiskLevel::Low)),
]);

static HEART_RULES: RuleSet = RuleSet {
    risk_factors: &[
        Rule::new(
            RiskLevel::Moderate,
            "Reserva cardíaca por debajo de lo esperado para su edad",
        ),
        Rule::new(
            RiskLevel::High,
            "Baja capacidad de respuesta cardiovascular al esfuerzo",
        ),
    ],
    strategies: &[
        Rule::new(
            RiskLevel::Moderate,
            "Progrese gradualmente el volumen de ejercicio aeróbico semanal",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Incluya sesiones en zonas 2 y 3 para construir base aeróbica",
        ),
        Rule::new(
            RiskLevel::High,
            "Comience con caminatas y aumente la intensidad bajo supervisión",
        ),
    ],
    recommendations: &[
        Rule::new(
            RiskLevel::Low,
            "Mantenga su rutina de entrenamiento actual",
        ),
        Rule::new(
            RiskLevel::Moderate,
            "Registre su frecuencia cardíaca en reposo semanalmente",
        ),
        Rule::new(
            RiskLevel::High,
            "Consulte a su médico antes de aumentar la intensidad del ejercicio",
        ),
    ],
};

/// One Karvonen training zone: fraction band of the heart-rate reserve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingZone {
    /// Zone name (fixed Spanish content)
    pub name: &'static str,
    /// Lower target heart rate (bpm)
    pub lower_bpm: f64,
    /// Upper target heart rate (bpm)
    pub upper_bpm: f64,
}

/// Karvonen zone fractions of the reserve
const ZONE_FRACTIONS: [(&str, f64, f64); 5] = [
    ("Zona 1 - Recuperación", 0.50, 0.60),
    ("Zona 2 - Base aeróbica", 0.60, 0.70),
    ("Zona 3 - Aeróbica", 0.70, 0.80),
    ("Zona 4 - Umbral", 0.80, 0.90),
    ("Zona 5 - Máxima", 0.90, 1.00),
];

/// Post-exercise recovery measurement
///
/// Either post-exercise reading may be omitted, but not both.
#[derive(Debug, Clone, Copy)]
pub struct RecoveryMeasurement {
    /// Peak heart rate reached during exercise (bpm)
    pub peak_hr_bpm: f64,
    /// Heart rate one minute after stopping (bpm)
    pub post_1min_bpm: Option<f64>,
    /// Heart rate two minutes after stopping (bpm)
    pub post_2min_bpm: Option<f64>,
}

/// Inputs for a heart-rate analysis
#[derive(Debug, Clone, Copy)]
pub struct HeartRateInput {
    /// Resting heart rate (bpm)
    pub resting_hr_bpm: f64,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
    /// Max-HR formula override; the configured default applies when absent
    pub formula: Option<MaxHrFormula>,
    /// Optional post-exercise recovery measurement
    pub recovery: Option<RecoveryMeasurement>,
}

/// Heart-rate reserve: estimated max minus resting (bpm)
#[must_use]
pub fn heart_rate_reserve(max_hr_bpm: f64, resting_hr_bpm: f64) -> f64 {
    max_hr_bpm - resting_hr_bpm
}

/// Karvonen training zones: resting + fraction of reserve
#[must_use]
pub fn karvonen_zones(max_hr_bpm: f64, resting_hr_bpm: f64) -> [TrainingZone; 5] {
    let reserve = heart_rate_reserve(max_hr_bpm, resting_hr_bpm);
    ZONE_FRACTIONS.map(|(name, lower, upper)| TrainingZone {
        name,
        lower_bpm: reserve.mul_add(lower, resting_hr_bpm),
        upper_bpm: reserve.mul_add(upper, resting_hr_bpm),
    })
}

/// Classify a heart-rate reserve
#[must_use]
pub fn classify_reserve(reserve_bpm: f64) -> Classification {
    let (ordinal, (category, risk)) = RESERVE_BANDS.classify_indexed(reserve_bpm);
    Classification::new(category, ordinal as u8, risk)
}

/// Classify a one-minute recovery drop
#[must_use]
pub fn classify_recovery_1min(drop_bpm: f64) -> Classification {
    let (ordinal, (category, risk)) = RECOVERY_1MIN_BANDS.classify_indexed(drop_bpm);
    Classification::new(category, ordinal as u8, risk)
}

/// Classify a two-minute recovery drop
#[must_use]
pub fn classify_recovery_2min(drop_bpm: f64) -> Classification {
    let (ordinal, (category, risk)) = RECOVERY_2MIN_BANDS.classify_indexed(drop_bpm);
    Classification::new(category, ordinal as u8, risk)
}

/// Full heart-rate analysis; the reserve is the primary value
///
/// # Errors
///
/// Returns `AppError` if a reading is outside the physiological range, the
/// estimated max does not exceed resting, a recovery measurement carries no
/// post-exercise reading, or a post-exercise reading exceeds the peak.
pub fn analyze_heart_rate(input: &HeartRateInput) -> AppResult<AnalysisResult> {
    require_heart_rate("resting_hr_bpm", input.resting_hr_bpm)?;
    require_age(input.age_years)?;

    let formula = input
        .formula
        .unwrap_or(AnalysisConfig::global().algorithms.maxhr);
    let max_hr = formula.estimate(input.age_years, input.sex)?;
    require_ordered(("max_hr_bpm", max_hr), ("resting_hr_bpm", input.resting_hr_bpm))?;

    let reserve = heart_rate_reserve(max_hr, input.resting_hr_bpm);
    let reserve_class = classify_reserve(reserve);

    let mut intermediates = vec![IntermediateValue::new("fc_maxima_estimada", max_hr, "bpm")];
    let mut risk = reserve_class.risk_level;
    let mut abnormal_recovery = false;

    if let Some(recovery) = input.recovery {
        require_heart_rate("peak_hr_bpm", recovery.peak_hr_bpm)?;
        if recovery.post_1min_bpm.is_none() && recovery.post_2min_bpm.is_none() {
            return Err(AppError::missing_field("post_1min_bpm"));
        }
        if let Some(post) = recovery.post_1min_bpm {
            require_heart_rate("post_1min_bpm", post)?;
            require_ordered(("peak_hr_bpm", recovery.peak_hr_bpm), ("post_1min_bpm", post))?;
            let drop = recovery.peak_hr_bpm - post;
            abnormal_recovery |= classify_recovery_1min(drop).risk_level >= RiskLevel::High;
            intermediates.push(IntermediateValue::new("recuperacion_1min", drop, "bpm"));
        }
        if let Some(post) = recovery.post_2min_bpm {
            require_heart_rate("post_2min_bpm", post)?;
            require_ordered(("peak_hr_bpm", recovery.peak_hr_bpm), ("post_2min_bpm", post))?;
            let drop = recovery.peak_hr_bpm - post;
            abnormal_recovery |= classify_recovery_2min(drop).risk_level >= RiskLevel::High;
            intermediates.push(IntermediateValue::new("recuperacion_2min", drop, "bpm"));
        }
    }

    if abnormal_recovery {
        risk = risk.max(RiskLevel::High);
    }
    let classification = Classification::new(&reserve_class.category, reserve_class.ordinal, risk);
    debug!(
        reserve,
        max_hr,
        abnormal_recovery,
        category = %classification.category,
        "heart rate analyzed"
    );

    let interpretation = format!(
        "Su reserva cardíaca es {reserve:.0} bpm (máxima estimada {max_hr:.0} bpm, fórmula {}), capacidad {}.",
        formula.name(),
        classification.category.to_lowercase()
    );
    let mut plan = HEART_RULES.generate(
        risk,
        Demographics {
            sex: input.sex,
            age_years: input.age_years,
        },
        interpretation,
    );
    if abnormal_recovery {
        plan.risk_factors.insert(
            0,
            "Recuperación de frecuencia cardíaca anormal tras el esfuerzo".to_owned(),
        );
    }

    Ok(
        AnalysisResult::new(MetricKind::HeartRate, reserve, "bpm", classification)
            .with_intermediates(intermediates)
            .with_plan(plan),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_karvonen_zone_bounds() {
        let zones = karvonen_zones(180.0, 60.0);
        // Reserve 120: zone 1 = 60 + [0.5, 0.6]*120
        assert!((zones[0].lower_bpm - 120.0).abs() < 1e-9);
        assert!((zones[0].upper_bpm - 132.0).abs() < 1e-9);
        assert!((zones[4].upper_bpm - 180.0).abs() < 1e-9);
        // Zones tile the reserve without gaps
        for pair in zones.windows(2) {
            assert!((pair[0].upper_bpm - pair[1].lower_bpm).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reserve_classification() {
        assert_eq!(classify_reserve(75.0).category, "Baja");
        assert_eq!(classify_reserve(120.0).category, "Buena");
        assert_eq!(classify_reserve(145.0).category, "Excelente");
    }

    #[test]
    fn test_recovery_cutoffs() {
        assert_eq!(classify_recovery_1min(11.9).category, "Anormal");
        assert_eq!(classify_recovery_1min(12.0).category, "Normal");
        assert_eq!(classify_recovery_2min(21.0).category, "Anormal");
        assert_eq!(classify_recovery_2min(45.0).category, "Excelente");
    }

    #[test]
    fn test_analysis_without_recovery() {
        let input = HeartRateInput {
            resting_hr_bpm: 60.0,
            sex: Sex::Male,
            age_years: 30,
            formula: None,
            recovery: None,
        };
        let result = analyze_heart_rate(&input).unwrap();
        // Tanaka: 208 - 21 = 187; reserve 127
        assert!((result.value - 127.0).abs() < 1e-9);
        assert_eq!(result.classification.category, "Buena");
    }

    #[test]
    fn test_abnormal_recovery_escalates_risk() {
        let input = HeartRateInput {
            resting_hr_bpm: 60.0,
            sex: Sex::Male,
            age_years: 30,
            formula: None,
            recovery: Some(RecoveryMeasurement {
                peak_hr_bpm: 175.0,
                post_1min_bpm: Some(168.0),
                post_2min_bpm: None,
            }),
        };
        let result = analyze_heart_rate(&input).unwrap();
        assert_eq!(result.classification.risk_level, RiskLevel::High);
        assert!(result.risk_factors[0].contains("Recuperación"));
    }

    #[test]
    fn test_recovery_requires_at_least_one_reading() {
        let input = HeartRateInput {
            resting_hr_bpm: 60.0,
            sex: Sex::Female,
            age_years: 40,
            formula: None,
            recovery: Some(RecoveryMeasurement {
                peak_hr_bpm: 170.0,
                post_1min_bpm: None,
                post_2min_bpm: None,
            }),
        };
        let err = analyze_heart_rate(&input).unwrap_err();
        assert_eq!(err.field, Some("post_1min_bpm"));
    }

    #[test]
    fn test_post_reading_above_peak_is_rejected() {
        let input = HeartRateInput {
            resting_hr_bpm: 60.0,
            sex: Sex::Male,
            age_years: 35,
            formula: None,
            recovery: Some(RecoveryMeasurement {
                peak_hr_bpm: 160.0,
                post_1min_bpm: Some(165.0),
                post_2min_bpm: None,
            }),
        };
        assert!(analyze_heart_rate(&input).is_err());
    }

    #[test]
    fn test_formula_override_is_honored() {
        let input = HeartRateInput {
            resting_hr_bpm: 60.0,
            sex: Sex::Male,
            age_years: 30,
            formula: Some(MaxHrFormula::Haskell),
            recovery: None,
        };
        let result = analyze_heart_rate(&input).unwrap();
        // 220 - 30 = 190; reserve 130
        assert!((result.value - 130.0).abs() < 1e-9);
    }
}
