// ABOUTME: Range, shape, and cross-field ordering checks run before any formula executes
// ABOUTME: Every failure names the offending field and the violated constraint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

use crate::config::AnalysisConfig;
use crate::errors::{AppError, AppResult};
use std::ops::RangeInclusive;

/// Require a strictly positive magnitude
///
/// # Errors
///
/// Returns `AppError` naming `field` if `value <= 0`.
pub fn require_positive(field: &'static str, value: f64) -> AppResult<()> {
    if value <= 0.0 || !value.is_finite() {
        return Err(AppError::out_of_range(
            field,
            format!("{field} must be a positive number, got {value}"),
        ));
    }
    Ok(())
}

/// Require a value inside an inclusive range
///
/// # Errors
///
/// Returns `AppError` naming `field` if `value` is outside `range`.
pub fn require_range(field: &'static str, value: f64, range: &RangeInclusive<f64>) -> AppResult<()> {
    if !value.is_finite() || !range.contains(&value) {
        return Err(AppError::out_of_range(
            field,
            format!(
                "{field} must be between {} and {}, got {value}",
                range.start(),
                range.end()
            ),
        ));
    }
    Ok(())
}

/// Require that the first of two compared measurements exceeds the second
///
/// Used for systolic vs. diastolic pressure and max vs. resting heart rate.
///
/// # Errors
///
/// Returns `AppError` naming the greater field if `greater <= lesser`.
pub fn require_ordered(
    greater: (&'static str, f64),
    lesser: (&'static str, f64),
) -> AppResult<()> {
    let (greater_field, greater_value) = greater;
    let (lesser_field, lesser_value) = lesser;
    if greater_value <= lesser_value {
        return Err(AppError::ordering(
            greater_field,
            format!(
                "{greater_field} ({greater_value}) must exceed {lesser_field} ({lesser_value})"
            ),
        ));
    }
    Ok(())
}

/// Require a body weight inside the configured envelope
///
/// # Errors
///
/// Returns `AppError` if outside the configured weight range.
pub fn require_weight(weight_kg: f64) -> AppResult<()> {
    require_range(
        "weight_kg",
        weight_kg,
        &AnalysisConfig::global().limits.weight_kg,
    )
}

/// Require a standing height inside the configured envelope
///
/// # Errors
///
/// Returns `AppError` if outside the configured height range.
pub fn require_height(height_cm: f64) -> AppResult<()> {
    require_range(
        "height_cm",
        height_cm,
        &AnalysisConfig::global().limits.height_cm,
    )
}

/// Require a circumference measurement inside the configured envelope
///
/// # Errors
///
/// Returns `AppError` naming `field` if outside the configured range.
pub fn require_circumference(field: &'static str, value_cm: f64) -> AppResult<()> {
    require_range(
        field,
        value_cm,
        &AnalysisConfig::global().limits.circumference_cm,
    )
}

/// Require an age inside the plausible human range
///
/// # Errors
///
/// Returns `AppError` if outside the configured age range.
pub fn require_age(age_years: u32) -> AppResult<()> {
    let range = &AnalysisConfig::global().limits.age_years;
    if !range.contains(&age_years) {
        return Err(AppError::out_of_range(
            "age_years",
            format!(
                "age_years must be between {} and {}, got {age_years}",
                range.start(),
                range.end()
            ),
        ));
    }
    Ok(())
}

/// Require a heart rate inside the physiological envelope
///
/// # Errors
///
/// Returns `AppError` naming `field` if outside the configured range.
pub fn require_heart_rate(field: &'static str, bpm: f64) -> AppResult<()> {
    require_range(field, bpm, &AnalysisConfig::global().limits.heart_rate_bpm)
}

/// Require a blood pressure inside the physiological envelope
///
/// # Errors
///
/// Returns `AppError` naming `field` if outside the configured range.
pub fn require_pressure(field: &'static str, mmhg: f64) -> AppResult<()> {
    require_range(field, mmhg, &AnalysisConfig::global().limits.pressure_mmhg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive_rejects_zero_and_nan() {
        assert!(require_positive("waist_cm", 85.0).is_ok());
        assert!(require_positive("waist_cm", 0.0).is_err());
        assert!(require_positive("waist_cm", -3.0).is_err());
        assert!(require_positive("waist_cm", f64::NAN).is_err());
    }

    #[test]
    fn test_require_ordered() {
        assert!(require_ordered(("systolic_mmhg", 120.0), ("diastolic_mmhg", 80.0)).is_ok());
        let err = require_ordered(("systolic_mmhg", 80.0), ("diastolic_mmhg", 120.0))
            .unwrap_err();
        assert_eq!(err.field, Some("systolic_mmhg"));
    }

    #[test]
    fn test_require_ordered_rejects_equal_values() {
        assert!(require_ordered(("max_hr_bpm", 150.0), ("resting_hr_bpm", 150.0)).is_err());
    }

    #[test]
    fn test_envelope_checks_name_field() {
        let err = require_weight(500.0).unwrap_err();
        assert_eq!(err.field, Some("weight_kg"));
        let err = require_age(3).unwrap_err();
        assert_eq!(err.field, Some("age_years"));
    }
}
