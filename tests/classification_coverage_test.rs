// ABOUTME: Sweeps every classification table to prove exhaustive, non-overlapping coverage
// ABOUTME: Checks the shared boundary convention: a boundary value belongs to the higher band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use corpometrics::calculators::{
    blood_pressure, bmi, body_composition, heart_rate, ideal_weight, muscle_mass, shape_index,
    visceral_fat,
};
use corpometrics::Sex;

/// A dense sweep over a plausible value range; every point must classify
/// into a non-empty category with a stable ordinal.
fn sweep(classify: impl Fn(f64) -> corpometrics::Classification, low: f64, high: f64) {
    let steps = 2000;
    let mut previous_ordinal = 0u8;
    for step in 0..=steps {
        let value = (high - low).mul_add(f64::from(step) / f64::from(steps), low);
        let classification = classify(value);
        assert!(!classification.category.is_empty(), "empty category at {value}");
        assert!(
            classification.ordinal >= previous_ordinal,
            "ordinal regressed at {value}"
        );
        previous_ordinal = classification.ordinal;
    }
}

#[test]
fn test_bmi_bands_cover_and_stay_monotone() {
    sweep(bmi::classify, 5.0, 80.0);
}

#[test]
fn test_map_bands_cover_and_stay_monotone() {
    sweep(blood_pressure::classify, 30.0, 180.0);
}

#[test]
fn test_whtr_bands_cover_and_stay_monotone() {
    sweep(shape_index::classify_whtr, 0.2, 1.2);
}

#[test]
fn test_bri_bands_cover_and_stay_monotone() {
    sweep(shape_index::classify_bri, 0.0, 20.0);
}

#[test]
fn test_absi_z_bands_cover_and_stay_monotone() {
    sweep(shape_index::classify_absi_z, -4.0, 4.0);
}

#[test]
fn test_vat_bands_cover_and_stay_monotone() {
    sweep(visceral_fat::classify, 0.0, 400.0);
}

#[test]
fn test_reserve_and_recovery_bands_cover() {
    sweep(heart_rate::classify_reserve, 20.0, 200.0);
    sweep(heart_rate::classify_recovery_1min, 0.0, 60.0);
    sweep(heart_rate::classify_recovery_2min, 0.0, 90.0);
}

#[test]
fn test_deviation_bands_cover_both_directions() {
    sweep(ideal_weight::classify_deviation, -60.0, 80.0);
}

#[test]
fn test_sexed_tables_cover_for_both_sexes() {
    for sex in [Sex::Male, Sex::Female] {
        sweep(|v| body_composition::classify(v, sex), 2.0, 60.0);
        sweep(|v| muscle_mass::classify_smi(v, sex), 3.0, 15.0);
        sweep(|v| shape_index::classify_whr(v, sex), 0.5, 1.4);
    }
}

#[test]
fn test_boundary_values_belong_to_the_higher_band() {
    // The convention applied across every table in the crate
    assert_eq!(bmi::classify(24.999).category, "Peso normal");
    assert_eq!(bmi::classify(25.0).category, "Sobrepeso");
    assert_eq!(blood_pressure::classify(99.999).category, "Normal");
    assert_eq!(blood_pressure::classify(100.0).category, "Límite superior");
    assert_eq!(shape_index::classify_whtr(0.5).category, "Riesgo aumentado");
    assert_eq!(visceral_fat::classify(100.0).category, "Elevado");
}

#[test]
fn test_extreme_values_still_classify() {
    assert_eq!(bmi::classify(f64::NEG_INFINITY).category, "Bajo peso");
    assert_eq!(bmi::classify(1.0e9).category, "Obesidad grado III");
    assert_eq!(shape_index::classify_absi_z(-100.0).category, "Muy bajo");
    assert_eq!(shape_index::classify_absi_z(100.0).category, "Muy alto");
}
