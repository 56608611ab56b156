// ABOUTME: End-to-end scenarios running each analyzer through the public API
// ABOUTME: Covers the reference subjects, invalid-input failures, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use corpometrics::{
    analyze_blood_pressure, analyze_bmi, analyze_body_composition, analyze_bone_density,
    analyze_heart_rate, analyze_ideal_weight, analyze_metabolic_rate, analyze_muscle_mass,
    analyze_nutrition_needs, analyze_shape_index, analyze_visceral_fat, ActivityLevel,
    BloodPressureInput, BmiInput, BodyCompositionInput, BoneDensityInput, ErrorCode,
    Goal, HeartRateInput, IdealWeightInput, MetabolicRateInput, MetricKind, MuscleMassInput,
    NutritionNeedsInput, RiskLevel, Sex, ShapeIndexInput, VisceralFatInput,
};

/// The reference subject used across scenarios: 70 kg, 175 cm, waist 85 cm,
/// male, 30 years.
fn reference_bmi_input() -> BmiInput {
    BmiInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        waist_cm: Some(85.0),
        sex: Sex::Male,
        age_years: 30,
    }
}

#[test]
fn test_reference_subject_bmi_scenario() {
    let result = analyze_bmi(&reference_bmi_input()).unwrap();

    assert!((result.value - 22.9).abs() < 0.1);
    assert_eq!(result.classification.category, "Peso normal");
    assert_eq!(result.classification.risk_level, RiskLevel::Low);

    // Companion list carries at least WHtR alongside the shape indices
    assert!(result
        .comparisons
        .iter()
        .any(|c| c.metric == MetricKind::WaistToHeightRatio));
    assert!(!result.monitoring.is_empty());
    assert!(!result.interpretation.is_empty());
    assert!(!result.recommendations.is_empty());
}

#[test]
fn test_reference_subject_shape_index_scenario() {
    let result = analyze_shape_index(&ShapeIndexInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        waist_cm: 85.0,
        hip_cm: None,
        sex: Sex::Male,
        age_years: 30,
    })
    .unwrap();

    // ABSI computed with z-score and percentile populated
    let reference = result.reference.as_ref().unwrap();
    assert!(result.value > 0.06 && result.value < 0.10);
    assert!(reference.percentile > 0.0 && reference.percentile < 100.0);
    assert!(!result.classification.category.is_empty());

    // Comparison list contains at least BMI and WHtR
    assert!(result.comparisons.iter().any(|c| c.metric == MetricKind::Bmi));
    assert!(result
        .comparisons
        .iter()
        .any(|c| c.metric == MetricKind::WaistToHeightRatio));
}

#[test]
fn test_blood_pressure_normal_scenario() {
    let result = analyze_blood_pressure(&BloodPressureInput {
        systolic_mmhg: 120.0,
        diastolic_mmhg: 80.0,
        sex: Sex::Male,
        age_years: 40,
    })
    .unwrap();

    assert!((result.value - 93.33).abs() < 0.01);
    assert_eq!(result.classification.category, "Normal");
    assert_eq!(result.classification.risk_level.display_name(), "Bajo");
}

#[test]
fn test_inverted_blood_pressure_yields_no_partial_result() {
    let err = analyze_blood_pressure(&BloodPressureInput {
        systolic_mmhg: 80.0,
        diastolic_mmhg: 120.0,
        sex: Sex::Male,
        age_years: 40,
    })
    .unwrap_err();

    assert_eq!(err.code, ErrorCode::OrderingViolation);
    assert_eq!(err.field, Some("systolic_mmhg"));
}

#[test]
fn test_raising_systolic_strictly_increases_map() {
    let mut previous = 0.0;
    for systolic in [110.0, 120.0, 130.0, 140.0, 150.0] {
        let result = analyze_blood_pressure(&BloodPressureInput {
            systolic_mmhg: systolic,
            diastolic_mmhg: 80.0,
            sex: Sex::Female,
            age_years: 45,
        })
        .unwrap();
        assert!(result.value > previous);
        previous = result.value;
    }
}

#[test]
fn test_every_analyzer_is_deterministic() {
    let a = analyze_bmi(&reference_bmi_input()).unwrap();
    let b = analyze_bmi(&reference_bmi_input()).unwrap();
    assert_eq!(a, b);

    let hr_input = HeartRateInput {
        resting_hr_bpm: 62.0,
        sex: Sex::Female,
        age_years: 41,
        formula: None,
        recovery: None,
    };
    assert_eq!(
        analyze_heart_rate(&hr_input).unwrap(),
        analyze_heart_rate(&hr_input).unwrap()
    );

    let needs = NutritionNeedsInput {
        weight_kg: 81.0,
        activity: ActivityLevel::ModeratelyActive,
        goal: Goal::Maintenance,
        sex: Sex::Male,
        age_years: 36,
    };
    assert_eq!(
        analyze_nutrition_needs(&needs).unwrap(),
        analyze_nutrition_needs(&needs).unwrap()
    );
}

#[test]
fn test_serialized_result_carries_every_field() {
    let result = analyze_bmi(&reference_bmi_input()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    for field in [
        "metric",
        "value",
        "unit",
        "intermediates",
        "classification",
        "comparisons",
        "risk_factors",
        "strategies",
        "recommendations",
        "monitoring",
        "interpretation",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
}

#[test]
fn test_ideal_weight_average_property() {
    let result = analyze_ideal_weight(&IdealWeightInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        sex: Sex::Male,
        age_years: 30,
    })
    .unwrap();

    let components: Vec<f64> = ["robinson", "miller", "devine", "hamwi", "peterson"]
        .iter()
        .map(|name| {
            result
                .intermediates
                .iter()
                .find(|i| i.name == *name)
                .unwrap()
                .value
        })
        .collect();
    let mean = components.iter().sum::<f64>() / 5.0;
    assert!((result.value - mean).abs() < 1e-9);
}

#[test]
fn test_visceral_fat_obese_subject_escalates() {
    let lean = analyze_visceral_fat(&VisceralFatInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        waist_cm: 85.0,
        sex: Sex::Male,
        age_years: 30,
    })
    .unwrap();
    let obese = analyze_visceral_fat(&VisceralFatInput {
        weight_kg: 102.0,
        height_cm: 172.0,
        waist_cm: 112.0,
        sex: Sex::Male,
        age_years: 55,
    })
    .unwrap();

    assert_eq!(lean.classification.category, "Normal");
    assert_eq!(obese.classification.category, "Alto");
    assert!(obese.classification.risk_level > lean.classification.risk_level);
    assert!(obese.risk_factors.len() >= lean.risk_factors.len());
}

#[test]
fn test_bone_density_severe_requires_fracture() {
    let base = BoneDensityInput {
        bmd_g_cm2: 0.72,
        sex: Sex::Female,
        age_years: 72,
        fragility_fracture: false,
    };
    let without = analyze_bone_density(&base).unwrap();
    assert_eq!(without.classification.category, "Osteoporosis");

    let with = analyze_bone_density(&BoneDensityInput {
        fragility_fracture: true,
        ..base
    })
    .unwrap();
    assert_eq!(with.classification.category, "Osteoporosis severa");
    assert_eq!(with.classification.risk_level, RiskLevel::VeryHigh);
}

#[test]
fn test_navy_method_branches_by_sex() {
    let male = analyze_body_composition(&BodyCompositionInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        waist_cm: 85.0,
        neck_cm: 37.0,
        hip_cm: None,
        sex: Sex::Male,
        age_years: 30,
    })
    .unwrap();
    assert!(male.value > 10.0 && male.value < 25.0);

    let female_missing_hip = analyze_body_composition(&BodyCompositionInput {
        weight_kg: 62.0,
        height_cm: 163.0,
        waist_cm: 74.0,
        neck_cm: 32.0,
        hip_cm: None,
        sex: Sex::Female,
        age_years: 28,
    });
    assert_eq!(
        female_missing_hip.unwrap_err().code,
        ErrorCode::MissingRequiredField
    );
}

#[test]
fn test_metabolic_and_muscle_results_stay_physiological() {
    let rmr = analyze_metabolic_rate(&MetabolicRateInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        sex: Sex::Male,
        age_years: 30,
        body_fat_pct: Some(15.0),
        activity: Some(ActivityLevel::ModeratelyActive),
    })
    .unwrap();
    assert!(rmr.value > 1200.0 && rmr.value < 2200.0);
    assert!(rmr.reference.is_some());

    let muscle = analyze_muscle_mass(&MuscleMassInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        sex: Sex::Male,
        age_years: 30,
        body_fat_pct: Some(15.0),
    })
    .unwrap();
    // Muscle mass is a plausible fraction of body weight
    assert!(muscle.value > 0.25 * 70.0 && muscle.value < 0.60 * 70.0);
    // Body fat unlocks the lean/fat split alongside the muscle estimate
    let lean = muscle
        .intermediates
        .iter()
        .find(|i| i.name == "masa_magra")
        .unwrap();
    let fat = muscle
        .intermediates
        .iter()
        .find(|i| i.name == "masa_grasa")
        .unwrap();
    assert!((lean.value + fat.value - 70.0).abs() < 1e-9);
}

#[test]
fn test_out_of_range_inputs_name_the_field() {
    let err = analyze_bmi(&BmiInput {
        weight_kg: 70.0,
        height_cm: 40.0,
        waist_cm: None,
        sex: Sex::Male,
        age_years: 30,
    })
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.field, Some("height_cm"));
    assert!(err.to_string().contains("height_cm"));
}
