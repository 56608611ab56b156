// ABOUTME: Crate root for the body-metric analysis engine
// ABOUTME: Re-exports the analyzer functions and shared record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! # Corpometrics
//!
//! Pure computation core for a catalog of body-metric calculators: BMI,
//! waist-based shape indices (ABSI, BRI, WHtR, WHR), visceral fat, bone
//! mineral density, mean arterial pressure, heart-rate reserve and
//! recovery, resting metabolic rate, ideal weight, Navy-method body
//! composition, skeletal muscle mass, and daily nutrition needs.
//!
//! Each metric exposes one analyzer function taking typed scalar inputs
//! and returning an [`AnalysisResult`]: the primary value, named
//! intermediates, a classification with qualitative risk, a z-score and
//! percentile where a reference population exists, companion metrics
//! recomputed from the same snapshot, and a deterministic recommendation
//! plan. All output text is fixed Spanish content.
//!
//! Everything is synchronous and side-effect-free: no I/O, no shared
//! mutable state, and identical inputs always produce bit-identical
//! results, so concurrent calls need no coordination.
//!
//! ```
//! use corpometrics::{analyze_bmi, BmiInput, Sex};
//!
//! let result = analyze_bmi(&BmiInput {
//!     weight_kg: 70.0,
//!     height_cm: 175.0,
//!     waist_cm: Some(85.0),
//!     sex: Sex::Male,
//!     age_years: 30,
//! })?;
//! assert_eq!(result.classification.category, "Peso normal");
//! # Ok::<(), corpometrics::AppError>(())
//! ```

/// Selectable algorithm variants
pub mod algorithms;
/// Uniform analysis result record
pub mod analysis;
/// Metric calculators, one module per family
pub mod calculators;
/// Threshold tables and classification records
pub mod classification;
/// Companion-metric computation
pub mod comparison;
/// Analysis configuration and validation envelopes
pub mod config;
/// Unified error handling
pub mod errors;
/// Rule-based recommendation generation
pub mod recommendations;
/// Reference-population z-scores and percentiles
pub mod reference;
/// Shared domain enums and records
pub mod types;
/// Input validation
pub mod validation;

pub use algorithms::MaxHrFormula;
pub use analysis::AnalysisResult;
pub use calculators::blood_pressure::{analyze_blood_pressure, BloodPressureInput};
pub use calculators::bmi::{analyze_bmi, BmiInput};
pub use calculators::body_composition::{analyze_body_composition, BodyCompositionInput};
pub use calculators::bone_density::{analyze_bone_density, BoneDensityInput};
pub use calculators::heart_rate::{analyze_heart_rate, HeartRateInput, RecoveryMeasurement};
pub use calculators::ideal_weight::{analyze_ideal_weight, IdealWeightInput};
pub use calculators::metabolic_rate::{analyze_metabolic_rate, MetabolicRateInput};
pub use calculators::muscle_mass::{analyze_muscle_mass, MuscleMassInput};
pub use calculators::nutrition_needs::{analyze_nutrition_needs, NutritionNeedsInput};
pub use calculators::shape_index::{analyze_shape_index, ShapeIndexInput};
pub use calculators::visceral_fat::{analyze_visceral_fat, VisceralFatInput};
pub use classification::Classification;
pub use comparison::{ComparisonEntry, MeasurementSnapshot};
pub use config::AnalysisConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use recommendations::RecommendationPlan;
pub use reference::ReferenceComparison;
pub use types::{ActivityLevel, Goal, IntermediateValue, MetricKind, RiskLevel, Sex};
