// ABOUTME: Process-wide immutable analysis configuration: algorithm selection and validation envelopes
// ABOUTME: Loaded once through a OnceLock global; no runtime mutation, safe under concurrency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Analysis Configuration Module
//!
//! Immutable, versioned configuration for the analysis engine: which max-HR
//! formula to prefer and the physiological validation envelopes applied
//! before any formula runs. The global instance is initialized once at first
//! use and never mutated, so concurrent analyses need no locking.

use crate::algorithms::maxhr::MaxHrFormula;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::sync::OnceLock;

/// Algorithm selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    /// Max HR estimation formula used when the caller does not select one
    pub maxhr: MaxHrFormula,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            // Tanaka is the most accurate general-population formula
            maxhr: MaxHrFormula::Tanaka,
        }
    }
}

/// Physiological validation envelopes applied by the input validator
///
/// Ranges are deliberately generous: they reject impossible measurements,
/// not unusual ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Body weight (kg)
    pub weight_kg: RangeInclusive<f64>,
    /// Standing height (cm)
    pub height_cm: RangeInclusive<f64>,
    /// Circumference measurements: waist, hip, neck (cm)
    pub circumference_cm: RangeInclusive<f64>,
    /// Age (years)
    pub age_years: RangeInclusive<u32>,
    /// Heart rate (bpm)
    pub heart_rate_bpm: RangeInclusive<f64>,
    /// Blood pressure (mmHg)
    pub pressure_mmhg: RangeInclusive<f64>,
    /// Body fat percentage
    pub body_fat_pct: RangeInclusive<f64>,
    /// Bone mineral density (g/cm²)
    pub bmd_g_cm2: RangeInclusive<f64>,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            weight_kg: 20.0..=300.0,
            height_cm: 90.0..=260.0,
            circumference_cm: 15.0..=250.0,
            age_years: 10..=120,
            heart_rate_bpm: 25.0..=250.0,
            pressure_mmhg: 40.0..=260.0,
            body_fat_pct: 2.0..=70.0,
            bmd_g_cm2: 0.2..=2.5,
        }
    }
}

/// Main analysis configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Algorithm selection
    pub algorithms: AlgorithmConfig,
    /// Validation envelopes
    pub limits: ValidationLimits,
}

static GLOBAL_CONFIG: OnceLock<AnalysisConfig> = OnceLock::new();

impl AnalysisConfig {
    /// Get the global configuration instance, initializing defaults on first use
    pub fn global() -> &'static Self {
        GLOBAL_CONFIG.get_or_init(Self::default)
    }
}
