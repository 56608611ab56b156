// ABOUTME: Companion-metric engine: computes sibling indices from one measurement snapshot
// ABOUTME: BMI and waist-to-height always; BRI and ABSI whenever a waist measurement exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Comparative Analysis Engine
//!
//! Given the measurements an analyzer already has, computes the sibling
//! anthropometric indices so a result can be read in context: BMI and the
//! waist-to-height ratio always, plus BRI and ABSI when a waist
//! circumference is available. Each companion carries its own category so
//! divergence between indices (a normal BMI with an elevated ABSI, say) is
//! visible without a second call.

use crate::calculators::{bmi, shape_index};
use crate::reference::populations;
use crate::types::{MetricKind, Sex};
use serde::Serialize;

/// The measurements shared across companion-metric computation
#[derive(Debug, Clone, Copy)]
pub struct MeasurementSnapshot {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Standing height (cm)
    pub height_cm: f64,
    /// Waist circumference (cm), when measured
    pub waist_cm: Option<f64>,
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
}

/// One companion metric: value plus its own category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonEntry {
    /// Metric family of this companion
    pub metric: MetricKind,
    /// Computed value
    pub value: f64,
    /// Unit of measure
    pub unit: &'static str,
    /// Category of this companion's own classification
    pub status: String,
}

/// Compute companion entries for a snapshot, skipping the caller's own metric
///
/// Inputs are assumed already validated by the calling analyzer; this
/// function performs no range checks of its own.
#[must_use]
pub fn companion_entries(snapshot: &MeasurementSnapshot, exclude: MetricKind) -> Vec<ComparisonEntry> {
    let mut entries = Vec::with_capacity(4);

    let bmi_value = bmi::body_mass_index(snapshot.weight_kg, snapshot.height_cm);
    if exclude != MetricKind::Bmi {
        entries.push(ComparisonEntry {
            metric: MetricKind::Bmi,
            value: bmi_value,
            unit: "kg/m²",
            status: bmi::classify(bmi_value).category,
        });
    }

    if let Some(waist_cm) = snapshot.waist_cm {
        if exclude != MetricKind::WaistToHeightRatio {
            let whtr = shape_index::waist_to_height_ratio(waist_cm, snapshot.height_cm);
            entries.push(ComparisonEntry {
                metric: MetricKind::WaistToHeightRatio,
                value: whtr,
                unit: "ratio",
                status: shape_index::classify_whtr(whtr).category,
            });
        }

        if exclude != MetricKind::Bri {
            let roundness = shape_index::body_roundness_index(waist_cm, snapshot.height_cm);
            entries.push(ComparisonEntry {
                metric: MetricKind::Bri,
                value: roundness.value,
                unit: "adimensional",
                status: shape_index::classify_bri(roundness.value).category,
            });
        }

        if exclude != MetricKind::Absi {
            let absi =
                shape_index::a_body_shape_index(waist_cm, snapshot.weight_kg, snapshot.height_cm);
            let z = populations::absi(snapshot.sex).z_score(absi);
            entries.push(ComparisonEntry {
                metric: MetricKind::Absi,
                value: absi,
                unit: "m^(11/6)·kg^(-2/3)",
                status: shape_index::classify_absi_z(z).category,
            });
        }
    }

    entries
}
