// ABOUTME: Generic ordered threshold tables mapping computed values to named categories
// ABOUTME: Bands are half-open, monotonic, and jointly cover the whole real line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

use crate::types::RiskLevel;
use serde::{Deserialize, Serialize};

/// One classification band: values in `[previous upper, upper)` map to `category`
///
/// The last band of a table must use `f64::INFINITY` so every real number
/// lands in exactly one band.
#[derive(Debug, Clone, Copy)]
pub struct Band<C: Copy> {
    /// Exclusive upper bound of this band
    pub upper: f64,
    /// Category assigned to values below `upper`
    pub category: C,
}

impl<C: Copy> Band<C> {
    /// Create a new band
    #[must_use]
    pub const fn new(upper: f64, category: C) -> Self {
        Self { upper, category }
    }
}

/// Ordered threshold table over half-open bands
///
/// Lookup is a linear scan returning the first band whose upper bound
/// exceeds the value; boundary values belong to the higher band
/// (e.g. BMI 25.0 classifies as overweight, 24.9 as normal).
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<C: Copy + 'static> {
    bands: &'static [Band<C>],
}

impl<C: Copy + 'static> ThresholdTable<C> {
    /// Create a table from ordered bands; the final band must be unbounded
    #[must_use]
    pub const fn new(bands: &'static [Band<C>]) -> Self {
        Self { bands }
    }

    /// Classify a value into its band
    #[must_use]
    pub fn classify(&self, value: f64) -> C {
        for band in self.bands {
            if value < band.upper {
                return band.category;
            }
        }
        // Unreachable when the final band is unbounded; kept total anyway
        self.bands[self.bands.len() - 1].category
    }

    /// Classify a value, also returning its band position (0 = first band)
    #[must_use]
    pub fn classify_indexed(&self, value: f64) -> (usize, C) {
        for (index, band) in self.bands.iter().enumerate() {
            if value < band.upper {
                return (index, band.category);
            }
        }
        let last = self.bands.len() - 1;
        (last, self.bands[last].category)
    }

    /// The ordered bands of this table
    #[must_use]
    pub const fn bands(&self) -> &'static [Band<C>] {
        self.bands
    }
}

/// Classification of a computed value: named category plus qualitative risk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Classification {
    /// Category name (fixed Spanish content)
    pub category: String,
    /// Position of the category within its ordered set (0 = first band)
    pub ordinal: u8,
    /// Qualitative risk level
    pub risk_level: RiskLevel,
    /// Qualitative status string (fixed Spanish content)
    pub status: String,
}

impl Classification {
    /// Build a classification with the default risk-derived status string
    #[must_use]
    pub fn new(category: &str, ordinal: u8, risk_level: RiskLevel) -> Self {
        Self {
            category: category.to_owned(),
            ordinal,
            risk_level,
            status: format!("Riesgo {}", risk_level.display_name().to_lowercase()),
        }
    }

    /// Build a classification with an explicit status string
    #[must_use]
    pub fn with_status(category: &str, ordinal: u8, risk_level: RiskLevel, status: &str) -> Self {
        Self {
            category: category.to_owned(),
            ordinal,
            risk_level,
            status: status.to_owned(),
        }
    }
}
