// ABOUTME: Deterministic rule-based generator for risk factors, strategies, and monitoring text
// ABOUTME: Fixed decision tables keyed by risk level; most severe fragments emit first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Recommendation and Interpretation Generator
//!
//! Maps a classification's risk level plus demographic inputs to ordered
//! lists of risk factors, improvement strategies, recommendations, and a
//! monitoring cadence. Purely rule-based: fixed tables, deterministic
//! ordering (matching rules sorted most severe first, insertion order
//! within a severity), no randomness, no external lookup. All emitted text
//! is fixed Spanish content.

use crate::types::{RiskLevel, Sex};
use serde::{Deserialize, Serialize};

/// One canned text fragment, active at or above its severity level
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Minimum risk level at which this fragment applies
    pub min_level: RiskLevel,
    /// Fragment text (fixed Spanish content)
    pub text: &'static str,
}

impl Rule {
    /// Create a rule
    #[must_use]
    pub const fn new(min_level: RiskLevel, text: &'static str) -> Self {
        Self { min_level, text }
    }
}

/// Per-metric decision table supplied by each calculator
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    /// Risk-factor fragments
    pub risk_factors: &'static [Rule],
    /// Improvement-strategy fragments
    pub strategies: &'static [Rule],
    /// Recommendation fragments
    pub recommendations: &'static [Rule],
}

/// Demographic inputs that refine the generated text
#[derive(Debug, Clone, Copy)]
pub struct Demographics {
    /// Biological sex
    pub sex: Sex,
    /// Age in years
    pub age_years: u32,
}

/// Age at which elevated-risk findings add a tighter follow-up note
const OLDER_ADULT_AGE: u32 = 60;

/// Ordered recommendation output attached to every analysis result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationPlan {
    /// Identified risk factors, most severe first
    pub risk_factors: Vec<String>,
    /// Improvement strategies, most severe first
    pub strategies: Vec<String>,
    /// Actionable recommendations, most severe first
    pub recommendations: Vec<String>,
    /// Monitoring cadence guidance
    pub monitoring: String,
    /// Free-text interpretation of the finding
    pub interpretation: String,
}

impl RuleSet {
    /// Generate the ordered plan for a classification at `risk`
    ///
    /// Fragments whose `min_level` is at or below `risk` are selected and
    /// ordered most severe first; ties preserve table insertion order.
    #[must_use]
    pub fn generate(
        &self,
        risk: RiskLevel,
        demographics: Demographics,
        interpretation: String,
    ) -> RecommendationPlan {
        let mut risk_factors = select(self.risk_factors, risk);
        if risk >= RiskLevel::Moderate && demographics.age_years >= OLDER_ADULT_AGE {
            risk_factors.push(
                "La edad aumenta el impacto de este hallazgo; valore un seguimiento más estrecho"
                    .to_owned(),
            );
        }

        RecommendationPlan {
            risk_factors,
            strategies: select(self.strategies, risk),
            recommendations: select(self.recommendations, risk),
            monitoring: monitoring_guidance(risk).to_owned(),
            interpretation,
        }
    }
}

/// Select active fragments, most severe first, stable within a severity
fn select(rules: &'static [Rule], risk: RiskLevel) -> Vec<String> {
    let mut active: Vec<&Rule> = rules.iter().filter(|r| r.min_level <= risk).collect();
    active.sort_by(|a, b| b.min_level.cmp(&a.min_level));
    active.iter().map(|r| r.text.to_owned()).collect()
}

/// Monitoring cadence keyed by risk level
#[must_use]
pub const fn monitoring_guidance(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Low => "Control anual como parte de un chequeo general.",
        RiskLevel::Moderate => "Reevaluación en 3 a 6 meses para confirmar la tendencia.",
        RiskLevel::High => "Control cada 2 a 3 meses; valore una consulta con su médico.",
        RiskLevel::VeryHigh => {
            "Consulta médica prioritaria; seguimiento mensual hasta normalizar los valores."
        }
    }
}
