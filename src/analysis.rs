// ABOUTME: The uniform analysis record every calculator returns
// ABOUTME: Primary value, intermediates, classification, reference comparison, companions, recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

//! Analysis Result Assembly
//!
//! Every analyzer in this crate produces the same record shape: a primary
//! value with its unit, the named intermediate values the formula computed
//! on the way, a classification, an optional reference-population
//! comparison, companion metrics computed from the same measurements, and
//! the generated recommendation plan. Identical inputs always produce a
//! bit-identical record.

use crate::classification::Classification;
use crate::comparison::ComparisonEntry;
use crate::recommendations::RecommendationPlan;
use crate::reference::ReferenceComparison;
use crate::types::{IntermediateValue, MetricKind};
use serde::Serialize;

/// Complete output of one analyzer call
///
/// Serialize-only: the record borrows static unit strings and is never
/// read back in.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisResult {
    /// Metric family this result belongs to
    pub metric: MetricKind,
    /// Primary computed value
    pub value: f64,
    /// Unit of the primary value
    pub unit: &'static str,
    /// Named intermediate values the formula produced
    pub intermediates: Vec<IntermediateValue>,
    /// Classification of the primary value
    pub classification: Classification,
    /// Z-score/percentile against a reference population, where one exists
    pub reference: Option<ReferenceComparison>,
    /// Companion metrics computed from the same measurements
    pub comparisons: Vec<ComparisonEntry>,
    /// Identified risk factors, most severe first
    pub risk_factors: Vec<String>,
    /// Improvement strategies, most severe first
    pub strategies: Vec<String>,
    /// Actionable recommendations, most severe first
    pub recommendations: Vec<String>,
    /// Monitoring cadence guidance
    pub monitoring: String,
    /// Interpretation of the finding (fixed Spanish content)
    pub interpretation: String,
}

impl AnalysisResult {
    /// Start a result from the primary value and its classification
    #[must_use]
    pub const fn new(
        metric: MetricKind,
        value: f64,
        unit: &'static str,
        classification: Classification,
    ) -> Self {
        Self {
            metric,
            value,
            unit,
            intermediates: Vec::new(),
            classification,
            reference: None,
            comparisons: Vec::new(),
            risk_factors: Vec::new(),
            strategies: Vec::new(),
            recommendations: Vec::new(),
            monitoring: String::new(),
            interpretation: String::new(),
        }
    }

    /// Attach the named intermediate values
    #[must_use]
    pub fn with_intermediates(mut self, intermediates: Vec<IntermediateValue>) -> Self {
        self.intermediates = intermediates;
        self
    }

    /// Attach a reference-population comparison
    #[must_use]
    pub fn with_reference(mut self, reference: ReferenceComparison) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Attach companion metric entries
    #[must_use]
    pub fn with_comparisons(mut self, comparisons: Vec<ComparisonEntry>) -> Self {
        self.comparisons = comparisons;
        self
    }

    /// Fold a generated recommendation plan into the record
    #[must_use]
    pub fn with_plan(mut self, plan: RecommendationPlan) -> Self {
        self.risk_factors = plan.risk_factors;
        self.strategies = plan.strategies;
        self.recommendations = plan.recommendations;
        self.monitoring = plan.monitoring;
        self.interpretation = plan.interpretation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskLevel;

    #[test]
    fn test_result_assembly_preserves_plan_ordering() {
        let classification = Classification::new("Peso normal", 1, RiskLevel::Low);
        let plan = RecommendationPlan {
            risk_factors: vec!["a".to_owned(), "b".to_owned()],
            strategies: vec![],
            recommendations: vec!["c".to_owned()],
            monitoring: "Control anual".to_owned(),
            interpretation: "Dentro del rango saludable".to_owned(),
        };
        let result = AnalysisResult::new(MetricKind::Bmi, 22.9, "kg/m²", classification)
            .with_plan(plan);
        assert_eq!(result.risk_factors, vec!["a", "b"]);
        assert_eq!(result.monitoring, "Control anual");
        assert!(result.reference.is_none());
    }

    #[test]
    fn test_result_serializes_with_snake_case_metric() {
        let classification = Classification::new("Normal", 0, RiskLevel::Low);
        let result = AnalysisResult::new(MetricKind::MeanArterialPressure, 93.33, "mmHg", classification);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["metric"], "mean_arterial_pressure");
        assert_eq!(json["unit"], "mmHg");
    }
}
