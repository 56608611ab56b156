// ABOUTME: Closed domain enums and shared record types used across all calculators
// ABOUTME: Sex, risk level, activity level, metric kind with Spanish display names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Corpometrics

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Biological sex used by sex-branched formulas and reference tables
///
/// Several regressions (Navy method, Lee muscle mass, visceral fat) encode
/// sex as a fixed 0/1 indicator; `indicator()` is the single source of that
/// mapping so no formula can silently reorder it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (regression indicator 1)
    Male,
    /// Female (regression indicator 0)
    Female,
}

impl Sex {
    /// Numeric indicator used by the original regressions (male = 1, female = 0)
    #[must_use]
    pub const fn indicator(self) -> f64 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }

    /// Display name (fixed Spanish content)
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Male => "Masculino",
            Self::Female => "Femenino",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" | "masculino" => Ok(Self::Male),
            "female" | "f" | "femenino" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// Qualitative risk level attached to every classification
///
/// Ordered from least to most severe; recommendation rules key off this
/// ordering (most severe fragments emit first).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Moderate risk
    Moderate,
    /// High risk
    High,
    /// Very high risk
    VeryHigh,
}

impl RiskLevel {
    /// Display name (fixed Spanish content)
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Bajo",
            Self::Moderate => "Moderado",
            Self::High => "Alto",
            Self::VeryHigh => "Muy alto",
        }
    }
}

/// Physical activity level for energy-expenditure and protein calculations
///
/// Activity factors follow `McArdle` et al. (2010), as used by the TDEE
/// multiplier model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// TDEE multiplier for this activity level
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtraActive => 1.9,
        }
    }

    /// Display name (fixed Spanish content)
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentario",
            Self::LightlyActive => "Ligeramente activo",
            Self::ModeratelyActive => "Moderadamente activo",
            Self::VeryActive => "Muy activo",
            Self::ExtraActive => "Extremadamente activo",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" | "light" => Ok(Self::LightlyActive),
            "moderately_active" | "moderate" => Ok(Self::ModeratelyActive),
            "very_active" => Ok(Self::VeryActive),
            "extra_active" => Ok(Self::ExtraActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: '{other}'. Valid options: sedentary, lightly_active, moderately_active, very_active, extra_active"
            ))),
        }
    }
}

/// Dietary goal used to tune the protein requirement band
///
/// A caloric deficit raises the per-kg floor to spare lean mass; a surplus
/// aimed at hypertrophy raises the whole band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Maintain current weight
    Maintenance,
    /// Lose weight (caloric deficit)
    WeightLoss,
    /// Gain muscle (caloric surplus with resistance training)
    MuscleGain,
}

impl Goal {
    /// Display name (fixed Spanish content)
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Maintenance => "Mantenimiento",
            Self::WeightLoss => "Pérdida de peso",
            Self::MuscleGain => "Ganancia muscular",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maintenance" | "mantenimiento" => Ok(Self::Maintenance),
            "weight_loss" | "perdida_de_peso" => Ok(Self::WeightLoss),
            "muscle_gain" | "ganancia_muscular" => Ok(Self::MuscleGain),
            other => Err(AppError::invalid_input(format!(
                "Unknown goal: '{other}'. Valid options: maintenance, weight_loss, muscle_gain"
            ))),
        }
    }
}

/// The metric family an analysis result belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Body mass index
    Bmi,
    /// A Body Shape Index (waist/BMI/height mortality-risk index)
    Absi,
    /// Body Roundness Index (waist/height metabolic-risk index)
    Bri,
    /// Waist-to-height ratio
    WaistToHeightRatio,
    /// Waist-to-hip ratio
    WaistToHipRatio,
    /// Estimated visceral adipose tissue
    VisceralFat,
    /// Bone mineral density (T/Z-score)
    BoneDensity,
    /// Mean arterial pressure
    MeanArterialPressure,
    /// Heart rate reserve and recovery
    HeartRate,
    /// Resting/basal metabolic rate
    MetabolicRate,
    /// Ideal and adjusted body weight
    IdealWeight,
    /// Circumference-based body composition (Navy method)
    BodyComposition,
    /// Skeletal muscle mass (Lee equation)
    MuscleMass,
    /// Daily protein and water requirements
    NutritionNeeds,
}

impl MetricKind {
    /// Display name (fixed Spanish content)
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bmi => "Índice de masa corporal",
            Self::Absi => "Índice de forma corporal (ABSI)",
            Self::Bri => "Índice de redondez corporal (BRI)",
            Self::WaistToHeightRatio => "Relación cintura-altura",
            Self::WaistToHipRatio => "Relación cintura-cadera",
            Self::VisceralFat => "Grasa visceral",
            Self::BoneDensity => "Densidad mineral ósea",
            Self::MeanArterialPressure => "Presión arterial media",
            Self::HeartRate => "Frecuencia cardíaca",
            Self::MetabolicRate => "Tasa metabólica en reposo",
            Self::IdealWeight => "Peso ideal",
            Self::BodyComposition => "Composición corporal",
            Self::MuscleMass => "Masa muscular",
            Self::NutritionNeeds => "Necesidades nutricionales",
        }
    }
}

/// A named intermediate value produced by a formula and carried downstream
///
/// Examples: the Harris-Benedict estimate alongside the primary Mifflin
/// value, or the body-fat percentage feeding lean/fat mass derivation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntermediateValue {
    /// Stable identifier for the value
    pub name: &'static str,
    /// Computed value
    pub value: f64,
    /// Unit of measure
    pub unit: &'static str,
}

impl IntermediateValue {
    /// Create a new intermediate value
    #[must_use]
    pub const fn new(name: &'static str, value: f64, unit: &'static str) -> Self {
        Self { name, value, unit }
    }
}
