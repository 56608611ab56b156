// ABOUTME: The calculator family: one module per metric, each exposing pure formulas and an analyzer
// ABOUTME: Analyzers validate, compute, classify, compare, and assemble the uniform result record

/// Body mass index
pub mod bmi;
/// Waist-derived shape indices: WHtR, WHR, ABSI, BRI
pub mod shape_index;
/// Estimated visceral adipose tissue
pub mod visceral_fat;
/// Bone mineral density T/Z-scores
pub mod bone_density;
/// Mean arterial pressure
pub mod blood_pressure;
/// Maximum heart rate, reserve, training zones, and recovery
pub mod heart_rate;
/// Resting/basal metabolic rate and daily energy expenditure
pub mod metabolic_rate;
/// Ideal and adjusted body weight
pub mod ideal_weight;
/// Circumference-based body fat (Navy method)
pub mod body_composition;
/// Skeletal muscle mass (Lee equation)
pub mod muscle_mass;
/// Daily protein and water requirements
pub mod nutrition_needs;
