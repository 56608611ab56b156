// ABOUTME: Selectable algorithm variants shared by more than one calculator
// ABOUTME: Contains MaxHrFormula for age-predicted maximum heart rate estimation

/// Maximum heart rate estimation formulas
pub mod maxhr;

pub use maxhr::MaxHrFormula;
