//! Numerology calculator interface.
//!
//! The dashboard only talks to the [`Calculator`] trait; [`StandardCalculator`]
//! is the built-in implementation.

use serde::{Deserialize, Serialize};

pub mod analysis;
pub mod category;
pub mod error;
pub mod gematria;
pub mod reduce;
pub mod standard;

pub use category::{CycleField, StrengthCategory, classify_cycle_value};
pub use error::ComputationError;
pub use standard::StandardCalculator;

#[cfg(test)]
use mockall::automock;

/// The five scalar inputs of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSet {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub first_name: String,
    pub last_name: String,
}

/// One life period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleRow {
    pub period: String,
    pub ages: String,
    /// Gift value with its strength label.
    pub gift: String,
    /// Wish/peak value with its strength label.
    pub wish: String,
    /// Challenge value with its strength label.
    pub challenge: String,
    /// Cleaned numeric wish/peak value, used for classification only.
    pub wish_value: u32,
    /// Cleaned single-digit challenge value.
    pub challenge_value: u32,
}

/// One chakra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChakraRow {
    pub name: String,
    /// Value with its frequency annotation.
    pub value: String,
    pub strength: StrengthCategory,
}

/// Everything one calculation produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationOutput {
    pub cycles: Vec<CycleRow>,
    pub chakras: Vec<ChakraRow>,
    pub analysis: String,
}

#[cfg_attr(test, automock)]
pub trait Calculator {
    /// Run the full calculation for one input set.
    fn calculate(&self, input: &InputSet) -> Result<CalculationOutput, ComputationError>;
}
