//! # Measurement Model
//!
//! Raw input as acquired from the user, and the computed report.

use super::Category;
use crate::error::{BmiError, Field};

/// Where the measurement came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Both values were given as command arguments
    Arguments,
    /// Values were read from prompts on stdin
    Interactive,
}

/// Parsed weight and height, before validation and normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Kilograms
    pub weight_kg: f64,
    /// Centimeters or meters, not yet normalized
    pub height_raw: f64,
    pub mode: InputMode,
}

impl Measurement {
    /// Parse both raw values. Weight is checked first.
    pub fn parse(weight: &str, height: &str, mode: InputMode) -> Result<Self, BmiError> {
        Ok(Self {
            weight_kg: parse_number(weight, Field::Weight, mode)?,
            height_raw: parse_number(height, Field::Height, mode)?,
            mode,
        })
    }

    /// Both values must be strictly positive and finite.
    pub fn validate(self) -> Result<Self, BmiError> {
        for (field, value) in [
            (Field::Weight, self.weight_kg),
            (Field::Height, self.height_raw),
        ] {
            if !is_positive(value) {
                return Err(BmiError::Validation { field, value });
            }
        }
        Ok(self)
    }
}

fn parse_number(raw: &str, field: Field, mode: InputMode) -> Result<f64, BmiError> {
    raw.trim().parse::<f64>().map_err(|_| BmiError::Parse {
        mode,
        field,
        input: raw.trim().to_string(),
    })
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// A computed BMI and its band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: Category,
}

impl BmiReport {
    pub fn new(bmi: f64) -> Self {
        Self {
            bmi,
            category: Category::from_bmi(bmi),
        }
    }
}
