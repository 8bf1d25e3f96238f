//! # BMI Category Model
//!
//! The four standard bands, ordered by their lower bound.

use std::fmt;

/// Lower bound of the Normal band
pub const NORMAL_LOWER_BOUND: f64 = 18.5;
/// Lower bound of the Overweight band
pub const OVERWEIGHT_LOWER_BOUND: f64 = 25.0;
/// Lower bound of the Obese band
pub const OBESE_LOWER_BOUND: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    /// All categories in ascending order
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Classify a BMI value. Each band includes its lower edge; the first
    /// matching band in ascending order wins.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_LOWER_BOUND {
            Category::Underweight
        } else if bmi < OVERWEIGHT_LOWER_BOUND {
            Category::Normal
        } else if bmi < OBESE_LOWER_BOUND {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        }
    }

    /// Smallest BMI in this band (inclusive)
    pub fn lower_bound(&self) -> f64 {
        match self {
            Category::Underweight => 0.0,
            Category::Normal => NORMAL_LOWER_BOUND,
            Category::Overweight => OVERWEIGHT_LOWER_BOUND,
            Category::Obese => OBESE_LOWER_BOUND,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
