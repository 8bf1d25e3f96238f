//! # Services Layer
//!
//! The pure arithmetic of the calculator: unit normalization and the BMI
//! formula. Classification lives on [`crate::models::Category`].

pub mod calculator;
pub mod normalizer;

pub use calculator::calculate_bmi;
pub use normalizer::to_meters;
