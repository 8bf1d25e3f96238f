//! # BMI Calculator

use crate::error::BmiError;

/// Weight in kilograms divided by the square of height in meters.
///
/// The result is not rounded. Fails when `height_m` is not positive.
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Result<f64, BmiError> {
    if height_m.is_nan() || height_m <= 0.0 {
        return Err(BmiError::InvalidHeight(height_m));
    }
    Ok(weight_kg / (height_m * height_m))
}
