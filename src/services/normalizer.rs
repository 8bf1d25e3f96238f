//! # Height Unit Normalizer
//!
//! People report height as 170 or as 1.70. Nobody is taller than 3 meters,
//! so anything above that is taken to be centimeters.

use crate::config::{CENTIMETERS_PER_METER, CENTIMETER_THRESHOLD};

/// Convert a positive height in centimeters or meters into meters.
///
/// Values strictly greater than 3 are divided by 100; 3 itself and anything
/// below is returned unchanged.
pub fn to_meters(height: f64) -> f64 {
    if height > CENTIMETER_THRESHOLD {
        height / CENTIMETERS_PER_METER
    } else {
        height
    }
}
