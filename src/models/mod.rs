//! # Models Module
//!
//! The transient values that flow through one calculation.

pub mod category;
pub mod measurement;

pub use category::Category;
pub use measurement::{BmiReport, InputMode, Measurement};
