//! # bmi - Body Mass Index Calculator
//!
//! Computes BMI from a weight in kilograms and a height in centimeters or
//! meters, and classifies it into one of four bands.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   Measurement   ┌────────────┐   meters   ┌────────────┐
//! │ InputResolver│────────────────▶│ Normalizer │───────────▶│ Calculator │
//! │ - arguments  │                 └────────────┘            └─────┬──────┘
//! │ - prompts    │                                                 │ bmi
//! └──────────────┘                 ┌────────────┐  BmiReport ┌─────▼──────┐
//!                                  │  Reporter  │◀───────────│ Classifier │
//!                                  └────────────┘            └────────────┘
//! ```
//!
//! Parse failures exit with status 2 and non-positive input with status 3.

pub mod app;
pub mod cmd_args;
pub mod config;
pub mod error;
pub mod input;
pub mod io;
pub mod models;
pub mod report;
pub mod services;

// Re-export main types for easy access
pub use app::{exit_code, run};
pub use cmd_args::CommandLineArgs;
pub use error::{BmiError, Field};
pub use models::{BmiReport, Category, InputMode, Measurement};
pub use services::{calculate_bmi, to_meters};
