//! Configuration constants and utilities for bmi
//!
//! There are no configuration files. Everything tunable lives here as a
//! named constant, plus the log level lookup used by the binary.

/// Environment variable name for overriding the diagnostic log level
pub const LOG_LEVEL_ENV_VAR: &str = "BMI_LOG_LEVEL";

/// Log level used when neither `--verbose` nor the environment variable is set
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// Log level used when `--verbose` is passed
pub const VERBOSE_LOG_LEVEL: &str = "debug";

/// Heights strictly above this value are read as centimeters
pub const CENTIMETER_THRESHOLD: f64 = 3.0;

/// Centimeters per meter
pub const CENTIMETERS_PER_METER: f64 = 100.0;

/// Process exit statuses
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_IO_FAILURE: i32 = 1;
pub const EXIT_PARSE_FAILURE: i32 = 2;
pub const EXIT_VALIDATION_FAILURE: i32 = 3;

/// Resolve the log level, `--verbose` first, then the environment variable,
/// then the default.
pub fn get_log_level(verbose: bool) -> String {
    if verbose {
        return VERBOSE_LOG_LEVEL.to_string();
    }

    std::env::var_os(LOG_LEVEL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .map(|val| val.trim().to_lowercase())
        .filter(|val| !val.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}
