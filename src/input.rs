//! # Input Resolver
//!
//! Decides where the measurement comes from and turns raw text into a
//! validated [`Measurement`].
//!
//! Argument mode is used only when both `--weight` and `--height` are given.
//! If either one is missing, both values are asked for interactively; a lone
//! argument is ignored rather than rejected.

use crate::cmd_args::CommandLineArgs;
use crate::error::BmiError;
use crate::io::PromptStream;
use crate::models::{InputMode, Measurement};

pub const WEIGHT_PROMPT: &str = "Enter weight (kg): ";
pub const HEIGHT_PROMPT: &str = "Enter height (cm or m, e.g. 170 or 1.70): ";

/// Pick the input mode for these arguments
pub fn select_mode(args: &CommandLineArgs) -> InputMode {
    match args.measurement_args() {
        Some(_) => InputMode::Arguments,
        None => InputMode::Interactive,
    }
}

/// Acquire, parse and validate weight and height.
pub fn resolve<P: PromptStream>(
    args: &CommandLineArgs,
    prompts: &mut P,
) -> Result<Measurement, BmiError> {
    tracing::debug!(mode = ?select_mode(args), "resolving input");

    let measurement = match args.measurement_args() {
        Some((weight, height)) => {
            tracing::debug!(weight, height, "using command arguments");
            Measurement::parse(weight, height, InputMode::Arguments)?
        }
        None => {
            if args.weight().is_some() || args.height().is_some() {
                tracing::info!("only one of weight/height given, falling back to prompts");
            }
            read_interactive(prompts)?
        }
    };

    tracing::debug!(?measurement, "parsed measurement");
    measurement.validate()
}

/// Both prompts are shown before either answer is parsed.
fn read_interactive<P: PromptStream>(prompts: &mut P) -> Result<Measurement, BmiError> {
    let weight = prompts.prompt(WEIGHT_PROMPT)?;
    let height = prompts.prompt(HEIGHT_PROMPT)?;
    Measurement::parse(&weight, &height, InputMode::Interactive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use crate::io::MockPromptStream;

    fn args(argv: &[&str]) -> CommandLineArgs {
        CommandLineArgs::parse_from(std::iter::once("bmi").chain(argv.iter().copied()))
    }

    #[test]
    fn test_argument_mode_does_not_prompt() {
        let mut prompts = MockPromptStream::empty();
        let m = resolve(&args(&["-w", "70", "-t", "170"]), &mut prompts).unwrap();
        assert_eq!(m.mode, InputMode::Arguments);
        assert_eq!(m.weight_kg, 70.0);
        assert_eq!(m.height_raw, 170.0);
        assert!(prompts.prompts().is_empty());
    }

    #[test]
    fn test_no_args_prompts_weight_then_height() {
        let mut prompts = MockPromptStream::new(["70", "1.70"]);
        let m = resolve(&args(&[]), &mut prompts).unwrap();
        assert_eq!(m.mode, InputMode::Interactive);
        assert_eq!(m.height_raw, 1.70);
        assert_eq!(prompts.prompts(), [WEIGHT_PROMPT, HEIGHT_PROMPT]);
    }

    #[test]
    fn test_partial_args_fall_back_to_prompts_for_both() {
        let mut prompts = MockPromptStream::new(["80", "180"]);
        let m = resolve(&args(&["--weight", "70"]), &mut prompts).unwrap();
        assert_eq!(select_mode(&args(&["--weight", "70"])), InputMode::Interactive);
        assert_eq!(m.mode, InputMode::Interactive);
        assert_eq!(m.weight_kg, 80.0);
        assert_eq!(prompts.prompts().len(), 2);
    }

    #[test]
    fn test_argument_parse_error() {
        let mut prompts = MockPromptStream::empty();
        let err = resolve(&args(&["--weight", "abc", "--height", "170"]), &mut prompts).unwrap_err();
        assert!(matches!(
            err,
            BmiError::Parse {
                mode: InputMode::Arguments,
                field: Field::Weight,
                ..
            }
        ));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_interactive_reads_both_lines_before_failing() {
        let mut prompts = MockPromptStream::new(["abc", "170"]);
        let err = resolve(&args(&[]), &mut prompts).unwrap_err();
        assert!(matches!(
            err,
            BmiError::Parse {
                mode: InputMode::Interactive,
                ..
            }
        ));
        assert_eq!(prompts.remaining(), 0);
    }

    #[test]
    fn test_end_of_input_is_parse_error() {
        let mut prompts = MockPromptStream::empty();
        let err = resolve(&args(&[]), &mut prompts).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_validation_error() {
        let mut prompts = MockPromptStream::empty();
        let err = resolve(&args(&["-w", "-5", "-t", "170"]), &mut prompts).unwrap_err();
        assert!(matches!(
            err,
            BmiError::Validation {
                field: Field::Weight,
                ..
            }
        ));
        assert_eq!(err.exit_code(), 3);
    }
}
