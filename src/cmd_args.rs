use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Weight
    /// Optional. Body weight in kilograms. Kept as raw text so that a
    /// non-numeric value is reported by bmi itself rather than by clap.
    #[clap(
        short = 'w',
        long,
        allow_hyphen_values = true,
        help = "weight in kilograms (kg)"
    )]
    weight: Option<String>,

    /// Height
    /// Optional. Values above 3 are read as centimeters, anything else as meters.
    #[clap(
        short = 't',
        long,
        allow_hyphen_values = true,
        help = "height in centimeters or meters; values above 3 are read as centimeters"
    )]
    height: Option<String>,

    /// Verbose mode
    /// Optional. Print diagnostic messages to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    weight: Option<String>,
    height: Option<String>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn weight(&self) -> Option<&str> {
        self.weight.as_deref()
    }

    pub fn height(&self) -> Option<&str> {
        self.height.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Both raw values, only when both were supplied.
    pub fn measurement_args(&self) -> Option<(&str, &str)> {
        self.weight().zip(self.height())
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            weight: args.weight,
            height: args.height,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_long_flags() {
        let args = CommandLineArgs::parse_from(["program", "--weight", "70", "--height", "170"]);
        assert_eq!(args.weight(), Some("70"));
        assert_eq!(args.height(), Some("170"));
        assert!(!args.verbose());
        assert_eq!(args.measurement_args(), Some(("70", "170")));
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-w", "70", "-t", "1.70", "-v"]);
        assert_eq!(args.weight(), Some("70"));
        assert_eq!(args.height(), Some("1.70"));
        assert!(args.verbose());
    }

    #[test]
    fn test_negative_values_are_accepted_as_values() {
        let args = CommandLineArgs::parse_from(["program", "-w", "-5", "-t", "170"]);
        assert_eq!(args.weight(), Some("-5"));
    }

    #[test]
    fn test_non_numeric_values_are_kept_raw() {
        let args = CommandLineArgs::parse_from(["program", "--weight", "abc", "--height", "170"]);
        assert_eq!(args.weight(), Some("abc"));
    }

    #[test]
    fn test_partial_args_have_no_measurement() {
        let args = CommandLineArgs::parse_from(["program", "--weight", "70"]);
        assert_eq!(args.weight(), Some("70"));
        assert_eq!(args.height(), None);
        assert_eq!(args.measurement_args(), None);
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.weight(), None);
        assert_eq!(args.height(), None);
        assert!(!args.verbose());
    }
}
