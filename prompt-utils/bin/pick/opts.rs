//! Command line argument parsing for the pick utility.

use clap::Parser;

use prompt_utils::{SelectOptions, DEFAULT_MAX_COLUMNS};

/// Interactive numbered choice menu
///
/// pick presents its arguments as a numbered menu on stderr, reads a
/// selection from standard input, and prints the chosen text to standard
/// output, so the result can be piped while the dialog stays visible.
#[derive(Debug, Parser)]
#[command(
    name = "pick",
    version,
    about = "Present a numbered menu and print the selection",
    long_about = "pick presents its arguments as a numbered menu on stderr, reads a selection \
                 from standard input, and prints the chosen text to standard output, so the \
                 result can be piped while the dialog stays visible."
)]
pub struct PickOpts {
    /// Choices to present, in menu order
    #[arg(value_name = "CHOICE", required = true)]
    choices: Vec<String>,

    /// Question shown above the menu
    #[arg(short = 'p', long = "prompt", default_value = "Select an option:")]
    prompt: String,

    /// Maximum number of menu columns
    #[arg(short = 'C', long = "columns", value_name = "N", default_value_t = DEFAULT_MAX_COLUMNS)]
    columns: usize,

    /// Accept multiple comma-separated selections
    #[arg(short = 'm', long = "multi")]
    multi: bool,

    /// Choice printed when the response line is empty
    #[arg(short = 'd', long = "default", value_name = "CHOICE")]
    default: Option<String>,

    /// Give up after N invalid responses instead of re-prompting forever
    #[arg(long = "retries", value_name = "N")]
    retries: Option<usize>,
}

impl PickOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build selection options from the parsed flags
    pub fn config(&self) -> SelectOptions {
        SelectOptions {
            max_columns: self.columns,
            default: self.default.clone(),
            max_retries: self.retries,
        }
    }

    /// Choices supplied on the command line
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Question shown above the menu
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Check if multi-select mode is enabled
    pub fn is_multi(&self) -> bool {
        self.multi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test mapping parsed flags onto selection options
    #[test]
    fn config_maps_flags_onto_options() {
        let opts =
            PickOpts::try_parse_from(["pick", "-C", "2", "--retries", "3", "-d", "Red", "Red", "Blue"])
                .unwrap();

        let options = opts.config();
        assert_eq!(options.max_columns, 2);
        assert_eq!(options.max_retries, Some(3));
        assert_eq!(options.default.as_deref(), Some("Red"));
        assert_eq!(opts.choices(), ["Red", "Blue"]);
        assert!(!opts.is_multi());
    }

    /// Test defaults when only choices are given
    #[test]
    fn defaults_without_flags() {
        let opts = PickOpts::try_parse_from(["pick", "a", "b", "c"]).unwrap();

        let options = opts.config();
        assert_eq!(options.max_columns, DEFAULT_MAX_COLUMNS);
        assert_eq!(options.max_retries, None);
        assert_eq!(options.default, None);
        assert_eq!(opts.prompt(), "Select an option:");
    }

    /// Test that at least one choice is required
    #[test]
    fn requires_at_least_one_choice() {
        assert!(PickOpts::try_parse_from(["pick"]).is_err());
    }

    /// Test the multi-select flag
    #[test]
    fn multi_flag_enables_multi_select() {
        let opts = PickOpts::try_parse_from(["pick", "-m", "a", "b"]).unwrap();
        assert!(opts.is_multi());
    }
}
