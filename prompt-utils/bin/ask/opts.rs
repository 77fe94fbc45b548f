//! Command line argument parsing for the ask utility.

use clap::Parser;

/// Yes/no confirmation prompt
#[derive(Debug, Parser)]
#[command(
    name = "ask",
    version,
    about = "Ask a yes/no question; exit 0 for yes, 1 for no"
)]
pub struct AskOpts {
    /// Question to ask
    #[arg(value_name = "PROMPT")]
    prompt: String,

    /// Answer assumed when the response line is empty
    #[arg(short = 'd', long = "default", value_name = "ANSWER", default_value = "yes")]
    default: String,
}

impl AskOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Question to ask
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Answer assumed on an empty response
    pub fn default_answer(&self) -> &str {
        &self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the default answer flag
    #[test]
    fn default_answer_flag() {
        let opts = AskOpts::try_parse_from(["ask", "Proceed?"]).unwrap();
        assert_eq!(opts.prompt(), "Proceed?");
        assert_eq!(opts.default_answer(), "yes");

        let opts = AskOpts::try_parse_from(["ask", "-d", "no", "Proceed?"]).unwrap();
        assert_eq!(opts.default_answer(), "no");
    }

    /// Test that the prompt is required
    #[test]
    fn prompt_is_required() {
        assert!(AskOpts::try_parse_from(["ask"]).is_err());
    }
}
