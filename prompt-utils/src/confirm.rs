//! Yes/no confirmation prompt.

use std::io::{self, BufRead, Write};

use crate::config::YES_NO_SUFFIX;
use crate::error::Result;
use crate::io::{read_response, write_prompt};

/// Asks a yes/no question and returns the normalized answer.
///
/// Appends `" (yes or no): "` to the question. The exact tokens `y`, `ye`,
/// and `yes` answer `"yes"`; `n` and `no` answer `"no"` (case-sensitive,
/// matching the menu selector's strictness). An empty line returns
/// `default` verbatim, without normalizing it against the recognized set.
/// Anything else prints an error and re-prompts.
///
/// # Errors
///
/// Returns an error when `input` closes before a valid response arrives or
/// when writing to `output` fails.
pub fn confirm(
    prompt: &str,
    default: &str,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<String> {
    let full_prompt = format!("{prompt}{YES_NO_SUFFIX}");

    loop {
        write_prompt(&mut output, &full_prompt)?;
        let response = read_response(&mut input)?;

        if response.is_empty() {
            return Ok(default.to_string());
        }
        match response.as_str() {
            "y" | "ye" | "yes" => return Ok("yes".to_string()),
            "n" | "no" => return Ok("no".to_string()),
            other => {
                writeln!(output, "Invalid response '{other}'. Please enter y or n.")?;
            }
        }
    }
}

/// [`confirm`] bound to the process stdin and stdout.
pub fn confirm_stdio(prompt: &str, default: &str) -> Result<String> {
    confirm(prompt, default, io::stdin().lock(), io::stdout())
}
