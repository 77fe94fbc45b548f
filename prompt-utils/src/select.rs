//! Numbered menu selection over injected input/output streams.

use std::io::{self, BufRead, Write};

use crate::config::{
    SelectOptions, MULTI_SELECT_HINT, MULTI_SELECT_PROMPT, SINGLE_SELECT_PROMPT,
};
use crate::error::{Error, Result};
use crate::io::{read_response, write_prompt};
use crate::layout::render_menu;

/// Resolves one comma-separated token against the 1-based index range.
fn resolve_token<'a>(token: &str, choices: &'a [String]) -> Option<&'a str> {
    let index: usize = token.trim().parse().ok()?;
    if (1..=choices.len()).contains(&index) {
        Some(choices[index - 1].as_str())
    } else {
        None
    }
}

/// Resolves a full response line to choice texts, in typed order.
///
/// Every token is validated; the first bad one is handed back untrimmed so
/// the error message echoes exactly what the user typed.
fn resolve_line(line: &str, choices: &[String]) -> std::result::Result<Vec<String>, String> {
    let mut resolved = Vec::new();
    for token in line.split(',') {
        match resolve_token(token, choices) {
            Some(text) => resolved.push(text.to_string()),
            None => return Err(token.to_string()),
        }
    }
    Ok(resolved)
}

/// Counts an invalid response against the optional retry budget.
fn note_invalid(used: &mut usize, limit: Option<usize>) -> Result<()> {
    *used += 1;
    if let Some(limit) = limit {
        if *used > limit {
            return Err(Error::RetriesExhausted { attempts: *used });
        }
    }
    Ok(())
}

/// Prompts for exactly one choice from a numbered menu.
///
/// Renders the menu, reads one line, and validates it as a single 1-based
/// choice index. Invalid responses re-prompt; a comma-separated list is
/// rejected with its own error message and the replacement line goes
/// through the full validation again. An empty line returns the configured
/// default verbatim, when one is set.
///
/// # Parameters
///
/// * `prompt` - Question printed above the menu
/// * `choices` - Choice texts in menu order (must be non-empty)
/// * `options` - Column bound, default, and retry budget
/// * `input` - Line-oriented response stream
/// * `output` - Stream receiving the menu, prompts, and error messages
///
/// # Returns
///
/// The text of the selected choice.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - `choices` is empty or `options.max_columns` is zero
/// - `input` reaches end of stream while a response is still expected
/// - The retry budget in `options.max_retries` is exhausted
/// - Writing to `output` fails
pub fn select_one(
    prompt: &str,
    choices: &[String],
    options: &SelectOptions,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<String> {
    render_menu(&mut output, prompt, choices, options.max_columns)?;
    write_prompt(&mut output, SINGLE_SELECT_PROMPT)?;

    let mut invalid = 0;
    let mut line = read_response(&mut input)?;
    loop {
        if line.is_empty() {
            if let Some(default) = &options.default {
                return Ok(default.clone());
            }
        }

        if line.split(',').count() > 1 {
            note_invalid(&mut invalid, options.max_retries)?;
            write_prompt(&mut output, "ERROR: Please make only one selection: ")?;
            line = read_response(&mut input)?;
            continue;
        }

        match resolve_token(&line, choices) {
            Some(text) => return Ok(text.to_string()),
            None => {
                note_invalid(&mut invalid, options.max_retries)?;
                write_prompt(
                    &mut output,
                    &format!("ERROR: selection {line} not a valid choice. Please enter again: "),
                )?;
                line = read_response(&mut input)?;
            }
        }
    }
}

/// Prompts for one or more comma-separated choices from a numbered menu.
///
/// Same protocol as [`select_one`], except a hint line announces that
/// comma-separated selections are accepted and the result preserves the
/// typed order, repeats included. Validation restarts against the whole
/// replacement line after any invalid token.
///
/// # Errors
///
/// Same failure cases as [`select_one`].
pub fn select_many(
    prompt: &str,
    choices: &[String],
    options: &SelectOptions,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<Vec<String>> {
    render_menu(&mut output, prompt, choices, options.max_columns)?;
    writeln!(output, "{MULTI_SELECT_HINT}")?;
    write_prompt(&mut output, MULTI_SELECT_PROMPT)?;

    let mut invalid = 0;
    let mut line = read_response(&mut input)?;
    loop {
        if line.is_empty() {
            if let Some(default) = &options.default {
                return Ok(vec![default.clone()]);
            }
        }

        match resolve_line(&line, choices) {
            Ok(texts) => return Ok(texts),
            Err(token) => {
                note_invalid(&mut invalid, options.max_retries)?;
                write_prompt(
                    &mut output,
                    &format!("ERROR: selection {token} not a valid choice. Please enter again: "),
                )?;
                line = read_response(&mut input)?;
            }
        }
    }
}

/// [`select_one`] bound to the process stdin and stdout.
pub fn select_one_stdio(
    prompt: &str,
    choices: &[String],
    options: &SelectOptions,
) -> Result<String> {
    select_one(prompt, choices, options, io::stdin().lock(), io::stdout())
}

/// [`select_many`] bound to the process stdin and stdout.
pub fn select_many_stdio(
    prompt: &str,
    choices: &[String],
    options: &SelectOptions,
) -> Result<Vec<String>> {
    select_many(prompt, choices, options, io::stdin().lock(), io::stdout())
}
