//! Stream plumbing shared by the interactive prompts.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Reads one response line, stripping the trailing line terminator.
///
/// A read of zero bytes means the stream is closed; the caller would
/// otherwise re-prompt forever, so that case is surfaced as
/// [`Error::UnexpectedEof`].
pub(crate) fn read_response(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::UnexpectedEof);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Writes an inline prompt and flushes so it appears before the read blocks.
pub(crate) fn write_prompt(output: &mut impl Write, prompt: &str) -> Result<()> {
    write!(output, "{prompt}")?;
    output.flush()?;
    Ok(())
}
