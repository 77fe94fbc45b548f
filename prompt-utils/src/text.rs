//! Small text helpers shared by the prompt frontends.

use std::io::{self, Write};

/// Returns the plural suffix for a count: empty for exactly one, `"s"` otherwise.
pub fn plural_suffix(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Returns the plural suffix for a slice, based on its length.
pub fn plural_suffix_of<T>(items: &[T]) -> &'static str {
    plural_suffix(items.len())
}

/// Writes `text` followed by a newline iff `verbose` is set.
///
/// # Errors
///
/// Propagates any write failure on `output`.
pub fn write_if_verbose(output: &mut impl Write, text: &str, verbose: bool) -> io::Result<()> {
    if verbose {
        writeln!(output, "{text}")?;
    }
    Ok(())
}

/// Prints `text` to stdout iff `verbose` is set.
pub fn print_if_verbose(text: &str, verbose: bool) {
    if verbose {
        println!("{text}");
    }
}
