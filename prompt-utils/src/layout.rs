//! Column layout computation and menu rendering.

use std::io::Write;
use std::mem;

use crate::error::{Error, Result};

/// Padding added to the longest choice when justifying menu cells
const CELL_PADDING: usize = 5;

/// Resolves the column arrangement for `count` choices.
///
/// Starting from `max_columns`, the bound shrinks while the leftover after
/// an even split trails the column count by more than one; a remainder that
/// nearly fills a row is kept and distributed instead. A bound that exceeds
/// the choice count is capped at the count and the split recomputed, which
/// settles on one row spread across `count` columns.
///
/// # Parameters
///
/// * `count` - Number of choices to arrange (must be nonzero)
/// * `max_columns` - Requested upper bound on columns (must be nonzero)
///
/// # Returns
///
/// The `(columns, rows, remainder)` triple: the settled column count, the
/// base number of rows per column, and the leftover choices to spread one
/// per column over the earliest columns.
pub fn column_plan(count: usize, max_columns: usize) -> (usize, usize, usize) {
    let mut columns = max_columns;
    loop {
        let rows = count / columns;
        let remainder = count % columns;
        if remainder == 0 {
            return (columns, rows, remainder);
        }
        if columns - remainder > 1 {
            columns -= 1;
        } else if columns > count {
            // Cap and recompute; the next pass finds the clean n-by-1 split
            columns = count;
        } else {
            return (columns, rows, remainder);
        }
    }
}

/// Partitions choices into render columns of 1-based `(index, text)` pairs.
///
/// Columns are filled one after another in input order (not round-robin):
/// each column takes the base row count, plus one extra entry while the
/// remainder from [`column_plan`] is outstanding. Indices are contiguous
/// from 1 with no gaps, so the pair list flattens back to the input order.
///
/// # Errors
///
/// Returns [`Error::EmptyChoices`] for an empty list and
/// [`Error::InvalidMaxColumns`] when `max_columns` is zero.
pub fn column_layout(choices: &[String], max_columns: usize) -> Result<Vec<Vec<(usize, &str)>>> {
    if choices.is_empty() {
        return Err(Error::EmptyChoices);
    }
    if max_columns == 0 {
        return Err(Error::InvalidMaxColumns { value: max_columns });
    }

    let (_, rows, mut remainder) = column_plan(choices.len(), max_columns);

    let mut columns = Vec::new();
    let mut column = Vec::new();
    let mut count = 0;
    let mut entries = choices.iter().enumerate();
    while let Some((position, choice)) = entries.next() {
        column.push((position + 1, choice.as_str()));
        count += 1;

        if count == rows {
            if remainder > 0 {
                if let Some((position, choice)) = entries.next() {
                    column.push((position + 1, choice.as_str()));
                }
                remainder -= 1;
            }
            count = 0;
            columns.push(mem::take(&mut column));
        }
    }
    if !column.is_empty() {
        columns.push(column);
    }

    Ok(columns)
}

/// Renders the numbered choice menu.
///
/// Prints `prompt` on its own line, then one line per menu row. Each cell
/// is formatted as `"{index:>2}) {text}"`, left-justified to the longest
/// choice plus padding, and cells are joined with a tab. Columns shorter
/// than the tallest simply contribute nothing past their length.
///
/// # Errors
///
/// Propagates the precondition errors from [`column_layout`] and any write
/// failure on `output`.
pub fn render_menu(
    output: &mut impl Write,
    prompt: &str,
    choices: &[String],
    max_columns: usize,
) -> Result<()> {
    let columns = column_layout(choices, max_columns)?;

    // Field width is based on character count, matching the justification
    let longest = choices
        .iter()
        .map(|choice| choice.chars().count())
        .max()
        .unwrap_or(0);
    let width = longest + CELL_PADDING;

    writeln!(output, "{prompt}")?;

    let tallest = columns.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..tallest {
        let cells: Vec<String> = columns
            .iter()
            .filter_map(|column| column.get(row))
            .map(|(index, text)| format!("{:<width$}", format!("{index:>2}) {text}")))
            .collect();
        writeln!(output, "{}", cells.join("\t"))?;
    }

    Ok(())
}
