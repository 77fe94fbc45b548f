//! Options and shared constants for prompt operations.

/// Default number of menu columns
pub const DEFAULT_MAX_COLUMNS: usize = 3;

/// Selection prompt for single-select menus
pub const SINGLE_SELECT_PROMPT: &str = "Enter selection (by number): ";

/// Selection prompt for multi-select menus
pub const MULTI_SELECT_PROMPT: &str = "Enter selection(s) (by number): ";

/// Hint printed above the selection prompt in multi-select mode.
/// The leading newline separates the hint from the menu.
pub const MULTI_SELECT_HINT: &str =
    "\nYou can enter multiple selections by giving a comma-separated (e.g. 1, 5)";

/// Suffix appended to the question in yes/no confirmation prompts
pub const YES_NO_SUFFIX: &str = " (yes or no): ";

/// Configuration for choice selection prompts
#[derive(Debug, Clone)]
pub struct SelectOptions {
    /// Upper bound on the number of menu columns (at least 1). The layout
    /// may settle on fewer columns to keep the rows evenly filled.
    pub max_columns: usize,
    /// Choice returned verbatim when the response line is empty
    pub default: Option<String>,
    /// Allow this many re-prompts after invalid responses; the next invalid
    /// response fails with an error. `None` re-prompts until a valid
    /// selection arrives, which is the right behavior on a real terminal
    /// but unusable in batch contexts.
    pub max_retries: Option<usize>,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            max_columns: DEFAULT_MAX_COLUMNS,
            default: None,
            max_retries: None,
        }
    }
}
