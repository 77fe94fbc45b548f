//! Interactive console prompt helpers.
//!
//! This crate provides the building blocks for small line-oriented CLI
//! dialogs: a multi-column numbered choice menu with single- and
//! multi-select variants, a yes/no confirmation prompt, and a couple of
//! text utilities shared by the frontends. All interactive functions are
//! generic over the input and output streams, so tests and non-interactive
//! embedders can inject buffers instead of the process stdio.

mod config;
mod confirm;
mod error;
mod io;
mod layout;
mod select;
mod text;


pub use config::{
    SelectOptions, DEFAULT_MAX_COLUMNS, MULTI_SELECT_HINT, MULTI_SELECT_PROMPT,
    SINGLE_SELECT_PROMPT, YES_NO_SUFFIX,
};
pub use confirm::{confirm, confirm_stdio};
pub use error::{Error, Result};
pub use layout::{column_layout, column_plan, render_menu};
pub use select::{select_many, select_many_stdio, select_one, select_one_stdio};
pub use text::{plural_suffix, plural_suffix_of, print_if_verbose, write_if_verbose};
