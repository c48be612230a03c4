//! Terminal display width helpers.
//!
//! Everything that needs to know how many columns a string occupies goes
//! through here: ANSI escape sequences are zero-width, wide glyphs count as
//! two cells, and line edits (wrap, truncate, pad) never split an escape or a
//! grapheme cluster.

mod ansi;
mod edit;
mod utils;
mod wrap;

pub use ansi::{Fragment, fragments, is_reset, is_sgr, restore_after_resets};
pub use edit::{fit_to, overlay_column, pad_to, repeat_to_width, truncate};
pub use utils::{display_width, grapheme_width, size, split_lines};
pub use wrap::wrap;

pub(crate) use ansi::{Unit, units};
