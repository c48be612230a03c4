//! Tables: a header row plus data rows with negotiated column widths.

mod core;

pub use core::{Table, TableCell};
