//! Chainable construction surface.
//!
//! [`Tex`] is the root of a render; [`BlockBuilder`] and [`TableBuilder`]
//! assemble the nodes below it. Builders consume `self` and hand back a new
//! value, so a half-built tree can be cloned and extended independently.

mod content;
mod core;

pub use content::ContentInput;
pub use core::{BlockBuilder, TableBuilder, Tex};
