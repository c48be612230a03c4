//! Render protocol and box compositor.
//!
//! A [`RenderContext`] flows down the tree; every node renders its children
//! first and hands the results to the compositor, which applies the box
//! operations in a fixed order and returns a [`Rendered`] value upward.

mod compose;
mod core;
mod style;

pub use core::{MAX_RENDER_DEPTH, RenderContext, Rendered, Shape, SiblingIndex};
pub use style::{Style, StyleFn};

pub(crate) use compose::{Composition, compose};
