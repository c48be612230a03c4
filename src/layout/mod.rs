//! Layout module orchestrator.
//!
//! Downstream modules import the axis model, parameter value types, gap and
//! border descriptions from here while the details live in private modules.

mod border;
mod core;
mod fit;
mod gap;

pub use border::{Border, BorderGlyph, BorderHook, BorderHookContext, Corners};
pub use core::{
    Axis, AxisValues, Bounds, Dimension, Inset, Insets, LogicalEdge, Orientation, Percent,
    PhysicalEdge, Span, axis_extent,
};
pub use fit::shrink_to_fit;
pub use gap::{Gap, GapInput, GapValue, Separator};
