//! Terminal text layout engine.
//!
//! A tree of leaves, blocks, tables and lists is laid out on a logical box
//! model (orientation-relative padding, margin, span and span range, plus
//! gaps and borders) and rendered to a single ANSI-aware string. Constraints
//! flow down the tree; rendered boxes are composed on the way back up.

pub mod builder;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod list;
pub mod logging;
pub mod metrics;
pub mod node;
pub mod render;
pub mod table;
pub mod width;

pub use builder::{BlockBuilder, ContentInput, TableBuilder, Tex};
pub use config::{DEFAULT_TERMINAL_WIDTH, TexOptions, resolve_terminal_width};
pub use error::{Result, TexError};
pub use geometry::Size;
pub use layout::{
    Axis, AxisValues, Border, BorderGlyph, BorderHookContext, Bounds, Corners, Dimension, Gap,
    GapInput, GapValue, Inset, Insets, LogicalEdge, Orientation, Percent, PhysicalEdge, Separator,
    Span,
};
pub use list::{Bullet, BulletAlign, BulletGraphic, List, ListItem};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::RenderMetrics;
pub use node::{Block, BlockParameters, Leaf, Node};
pub use render::{RenderContext, Rendered, Shape, SiblingIndex, Style};
pub use table::{Table, TableCell};
pub use width::{display_width, size};
