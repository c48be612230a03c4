//! Gap resolution: heterogeneous gap input normalized into separators.
//!
//! A gap may be given as a count, a literal string, or a per-axis object with
//! an optional intersection glyph. Resolution validates the input once, at
//! construction time, and produces a [`Gap`] whose separators know how to
//! materialize themselves between stacked or side-by-side children.

use std::num::NonZeroUsize;

use crate::error::{Result, TexError};
use crate::width::{self, display_width, repeat_to_width};

/// Unvalidated separator for one axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GapValue {
    /// Blank lines (vertical) or spaces (horizontal).
    Count(usize),
    /// A literal separator string.
    Literal(String),
}

impl From<usize> for GapValue {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

impl From<&str> for GapValue {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for GapValue {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

/// Gap input as callers write it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GapInput {
    /// Separator on the main axis only.
    Value(GapValue),
    /// Per-axis separators plus an optional glyph drawn where they cross.
    Axes {
        main: Option<GapValue>,
        cross: Option<GapValue>,
        intersection: Option<String>,
    },
}

impl GapInput {
    pub fn axes() -> Self {
        Self::Axes {
            main: None,
            cross: None,
            intersection: None,
        }
    }

    pub fn with_main(self, value: impl Into<GapValue>) -> Self {
        match self {
            Self::Value(_) => Self::Axes {
                main: Some(value.into()),
                cross: None,
                intersection: None,
            },
            Self::Axes {
                cross,
                intersection,
                ..
            } => Self::Axes {
                main: Some(value.into()),
                cross,
                intersection,
            },
        }
    }

    pub fn with_cross(self, value: impl Into<GapValue>) -> Self {
        match self {
            Self::Value(main) => Self::Axes {
                main: Some(main),
                cross: Some(value.into()),
                intersection: None,
            },
            Self::Axes {
                main, intersection, ..
            } => Self::Axes {
                main,
                cross: Some(value.into()),
                intersection,
            },
        }
    }

    pub fn with_intersection(self, glyph: impl Into<String>) -> Self {
        let glyph = Some(glyph.into());
        match self {
            Self::Value(main) => Self::Axes {
                main: Some(main),
                cross: None,
                intersection: glyph,
            },
            Self::Axes { main, cross, .. } => Self::Axes {
                main,
                cross,
                intersection: glyph,
            },
        }
    }
}

impl From<usize> for GapInput {
    fn from(count: usize) -> Self {
        Self::Value(GapValue::Count(count))
    }
}

impl From<&str> for GapInput {
    fn from(text: &str) -> Self {
        Self::Value(GapValue::from(text))
    }
}

impl From<String> for GapInput {
    fn from(text: String) -> Self {
        Self::Value(GapValue::Literal(text))
    }
}

/// A validated separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Separator {
    Blank(NonZeroUsize),
    Literal(String),
}

impl Separator {
    fn resolve(value: GapValue) -> Result<Self> {
        match value {
            GapValue::Count(count) => NonZeroUsize::new(count)
                .map(Self::Blank)
                .ok_or(TexError::InvalidGapCount(count)),
            GapValue::Literal(text) if text.is_empty() => Err(TexError::EmptyGap),
            GapValue::Literal(text) => Ok(Self::Literal(text)),
        }
    }

    /// Columns taken when placed between side-by-side children.
    pub fn columns(&self) -> usize {
        match self {
            Self::Blank(count) => count.get(),
            Self::Literal(text) => width::size(text).width,
        }
    }

    /// Lines inserted between stacked children that are `width` columns wide.
    ///
    /// A single-line literal becomes a rule repeated across the width; a
    /// multi-line literal is inserted verbatim.
    pub fn rows(&self, width: usize) -> Vec<String> {
        match self {
            Self::Blank(count) => vec![String::new(); count.get()],
            Self::Literal(text) if !text.contains('\n') && width > 0 => {
                vec![repeat_to_width(text, width)]
            }
            Self::Literal(text) => width::split_lines(text).map(str::to_string).collect(),
        }
    }

    /// One cell per line for a separator between side-by-side children.
    pub fn column(&self, height: usize) -> Vec<String> {
        match self {
            Self::Blank(count) => vec![" ".repeat(count.get()); height],
            Self::Literal(text) => {
                let lines: Vec<&str> = width::split_lines(text).collect();
                let columns = self.columns();
                (0..height)
                    .map(|row| width::pad_to(lines[row % lines.len()], columns))
                    .collect()
            }
        }
    }

    /// Offsets, within the separator, where a row rule should show an intersection.
    pub fn crossings(&self) -> Vec<usize> {
        let columns = self.columns();
        let marked = match self {
            Self::Blank(_) => Vec::new(),
            Self::Literal(text) => {
                let first = width::split_lines(text).next().unwrap_or_default();
                let mut at = 0;
                let mut marked = Vec::new();
                for unit in width::units(first) {
                    if let width::Unit::Glyph(glyph, glyph_width) = unit {
                        if !glyph.chars().all(char::is_whitespace) {
                            marked.push(at);
                        }
                        at += glyph_width;
                    }
                }
                marked
            }
        };

        if marked.is_empty() && columns > 0 {
            vec![columns / 2]
        } else {
            marked
        }
    }
}

/// Resolved gap configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Gap {
    pub main: Option<Separator>,
    pub cross: Option<Separator>,
    pub intersection: Option<String>,
}

impl Gap {
    /// Validate and normalize `input`.
    pub fn resolve(input: impl Into<GapInput>) -> Result<Self> {
        match input.into() {
            GapInput::Value(value) => Ok(Self {
                main: Some(Separator::resolve(value)?),
                ..Self::default()
            }),
            GapInput::Axes {
                main,
                cross,
                intersection,
            } => {
                if let Some(glyph) = &intersection {
                    if display_width(glyph) != 1 || glyph.contains('\n') {
                        return Err(TexError::InvalidIntersection(glyph.clone()));
                    }
                }
                Ok(Self {
                    main: main.map(Separator::resolve).transpose()?,
                    cross: cross.map(Separator::resolve).transpose()?,
                    intersection,
                })
            }
        }
    }

    /// Gap with only a main-axis separator.
    pub fn main_only(separator: Separator) -> Self {
        Self {
            main: Some(separator),
            ..Self::default()
        }
    }

    /// Glyph to overlay on main-axis rules, when both separators exist.
    pub fn crossing_glyph(&self) -> Option<&str> {
        match (&self.main, &self.cross) {
            (Some(_), Some(_)) => self.intersection.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_resolves_to_blank_main() {
        let gap = Gap::resolve(2usize).unwrap();
        assert_eq!(gap.main.as_ref().map(Separator::columns), Some(2));
        assert!(gap.cross.is_none());
    }

    #[test]
    fn zero_count_fails_fast() {
        assert_eq!(Gap::resolve(0usize), Err(TexError::InvalidGapCount(0)));
        assert_eq!(
            Gap::resolve(GapInput::axes().with_cross(0usize)),
            Err(TexError::InvalidGapCount(0))
        );
    }

    #[test]
    fn empty_literal_fails_fast() {
        assert_eq!(Gap::resolve(""), Err(TexError::EmptyGap));
    }

    #[test]
    fn intersection_must_be_one_column() {
        let input = GapInput::axes().with_main("-").with_cross(" | ");
        assert!(Gap::resolve(input.clone().with_intersection("+")).is_ok());
        assert_eq!(
            Gap::resolve(input.with_intersection("++")),
            Err(TexError::InvalidIntersection("++".into()))
        );
    }

    #[test]
    fn literal_row_becomes_rule() {
        let sep = Separator::Literal("-".into());
        assert_eq!(sep.rows(4), vec!["----"]);
        let multi = Separator::Literal("a\nb".into());
        assert_eq!(multi.rows(4), vec!["a", "b"]);
    }

    #[test]
    fn column_cells_repeat_per_line() {
        let sep = Separator::Literal(" | ".into());
        assert_eq!(sep.column(2), vec![" | ", " | "]);
        let blank = Separator::Blank(NonZeroUsize::new(2).unwrap());
        assert_eq!(blank.column(1), vec!["  "]);
    }

    #[test]
    fn crossings_mark_visible_glyphs() {
        assert_eq!(Separator::Literal(" | ".into()).crossings(), vec![1]);
        assert_eq!(Separator::Blank(NonZeroUsize::new(3).unwrap()).crossings(), vec![1]);
    }

    #[test]
    fn crossing_glyph_needs_both_axes() {
        let gap = Gap::resolve(GapInput::from("-").with_intersection("+")).unwrap();
        assert_eq!(gap.crossing_glyph(), None);
        let gap = Gap::resolve(
            GapInput::axes()
                .with_main("-")
                .with_cross(" | ")
                .with_intersection("+"),
        )
        .unwrap();
        assert_eq!(gap.crossing_glyph(), Some("+"));
    }
}
