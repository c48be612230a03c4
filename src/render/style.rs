use std::fmt;
use std::sync::Arc;

use crossterm::Command;
use crossterm::style::{
    Attribute, Color, ContentStyle, ResetColor, SetAttributes, SetBackgroundColor,
    SetForegroundColor,
};

use crate::width;

pub type StyleFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Marker used to discover the opening sequence of a custom transform.
const MARKER: &str = "\u{E000}";

/// Text transform applied to a finished block, one line at a time.
#[derive(Clone)]
pub struct Style {
    kind: StyleKind,
}

#[derive(Clone)]
enum StyleKind {
    Ansi(ContentStyle),
    Custom(StyleFn),
}

impl Style {
    /// Style with no effect, ready for `with_*` calls.
    pub fn new() -> Self {
        Self {
            kind: StyleKind::Ansi(ContentStyle::new()),
        }
    }

    pub fn fg(color: Color) -> Self {
        Self::new().with_foreground(color)
    }

    pub fn bg(color: Color) -> Self {
        Self::new().with_background(color)
    }

    /// Arbitrary transform. The `with_*` modifiers have no effect on it.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            kind: StyleKind::Custom(Arc::new(f)),
        }
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        if let StyleKind::Ansi(style) = &mut self.kind {
            style.foreground_color = Some(color);
        }
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        if let StyleKind::Ansi(style) = &mut self.kind {
            style.background_color = Some(color);
        }
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        if let StyleKind::Ansi(style) = &mut self.kind {
            style.attributes.set(attribute);
        }
        self
    }

    /// Apply the style to every line of `text`.
    pub fn apply(&self, text: &str) -> String {
        width::split_lines(text)
            .map(|line| self.apply_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn apply_line(&self, line: &str) -> String {
        match &self.kind {
            StyleKind::Ansi(style) => {
                let opening = ansi_opening(style);
                if opening.is_empty() {
                    return line.to_string();
                }
                let mut out = opening;
                out.push_str(line);
                out.push_str(&ansi_closing(style));
                out
            }
            StyleKind::Custom(transform) => transform(line),
        }
    }

    /// Sequence that switches the style on; re-emitted to restore it.
    pub fn opening(&self) -> String {
        match &self.kind {
            StyleKind::Ansi(style) => ansi_opening(style),
            StyleKind::Custom(transform) => transform(MARKER)
                .split_once(MARKER)
                .map(|(opening, _)| opening.to_string())
                .unwrap_or_default(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StyleKind::Ansi(style) => f.debug_tuple("Style").field(style).finish(),
            StyleKind::Custom(_) => f.write_str("Style(custom)"),
        }
    }
}

fn ansi_opening(style: &ContentStyle) -> String {
    let mut out = String::new();
    if let Some(bg) = style.background_color {
        let _ = SetBackgroundColor(bg).write_ansi(&mut out);
    }
    if let Some(fg) = style.foreground_color {
        let _ = SetForegroundColor(fg).write_ansi(&mut out);
    }
    if !style.attributes.is_empty() {
        let _ = SetAttributes(style.attributes).write_ansi(&mut out);
    }
    out
}

fn ansi_closing(style: &ContentStyle) -> String {
    let mut out = String::new();
    if !style.attributes.is_empty() {
        let _ = ResetColor.write_ansi(&mut out);
        return out;
    }
    if style.background_color.is_some() {
        let _ = SetBackgroundColor(Color::Reset).write_ansi(&mut out);
    }
    if style.foreground_color.is_some() {
        let _ = SetForegroundColor(Color::Reset).write_ansi(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_style_is_identity() {
        assert_eq!(Style::new().apply("abc"), "abc");
        assert_eq!(Style::new().opening(), "");
    }

    #[test]
    fn foreground_wraps_each_line() {
        let style = Style::fg(Color::Blue);
        let opening = style.opening();
        assert!(opening.starts_with("\x1b["));
        assert_eq!(
            style.apply("a\nb"),
            format!("{opening}a\x1b[39m\n{opening}b\x1b[39m")
        );
    }

    #[test]
    fn attributes_close_with_full_reset() {
        let style = Style::new().with_attribute(Attribute::Bold);
        assert!(style.apply("x").ends_with("\x1b[0m"));
    }

    #[test]
    fn custom_opening_is_read_from_marker() {
        let style = Style::custom(|s| format!("<b>{s}</b>"));
        assert_eq!(style.apply("x"), "<b>x</b>");
        assert_eq!(style.opening(), "<b>");
    }

    #[test]
    fn styling_keeps_visual_width() {
        let style = Style::fg(Color::Red).with_background(Color::Black);
        assert_eq!(width::display_width(&style.apply("hello")), 5);
    }
}
