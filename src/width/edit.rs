//! ANSI-aware line edits.
//!
//! All helpers operate on a single line and keep every escape sequence in
//! place, so closing codes survive even when the printable text is cut.

use super::ansi::{Unit, units};
use super::utils::display_width;

/// Cut `line` down to at most `width` columns.
///
/// A wide glyph that straddles the limit is replaced by spaces so the result
/// still reaches exactly `width` columns when the input was wider.
pub fn truncate(line: &str, width: usize) -> String {
    if display_width(line) <= width {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len());
    let mut used = 0;
    let mut cut = false;

    for unit in units(line) {
        match unit {
            Unit::Escape(seq) => out.push_str(seq),
            Unit::Glyph(_, _) if cut => {}
            Unit::Glyph(glyph, glyph_width) => {
                if used + glyph_width > width {
                    cut = true;
                    out.push_str(&" ".repeat(width - used));
                    used = width;
                } else {
                    out.push_str(glyph);
                    used += glyph_width;
                }
            }
        }
    }

    out
}

/// Append spaces until `line` is `width` columns wide.
pub fn pad_to(line: &str, width: usize) -> String {
    let current = display_width(line);
    if current >= width {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + width - current);
    out.push_str(line);
    out.extend(std::iter::repeat_n(' ', width - current));
    out
}

/// Truncate or pad `line` to exactly `width` columns.
pub fn fit_to(line: &str, width: usize) -> String {
    pad_to(&truncate(line, width), width)
}

/// Repeat `pattern` until it fills `width` columns, cutting the last copy.
pub fn repeat_to_width(pattern: &str, width: usize) -> String {
    let unit_width = display_width(pattern);
    if unit_width == 0 || width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    while used + unit_width <= width {
        out.push_str(pattern);
        used += unit_width;
    }
    if used < width {
        out.push_str(&truncate(pattern, width - used));
    }
    out
}

/// Replace the single-column glyph at `column` with `glyph`.
///
/// Columns covered by a wide glyph, or past the end of the line, are left
/// untouched.
pub fn overlay_column(line: &str, column: usize, glyph: &str) -> String {
    let mut out = String::with_capacity(line.len() + glyph.len());
    let mut at = 0;

    for unit in units(line) {
        match unit {
            Unit::Escape(seq) => out.push_str(seq),
            Unit::Glyph(g, w) => {
                if at == column && w == 1 {
                    out.push_str(glyph);
                } else {
                    out.push_str(g);
                }
                at += w;
            }
        }
    }

    out
}
