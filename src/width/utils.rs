use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::geometry::Size;

/// Compute the display width of a single line after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    if text.is_ascii() && !text.as_bytes().contains(&0x1B) {
        return text.bytes().filter(|b| (0x20..0x7F).contains(b)).count();
    }

    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    clean_str.graphemes(true).map(grapheme_width).sum()
}

/// Display width of one grapheme cluster.
///
/// Emoji sequences (ZWJ joins, VS16 presentation, skin tones, keycaps) and
/// regional-indicator flags are two cells; a base plus combining marks takes
/// the width of the base.
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if grapheme.len() == first.len_utf8() {
        return first.width().unwrap_or(0);
    }

    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    for c in chars {
        match c as u32 {
            0x200D | 0xFE0F | 0x20E3 | 0x1F3FB..=0x1F3FF => return 2,
            _ => {}
        }
    }

    first.width().unwrap_or(0)
}

/// Split text on line breaks, tolerating `\r\n`.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Visual size of a possibly multi-line, possibly colored string.
///
/// The empty string measures `0x0`; any other string is at least one line.
pub fn size(text: &str) -> Size {
    if text.is_empty() {
        return Size::zero();
    }

    let mut width = 0;
    let mut height = 0;
    for line in split_lines(text) {
        width = width.max(display_width(line));
        height += 1;
    }
    Size::new(width, height)
}
