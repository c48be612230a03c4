//! ANSI escape sequence scanning.
//!
//! Splits strings into escape sequences and printable text. Handles:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/SOS/PM/APC sequences: `ESC P`/`ESC X`/`ESC ^`/`ESC _` ... ST
//! - Intermediate sequences: `ESC` + bytes 0x20-0x2F + final byte, such as
//!   the charset select `ESC ( B`
//! - Two-character sequences: `ESC` + single char
//!
//! Malformed or unterminated sequences are consumed as zero-width escapes
//! instead of leaking into the printable text.

use unicode_segmentation::UnicodeSegmentation;

use super::utils::grapheme_width;

/// Full SGR reset appended when a line is cut while a style is active.
pub(crate) const RESET: &str = "\x1b[0m";

/// A slice of a string that is either an escape sequence or printable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Escape(&'a str),
    Text(&'a str),
}

/// Split `s` into escape and text fragments, in order.
pub fn fragments(s: &str) -> Vec<Fragment<'_>> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut out = Vec::new();
    let mut i = 0;

    while i < len {
        if bytes[i] == 0x1B {
            let end = skip_escape_sequence(bytes, i);
            out.push(Fragment::Escape(&s[i..end]));
            i = end;
        } else {
            // ESC is a single ASCII byte, so splitting on it never breaks UTF-8.
            let start = i;
            while i < len && bytes[i] != 0x1B {
                i += 1;
            }
            out.push(Fragment::Text(&s[start..i]));
        }
    }

    out
}

/// True for Select Graphic Rendition sequences (`ESC [ ... m`).
pub fn is_sgr(seq: &str) -> bool {
    seq.len() >= 3 && seq.starts_with("\x1b[") && seq.ends_with('m')
}

/// True for SGR sequences that return the terminal to its default colors.
pub fn is_reset(seq: &str) -> bool {
    matches!(seq, "\x1b[0m" | "\x1b[m" | "\x1b[39m" | "\x1b[49m")
}

fn is_full_reset(seq: &str) -> bool {
    matches!(seq, "\x1b[0m" | "\x1b[m")
}

/// Re-open `opening` after every reset sequence found in `line`.
///
/// Used to keep an inherited style alive past content that resets colors
/// on its own.
pub fn restore_after_resets(line: &str, opening: &str) -> String {
    if opening.is_empty() || !line.as_bytes().contains(&0x1B) {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + opening.len());
    for fragment in fragments(line) {
        match fragment {
            Fragment::Escape(seq) => {
                out.push_str(seq);
                if is_reset(seq) {
                    out.push_str(opening);
                }
            }
            Fragment::Text(text) => out.push_str(text),
        }
    }
    out
}

/// Smallest editable piece of a line: an escape or one grapheme with its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit<'a> {
    Escape(&'a str),
    Glyph(&'a str, usize),
}

pub(crate) fn units(line: &str) -> Vec<Unit<'_>> {
    let mut out = Vec::new();
    for fragment in fragments(line) {
        match fragment {
            Fragment::Escape(seq) => out.push(Unit::Escape(seq)),
            Fragment::Text(text) => {
                out.extend(
                    text.graphemes(true)
                        .map(|g| Unit::Glyph(g, grapheme_width(g))),
                );
            }
        }
    }
    out
}

/// Tracks which SGR sequences are in effect while walking a line.
#[derive(Debug, Default, Clone)]
pub(crate) struct SgrState {
    active: Vec<String>,
}

impl SgrState {
    pub(crate) fn observe(&mut self, seq: &str) {
        if !is_sgr(seq) {
            return;
        }
        if is_full_reset(seq) {
            self.active.clear();
        } else {
            self.active.push(seq.to_string());
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub(crate) fn reopen(&self) -> String {
        self.active.concat()
    }
}

/// Skip an escape sequence starting at `pos` (which points to ESC byte).
/// Returns the byte index after the complete sequence.
fn skip_escape_sequence(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' | b'P' | b'X' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        0x20..=0x2F => skip_intermediates(bytes, next),
        // A lone ESC before a multi-byte char: drop only the ESC.
        b if b >= 0x80 => next,
        _ => next + 1,
    }
}

/// CSI: parameter bytes (0x30-0x3F), intermediate bytes (0x20-0x2F),
/// final byte (0x40-0x7E).
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
        i += 1;
    }

    len
}

/// Intermediate bytes (0x20-0x2F), then one final byte (0x30-0x7E).
fn skip_intermediates(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len && (0x20..=0x2F).contains(&bytes[i]) {
        i += 1;
    }
    if i < len && (0x30..=0x7E).contains(&bytes[i]) {
        return i + 1;
    }

    i
}

fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        match bytes[i] {
            0x07 => return i + 1,
            0x1B if i + 1 < len && bytes[i + 1] == b'\\' => return i + 2,
            _ => i += 1,
        }
    }

    len
}
