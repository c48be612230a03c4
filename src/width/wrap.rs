//! Word wrapping for a single line of possibly colored text.
//!
//! Breaks at whitespace, falling back to grapheme breaks for words wider than
//! the line. Leading whitespace on continuation lines is dropped. An SGR
//! style that is active at a break is closed at the end of the line and
//! re-opened at the start of the next one, so every produced line can be
//! composed next to other content without leaking color.

use super::ansi::{RESET, SgrState, Unit, units};
use super::utils::display_width;

/// Wrap `line` to at most `max_width` columns. A width of zero behaves like one.
pub fn wrap(line: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    if display_width(line) <= max_width {
        return vec![line.to_string()];
    }

    let mut builder = LineBuilder::new(max_width);
    for token in tokenize(units(line)) {
        if token.blank {
            builder.space(token);
        } else {
            builder.word(token);
        }
    }
    emit(builder.finish())
}

struct Token<'a> {
    units: Vec<Unit<'a>>,
    width: usize,
    blank: bool,
}

fn tokenize(units: Vec<Unit<'_>>) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();

    for unit in units {
        match unit {
            Unit::Escape(_) => match tokens.last_mut() {
                Some(token) => token.units.push(unit),
                None => tokens.push(Token {
                    units: vec![unit],
                    width: 0,
                    blank: false,
                }),
            },
            Unit::Glyph(glyph, width) => {
                let blank = glyph.chars().all(char::is_whitespace);
                match tokens.last_mut() {
                    Some(token) if token.blank == blank || token.width == 0 => {
                        token.blank = blank;
                        token.units.push(unit);
                        token.width += width;
                    }
                    _ => tokens.push(Token {
                        units: vec![unit],
                        width,
                        blank,
                    }),
                }
            }
        }
    }

    tokens
}

struct LineBuilder<'a> {
    max: usize,
    lines: Vec<Vec<Unit<'a>>>,
    current: Vec<Unit<'a>>,
    width: usize,
    pending: Vec<Unit<'a>>,
    pending_width: usize,
}

impl<'a> LineBuilder<'a> {
    fn new(max: usize) -> Self {
        Self {
            max,
            lines: Vec::new(),
            current: Vec::new(),
            width: 0,
            pending: Vec::new(),
            pending_width: 0,
        }
    }

    fn space(&mut self, token: Token<'a>) {
        if self.width == 0 && !self.lines.is_empty() {
            self.keep_escapes(token.units);
            return;
        }
        self.pending.extend(token.units);
        self.pending_width += token.width;
    }

    fn word(&mut self, token: Token<'a>) {
        if self.width + self.pending_width + token.width <= self.max {
            self.flush_pending();
            self.push(token);
            return;
        }

        if self.width > 0 {
            self.break_line();
        } else if self.pending_width > 0 {
            // Indentation before the first word survives only if a glyph still fits after it.
            if self.pending_width < self.max {
                self.flush_pending();
            } else {
                self.drop_pending();
            }
        }

        if self.width + token.width <= self.max {
            self.push(token);
        } else {
            self.hard_break(token);
        }
    }

    fn push(&mut self, token: Token<'a>) {
        self.current.extend(token.units);
        self.width += token.width;
    }

    fn flush_pending(&mut self) {
        self.current.append(&mut self.pending);
        self.width += self.pending_width;
        self.pending_width = 0;
    }

    fn drop_pending(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        self.keep_escapes(pending);
        self.pending_width = 0;
    }

    fn keep_escapes(&mut self, units: Vec<Unit<'a>>) {
        self.current
            .extend(units.into_iter().filter(|u| matches!(u, Unit::Escape(_))));
    }

    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.width = 0;
        self.drop_pending();
    }

    fn hard_break(&mut self, token: Token<'a>) {
        for unit in token.units {
            if let Unit::Glyph(_, glyph_width) = unit {
                if self.width + glyph_width > self.max && self.width > 0 {
                    self.lines.push(std::mem::take(&mut self.current));
                    self.width = 0;
                }
                // A glyph wider than the whole line becomes blank cells.
                if glyph_width > self.max {
                    self.current
                        .extend(std::iter::repeat_n(Unit::Glyph(" ", 1), self.max));
                    self.width += self.max;
                    continue;
                }
                self.width += glyph_width;
            }
            self.current.push(unit);
        }
    }

    fn finish(mut self) -> Vec<Vec<Unit<'a>>> {
        self.drop_pending();
        self.lines.push(self.current);
        self.lines
    }
}

fn emit(lines: Vec<Vec<Unit<'_>>>) -> Vec<String> {
    let mut state = SgrState::default();
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        let mut text = state.reopen();
        for unit in line {
            match unit {
                Unit::Escape(seq) => {
                    state.observe(seq);
                    text.push_str(seq);
                }
                Unit::Glyph(glyph, _) => text.push_str(glyph),
            }
        }
        if state.is_active() {
            text.push_str(RESET);
        }
        out.push(text);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitting_line_is_untouched() {
        assert_eq!(wrap("  hello ", 10), vec!["  hello "]);
    }

    #[test]
    fn breaks_at_words() {
        assert_eq!(wrap("hello world", 5), vec!["hello", "world"]);
        assert_eq!(wrap("a bb ccc dddd", 6), vec!["a bb", "ccc", "dddd"]);
    }

    #[test]
    fn long_words_break_by_grapheme() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("ab 你好你", 4), vec!["ab", "你好", "你"]);
    }

    #[test]
    fn leading_indent_is_kept_on_first_line_only() {
        assert_eq!(wrap("  aa bb", 5), vec!["  aa", "bb"]);
    }

    #[test]
    fn color_is_carried_across_breaks() {
        let lines = wrap("\x1b[31mhello world\x1b[0m", 5);
        assert_eq!(
            lines,
            vec!["\x1b[31mhello\x1b[0m", "\x1b[31mworld\x1b[0m"]
        );
    }

    #[test]
    fn every_line_fits() {
        let text = "the quick brown fox jumps over the lazy dog";
        for width in 1..12 {
            for line in wrap(text, width) {
                assert!(display_width(&line) <= width, "{line:?} > {width}");
            }
        }
    }

    #[test]
    fn glyph_wider_than_line_becomes_blank() {
        assert_eq!(wrap("你好", 1), vec![" ", " "]);
        assert_eq!(wrap("a你", 1), vec!["a", " "]);
    }

    #[test]
    fn charset_escapes_take_no_columns() {
        assert_eq!(wrap("\x1b(Babcd", 3), vec!["\x1b(Babc", "d"]);
    }

    #[test]
    fn zero_width_behaves_like_one() {
        assert_eq!(wrap("ab", 0), vec!["a", "b"]);
    }
}
