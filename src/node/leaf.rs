use crate::error::Result;
use crate::metrics::RenderMetrics;
use crate::render::{Composition, RenderContext, Rendered, Style};
use crate::width::{display_width, restore_after_resets, split_lines, wrap};

/// Raw text, possibly colored and possibly multi-line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Leaf {
    text: String,
}

impl Leaf {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Wrap the text to the context width. The empty string renders no lines.
    pub fn render(&self, context: &RenderContext) -> Result<Rendered> {
        let mut lines = Vec::new();
        let mut desired_width = 0;

        if !self.text.is_empty() {
            for raw in split_lines(&self.text) {
                let raw_width = display_width(raw);
                desired_width = desired_width.max(raw_width);
                match context.max_width {
                    Some(max) if raw_width > max => lines.extend(wrap(raw, max)),
                    _ => lines.push(raw.to_string()),
                }
            }
        }

        let opening = context.style.as_ref().map(Style::opening).unwrap_or_default();
        if !opening.is_empty() {
            for line in &mut lines {
                *line = restore_after_resets(line, &opening);
            }
        }

        let composition = Composition::from_lines(lines);
        let measured = composition.measure();
        let mut metrics = RenderMetrics::new();
        metrics.record_leaf();
        Ok(Rendered::new(composition, measured, desired_width, metrics))
    }
}
