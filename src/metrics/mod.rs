use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters describing one render pass, aggregated bottom-up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderMetrics {
    pub nodes: u64,
    pub leaves: u64,
    pub blocks: u64,
    pub tables: u64,
    pub lists: u64,
    pub rewraps: u64,
    pub depth: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_leaf(&mut self) {
        self.nodes = self.nodes.saturating_add(1);
        self.leaves = self.leaves.saturating_add(1);
    }

    pub fn record_block(&mut self) {
        self.nodes = self.nodes.saturating_add(1);
        self.blocks = self.blocks.saturating_add(1);
    }

    pub fn record_table(&mut self) {
        self.tables = self.tables.saturating_add(1);
    }

    pub fn record_list(&mut self) {
        self.lists = self.lists.saturating_add(1);
    }

    pub fn record_rewraps(&mut self, count: usize) {
        if count > 0 {
            self.rewraps = self.rewraps.saturating_add(count as u64);
        }
    }

    /// Fold a child's counters into this one, one level deeper.
    pub fn absorb(&mut self, child: &RenderMetrics) {
        self.nodes = self.nodes.saturating_add(child.nodes);
        self.leaves = self.leaves.saturating_add(child.leaves);
        self.blocks = self.blocks.saturating_add(child.blocks);
        self.tables = self.tables.saturating_add(child.tables);
        self.lists = self.lists.saturating_add(child.lists);
        self.rewraps = self.rewraps.saturating_add(child.rewraps);
        self.depth = self.depth.max(child.depth.saturating_add(1));
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("nodes".to_string(), json!(self.nodes));
        map.insert("leaves".to_string(), json!(self.leaves));
        map.insert("blocks".to_string(), json!(self.blocks));
        map.insert("tables".to_string(), json!(self.tables));
        map.insert("lists".to_string(), json!(self.lists));
        map.insert("rewraps".to_string(), json!(self.rewraps));
        map.insert("depth".to_string(), json!(self.depth));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Debug, target, "render_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_sums_counts_and_tracks_depth() {
        let mut leaf = RenderMetrics::new();
        leaf.record_leaf();

        let mut inner = RenderMetrics::new();
        inner.record_block();
        inner.absorb(&leaf);

        let mut root = RenderMetrics::new();
        root.record_block();
        root.absorb(&inner);
        root.absorb(&leaf);

        assert_eq!(root.nodes, 4);
        assert_eq!(root.leaves, 2);
        assert_eq!(root.blocks, 2);
        assert_eq!(root.depth, 2);
    }

    #[test]
    fn fields_mirror_counters() {
        let mut metrics = RenderMetrics::new();
        metrics.record_rewraps(3);
        let event = metrics.to_log_event("tex::render");
        assert_eq!(event.fields["rewraps"], json!(3));
        assert_eq!(event.message, "render_metrics");
    }
}
