use serde_json::Value;

use super::content::ContentInput;
use crate::config::TexOptions;
use crate::error::Result;
use crate::list::{List, ListItem};
use crate::logging::{LogLevel, json_kv};
use crate::node::{Block, BlockParameters, Node};
use crate::render::{RenderContext, Rendered};
use crate::table::{Table, TableCell};

const RENDER_TARGET: &str = "tex::render";

/// Collects the children of one block.
#[derive(Debug, Clone, Default)]
pub struct BlockBuilder {
    block: Block,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: BlockParameters) -> Self {
        Self {
            block: Block::new(parameters, Vec::new()),
        }
    }

    pub fn parameters(&self) -> &BlockParameters {
        self.block.parameters()
    }

    /// Replace this block's parameters.
    pub fn set(mut self, parameters: BlockParameters) -> Self {
        *self.block.parameters_mut() = parameters;
        self
    }

    /// Add a child block with default parameters.
    pub fn block<'a>(self, content: impl Into<ContentInput<'a>>) -> Self {
        self.block_with(BlockParameters::new(), content)
    }

    pub fn block_with<'a>(
        mut self,
        parameters: BlockParameters,
        content: impl Into<ContentInput<'a>>,
    ) -> Self {
        if let Some(node) = content.into().into_block(parameters) {
            self.block.push(node);
        }
        self
    }

    /// Add a child block built by `f`; `None` adds nothing.
    pub fn block_fn<'a, F>(self, f: F) -> Self
    where
        F: FnOnce(BlockBuilder) -> Option<BlockBuilder> + 'a,
    {
        self.block(ContentInput::build(f))
    }

    pub fn table<F>(mut self, f: F) -> Self
    where
        F: FnOnce(TableBuilder) -> TableBuilder,
    {
        self.block.push(f(TableBuilder::new()).build().into());
        self
    }

    pub fn list<I, T>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        self.list_with(BlockParameters::new(), items)
    }

    pub fn list_with<I, T>(mut self, parameters: BlockParameters, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        self.block
            .push(List::new(items).with_parameters(parameters).into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.block.push(Node::text(text));
        self
    }

    pub fn node(mut self, node: impl Into<Node>) -> Self {
        self.block.push(node.into());
        self
    }

    pub fn build(self) -> Block {
        self.block
    }

    pub fn into_node(self) -> Node {
        Node::Block(self.block)
    }
}

/// Collects headers and rows of one table.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, parameters: BlockParameters) -> Self {
        *self.table.parameters_mut() = parameters;
        self
    }

    pub fn headers<I, T>(self, headers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        Self {
            table: self.table.with_headers(headers),
        }
    }

    pub fn header(self, header: impl Into<Node>) -> Self {
        Self {
            table: self.table.with_header(header),
        }
    }

    pub fn row<I, T>(self, row: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TableCell>,
    {
        Self {
            table: self.table.with_row(row),
        }
    }

    pub fn rows<R, I, T>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Into<TableCell>,
    {
        rows.into_iter().fold(self, |builder, row| builder.row(row))
    }

    pub fn build(self) -> Table {
        self.table
    }
}

/// Root of a layout tree, rendered against the terminal width.
#[derive(Debug, Clone, Default)]
pub struct Tex {
    options: TexOptions,
    root: BlockBuilder,
}

impl Tex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TexOptions) -> Self {
        let parameters = BlockParameters::new()
            .with_orientation(options.orientation)
            .with_span_range(options.span_range.clone());
        Self {
            options,
            root: BlockBuilder::with_parameters(parameters),
        }
    }

    pub fn options(&self) -> &TexOptions {
        &self.options
    }

    pub fn block<'a>(self, content: impl Into<ContentInput<'a>>) -> Self {
        self.map_root(|root| root.block(content))
    }

    pub fn block_with<'a>(
        self,
        parameters: BlockParameters,
        content: impl Into<ContentInput<'a>>,
    ) -> Self {
        self.map_root(|root| root.block_with(parameters, content))
    }

    pub fn block_fn<'a, F>(self, f: F) -> Self
    where
        F: FnOnce(BlockBuilder) -> Option<BlockBuilder> + 'a,
    {
        self.map_root(|root| root.block_fn(f))
    }

    pub fn table<F>(self, f: F) -> Self
    where
        F: FnOnce(TableBuilder) -> TableBuilder,
    {
        self.map_root(|root| root.table(f))
    }

    pub fn list<I, T>(self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        self.map_root(|root| root.list(items))
    }

    pub fn list_with<I, T>(self, parameters: BlockParameters, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        self.map_root(|root| root.list_with(parameters, items))
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.map_root(|root| root.text(text))
    }

    pub fn node(self, node: impl Into<Node>) -> Self {
        self.map_root(|root| root.node(node))
    }

    fn map_root(self, f: impl FnOnce(BlockBuilder) -> BlockBuilder) -> Self {
        Self {
            options: self.options,
            root: f(self.root),
        }
    }

    pub fn into_node(self) -> Node {
        self.root.into_node()
    }

    /// Render to a newline-delimited string no wider than the terminal.
    pub fn render(&self) -> Result<String> {
        Ok(self.render_tree()?.value())
    }

    /// Render and keep the shape and metrics alongside the text.
    pub fn render_tree(&self) -> Result<Rendered> {
        let width = self.options.effective_terminal_width();
        let mut context = RenderContext::new().with_max_width(width);
        if let Some(logger) = &self.options.logger {
            context = context.with_logger(logger.clone());
        }

        context.log(
            LogLevel::Debug,
            RENDER_TARGET,
            "render.start",
            [json_kv("terminal_width", width)],
        );

        let mut rendered = self.root.block.render(&context)?;
        rendered.clamp_width(width);

        let mut fields: Vec<(String, Value)> =
            rendered.metrics().as_fields().into_iter().collect();
        fields.push(json_kv("lines", rendered.height()));
        fields.push(json_kv("width", rendered.shape().intrinsic_width));
        context.log(LogLevel::Info, RENDER_TARGET, "render.complete", fields);

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Border, Gap, Insets, Orientation};
    use crate::logging::{Logger, MemorySink};
    use crate::width::display_width;

    fn tex(width: usize) -> Tex {
        Tex::with_options(TexOptions::new().with_terminal_width(width))
    }

    #[test]
    fn empty_block_renders_empty_string() {
        assert_eq!(tex(80).block("").render().unwrap(), "");
        assert!(matches!(tex(80).block("").into_node(), Node::Block(_)));
    }

    #[test]
    fn set_is_equivalent_to_parameters() {
        let padding = BlockParameters::new().with_padding(Insets::new().with_main_start(2usize));
        let via_set = tex(80)
            .block_fn(|child| Some(child.set(padding.clone()).block("foo")))
            .render()
            .unwrap();
        let via_params = tex(80).block_with(padding.clone(), "foo").render().unwrap();
        assert_eq!(via_set, via_params);
        assert_eq!(via_params, "\n\nfoo");
    }

    #[test]
    fn null_callback_omits_the_node() {
        let gapped = || {
            BlockBuilder::with_parameters(
                BlockParameters::new().with_gap(Gap::resolve(1usize).unwrap()),
            )
        };
        let omitted = gapped().block_fn(|_| None).text("a").build();
        let empty = gapped().block("").text("a").build();
        assert_eq!(omitted.children().len(), 1);
        assert_eq!(empty.children().len(), 2);

        let render = |block: Block| tex(80).node(block).render().unwrap();
        assert_eq!(render(omitted), "a");
        assert_eq!(render(empty), "\na");
    }

    #[test]
    fn chained_content_stacks() {
        let output = tex(80)
            .text("title")
            .list(["one", "two"])
            .table(|t| t.headers(["k", "v"]).row(["a", "1"]))
            .render()
            .unwrap();
        assert_eq!(output, "title\n1. one\n2. two\nk v\na 1");
    }

    #[test]
    fn root_orientation_comes_from_options() {
        let output = Tex::with_options(
            TexOptions::new()
                .with_terminal_width(80)
                .with_orientation(Orientation::Horizontal),
        )
        .text("a")
        .text("b")
        .render()
        .unwrap();
        assert_eq!(output, "ab");
    }

    #[test]
    fn output_never_exceeds_terminal_width() {
        let deep = (0..6).fold(
            BlockBuilder::new().text("the quick brown fox jumps over the lazy dog"),
            |inner, _| {
                BlockBuilder::with_parameters(
                    BlockParameters::new()
                        .with_padding(Insets::all(1))
                        .with_margin(Insets::axes(0, 2))
                        .with_border(Border::rounded()),
                )
                .node(inner.build())
            },
        );
        let output = tex(24).node(deep.build()).render().unwrap();
        for line in output.lines() {
            assert!(display_width(line) <= 24, "{line:?}");
        }
    }

    #[test]
    fn render_logs_start_and_completion() {
        let sink = MemorySink::new();
        let options = TexOptions::new()
            .with_terminal_width(40)
            .with_logger(Logger::new(sink.clone()));
        Tex::with_options(options).text("x").render().unwrap();
        let events = sink.events();
        assert_eq!(
            sink.messages(),
            vec!["render.start".to_string(), "render.complete".to_string()]
        );
        assert_eq!(events[0].fields["terminal_width"], 40);
        assert_eq!(events[1].fields["leaves"], 1);
    }

    #[test]
    fn render_tree_exposes_metrics() {
        let rendered = tex(80).list(["a", "b"]).render_tree().unwrap();
        assert_eq!(rendered.metrics().lists, 1);
        assert_eq!(rendered.shape().intrinsic_height, 2);
    }
}
