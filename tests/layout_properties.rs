use crossterm::style::Color;
use tex_box::{
    AxisValues, BlockBuilder, BlockParameters, Border, Bounds, Gap, GapInput, Inset, Insets, List,
    Orientation, RenderContext, Style, Tex, TexOptions, display_width,
};

fn tex(width: usize) -> Tex {
    Tex::with_options(TexOptions::new().with_terminal_width(width))
}

#[test]
fn empty_block_is_an_empty_string() {
    assert_eq!(tex(80).block("").render().unwrap(), "");
}

#[test]
fn null_list_items_are_dropped() {
    let with_nulls = tex(80).list([Some("foo"), None, Some("bar")]).render().unwrap();
    let without = tex(80).list(["foo", "bar"]).render().unwrap();
    assert_eq!(with_nulls, without);
}

#[test]
fn nested_boxes_stay_within_terminal_width() {
    for width in [1, 7, 16, 40] {
        let tree = (0..4).fold(
            BlockBuilder::new()
                .text("every line of this paragraph must fit inside the terminal")
                .list(["first item with words", "second"]),
            |inner, depth| {
                BlockBuilder::with_parameters(
                    BlockParameters::new()
                        .with_padding(Insets::axes(depth, 1))
                        .with_margin(
                            Insets::new().with_cross_start(Inset::literal("> ").unwrap()),
                        )
                        .with_border(Border::single()),
                )
                .node(inner.build())
            },
        );
        let output = tex(width).node(tree.build()).render().unwrap();
        for line in output.lines() {
            assert!(display_width(line) <= width, "{width}: {line:?}");
        }
    }
}

#[test]
fn empty_table_cells_keep_alignment() {
    let output = tex(80)
        .table(|t| {
            t.rows([["a", "b", "c"], ["x", "", "z"], ["1", "2", "3"]])
        })
        .render()
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines, ["a b c", "x   z", "1 2 3"]);
}

#[test]
fn builder_callback_matches_parameters() {
    let params = BlockParameters::new().with_padding(Insets::new().with_main_start(2usize));
    let via_callback = tex(80)
        .block_fn(|b| Some(b.set(params.clone()).block("foo")))
        .render()
        .unwrap();
    let via_params = tex(80).block_with(params.clone(), "foo").render().unwrap();
    assert_eq!(via_callback, via_params);
}

#[test]
fn sibling_text_keeps_parent_color() {
    let blue = Style::fg(Color::Blue);
    let red = Style::fg(Color::Red);
    let output = tex(80)
        .block_fn(|b| {
            Some(
                b.set(BlockParameters::new().with_style(blue.clone()))
                    .block_with(BlockParameters::new().with_style(red.clone()), "red")
                    .text("tail"),
            )
        })
        .render()
        .unwrap();
    let tail = output.lines().last().unwrap();
    assert!(tail.starts_with(&blue.opening()), "{tail:?}");
    assert!(!tail.contains(&red.opening()));
}

#[test]
fn table_rule_shows_intersections() {
    let gap = Gap::resolve(
        GapInput::axes()
            .with_main("-")
            .with_cross(" | ")
            .with_intersection("+"),
    )
    .unwrap();
    let output = tex(80)
        .table(|t| {
            t.set(BlockParameters::new().with_gap(gap))
                .headers(["name", "type"])
                .row(["id", "int"])
        })
        .render()
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, ["name | type", "-----+-----", "id   | int"]);
}

#[test]
fn list_content_wraps_under_its_column() {
    let output = tex(12)
        .node(List::new(["wrapped list content"]))
        .render()
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, ["1. wrapped", "   list", "   content"]);
}

#[test]
fn rendering_twice_is_deterministic() {
    let tree = tex(30).table(|t| t.headers(["a", "b"]).row(["long cell text here", "x"]));
    assert_eq!(tree.render().unwrap(), tree.render().unwrap());
}

#[test]
fn different_context_gives_different_output() {
    let node = BlockBuilder::new()
        .text("a paragraph long enough to wrap")
        .into_node();
    let render = |width: usize| {
        node.render(&RenderContext::new().with_max_width(width))
            .unwrap()
            .value()
    };
    assert_eq!(render(40), render(40));
    assert_ne!(render(40), render(10));
}

#[test]
fn horizontal_cross_max_wraps_children() {
    let params = BlockParameters::new()
        .with_orientation(Orientation::Horizontal)
        .with_gap(Gap::resolve(1usize).unwrap())
        .with_span_range(AxisValues::cross(Bounds::at_most(9)));
    let output = tex(80)
        .block_fn(|b| Some(b.set(params.clone()).text("left side").text("x")))
        .render()
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, ["left x", "side "]);
}

#[test]
fn wide_glyphs_never_push_out_the_border() {
    let output = tex(3)
        .block_with(BlockParameters::new().with_border(Border::ascii()), "你好")
        .render()
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, ["+-+", "| |", "| |", "+-+"]);
}
