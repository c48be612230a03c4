use criterion::{Criterion, black_box, criterion_group, criterion_main};
use crossterm::style::Color;
use tex_box::width::wrap;
use tex_box::{
    BlockParameters, Border, Gap, GapInput, Insets, Logger, LogEvent, LogSink, LoggingResult,
    Style, Tex, TexOptions,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

const PARAGRAPH: &str = "\x1b[1mLayout\x1b[0m flows constraints down the tree and composes \
rendered boxes on the way back up, wrapping colored text and wide glyphs like 界 and 😀 \
without splitting an escape sequence.";

fn wrap_paragraph(c: &mut Criterion) {
    c.bench_function("wrap_paragraph", |b| {
        b.iter(|| wrap(black_box(PARAGRAPH), black_box(24)));
    });
}

fn render_parameter_table(c: &mut Criterion) {
    let gap = Gap::resolve(
        GapInput::axes()
            .with_main("─")
            .with_cross(" │ ")
            .with_intersection("┼"),
    )
    .expect("valid gap");
    let options = TexOptions::new()
        .with_terminal_width(72)
        .with_logger(Logger::new(NullSink));
    let tree = Tex::with_options(options).table(|t| {
        (0..40).fold(
            t.set(BlockParameters::new().with_gap(gap))
                .headers(["NAME", "TYPE", "DEFAULT", "ENV", "DESCRIPTION"]),
            |t, i| {
                t.row([
                    format!("--option-{i}"),
                    "string".to_string(),
                    format!("value-{i}"),
                    format!("APP_OPTION_{i}"),
                    PARAGRAPH.to_string(),
                ])
            },
        )
    });
    c.bench_function("render_parameter_table", |b| {
        b.iter(|| tree.render().expect("render"));
    });
}

fn render_nested_boxes(c: &mut Criterion) {
    let tree = (0..12).fold(
        Tex::with_options(TexOptions::new().with_terminal_width(100)),
        |tex, depth| {
            tex.block_with(
                BlockParameters::new()
                    .with_padding(Insets::axes(0, 1))
                    .with_border(Border::rounded())
                    .with_style(Style::fg(Color::AnsiValue(depth as u8 + 1))),
                PARAGRAPH,
            )
        },
    );
    c.bench_function("render_nested_boxes", |b| {
        b.iter(|| tree.render().expect("render"));
    });
}

criterion_group!(
    benches,
    wrap_paragraph,
    render_parameter_table,
    render_nested_boxes
);
criterion_main!(benches);
