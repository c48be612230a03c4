//! Parameter help screen for a command-line tool.
//!
//! Run with `cargo run --example parameter_help -- 60` to pick the width.

use crossterm::style::{Attribute, Color};
use tex_box::{
    BlockParameters, Bullet, Gap, GapInput, Insets, List, Result, Style, Table, Tex, TexOptions,
};

struct Parameter {
    name: &'static str,
    kind: &'static str,
    default: Option<&'static str>,
    env: Option<&'static str>,
}

const PARAMETERS: &[Parameter] = &[
    Parameter {
        name: "--config <path>",
        kind: "path",
        default: Some("./app.toml"),
        env: Some("APP_CONFIG"),
    },
    Parameter {
        name: "--jobs <n>",
        kind: "integer",
        default: Some("4"),
        env: None,
    },
    Parameter {
        name: "--verbose",
        kind: "flag",
        default: None,
        env: Some("APP_VERBOSE"),
    },
];

const NOTES: &[Option<&str>] = &[
    Some("Flags given on the command line override environment variables."),
    None,
    Some("Paths are resolved relative to the current working directory, not the config file."),
];

fn main() -> Result<()> {
    let mut options = TexOptions::new();
    if let Some(width) = std::env::args().nth(1).and_then(|arg| arg.parse().ok()) {
        options = options.with_terminal_width(width);
    }

    let heading = Style::fg(Color::Cyan).with_attribute(Attribute::Bold);
    let gap = Gap::resolve(GapInput::axes().with_cross("  "))?;
    let table = PARAMETERS.iter().fold(
        Table::new()
            .with_parameters(BlockParameters::new().with_gap(gap))
            .with_headers(["NAME", "TYPE", "DEFAULT", "ENVIRONMENT"]),
        |table, parameter| {
            table.with_row([
                Some(parameter.name),
                Some(parameter.kind),
                parameter.default,
                parameter.env,
            ])
        },
    );
    let notes = List::new(NOTES.iter().copied()).with_bullet(Bullet::new("•"));

    let output = Tex::with_options(options)
        .block_with(BlockParameters::new().with_style(heading.clone()), "PARAMETERS")
        .block_with(
            BlockParameters::new().with_padding(Insets::new().with_cross_start(2usize)),
            table,
        )
        .block_with(
            BlockParameters::new()
                .with_style(heading)
                .with_padding(Insets::new().with_main_start(1usize)),
            "NOTES",
        )
        .block_with(
            BlockParameters::new().with_padding(Insets::new().with_cross_start(2usize)),
            notes,
        )
        .render()?;

    println!("{output}");
    Ok(())
}
