// SPDX-License-Identifier: MIT
//
// emoji-palette-demo — scripted sessions against the reference host.
//
// Wires together the workspace crates:
//
//   emoji-catalog → the built-in emoji table and its queries
//   emoji-palette → the palette state machine, module and registration
//   emoji-host    → a rope-backed editor, toolbar and registry to run it in
//
// A script is one command per line (see `script`). Each command is one
// host turn:
//
//   line → parse_line → Session call → change events → end_turn
//
// `show`, `doc` and `json` print to stdout; everything else is silent
// unless RUST_LOG asks for it. A failed `load` is logged as a warning.

mod render;
mod script;

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use emoji_host::{EditorHost, MemoryRegistry, Session, SimpleToolbar};
use emoji_palette::{EmbedFormat, ModuleDefinition, PaletteOptions, register};

use crate::script::{Command, ParseError, parse_line};

/// Buttons the demo toolbar is built with.
const BUTTONS: [&str; 3] = ["bold", "italic", "emoji"];

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    script: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut out = Args::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().ok_or("--config needs a path")?;
                out.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(format!("unknown option: {flag}"));
            }
            path => {
                if out.script.is_some() {
                    return Err(format!("unexpected argument: {path}"));
                }
                if path != "-" {
                    out.script = Some(PathBuf::from(path));
                }
            }
        }
    }
    Ok(out)
}

// ─── Driver ─────────────────────────────────────────────────────────────────

/// Register the emoji format and module, then open a session through the
/// registry.
fn session(options: PaletteOptions) -> Session<'static> {
    let mut registry = MemoryRegistry::new();
    if let Err(e) = register(&mut registry, EmbedFormat::emoji(), ModuleDefinition::emoji(), true) {
        tracing::error!(error = %e, "registration failed; running without a palette");
    }
    Session::from_registry(
        &registry,
        EditorHost::new(),
        SimpleToolbar::with_buttons(BUTTONS),
        options,
    )
}

/// Run one command as one host turn, writing any output to `out`.
fn run(session: &mut Session<'_>, command: Command, out: &mut impl Write) -> io::Result<()> {
    match command {
        Command::Type(text) => session.type_text(&text),
        Command::Caret(index) => session.move_caret(index),
        Command::Blur => session.blur(),
        Command::Click(button) => {
            if !session.click(&button) {
                tracing::debug!(%button, "button has no handler");
            }
        }
        Command::Tab(category) => {
            session.select_tab(category);
        }
        Command::Search(query) => {
            session.search(&query);
        }
        Command::Pick(key) => {
            if session.pick(&key).is_none() {
                tracing::debug!(%key, "pick ignored");
            }
        }
        Command::Outside => session.click_outside(),
        Command::Show => {
            match session.view() {
                Some(view) => {
                    for line in render::palette_lines(view) {
                        writeln!(out, "{line}")?;
                    }
                }
                None => writeln!(out, "(palette closed)")?,
            }
            print_doc(session, out)?;
        }
        Command::Doc => print_doc(session, out)?,
        Command::Json => {
            let json = session.host().to_json().map_err(io::Error::other)?;
            writeln!(out, "{json}")?;
        }
        Command::Load(json) => {
            if let Err(e) = session.load_json(&json) {
                tracing::warn!(error = %e, "load failed; document unchanged");
            }
        }
    }
    Ok(())
}

fn print_doc(session: &Session<'_>, out: &mut impl Write) -> io::Result<()> {
    let host = session.host();
    writeln!(out, "{}", render::document_line(host.document(), host.caret()))
}

/// Run a whole script. Returns how many lines failed to parse.
fn run_script(session: &mut Session<'_>, source: &str, out: &mut impl Write) -> io::Result<usize> {
    let mut failures = 0;
    for (n, line) in source.lines().enumerate() {
        match parse_line(line) {
            Ok(command) => run(session, command, out)?,
            Err(ParseError::Skip) => {}
            Err(e) => {
                failures += 1;
                eprintln!("emoji-palette-demo: line {}: {e}", n + 1);
            }
        }
    }
    Ok(failures)
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let raw: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&raw).unwrap_or_else(|e| {
        eprintln!("emoji-palette-demo: {e}");
        eprintln!("usage: emoji-palette-demo [--config <path>] [script | -]");
        process::exit(2);
    });

    let options = args
        .config
        .as_deref()
        .map_or_else(PaletteOptions::default, PaletteOptions::load_or_default);

    let source = match &args.script {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("emoji-palette-demo: {}: {e}", path.display());
            process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("emoji-palette-demo: stdin: {e}");
                process::exit(1);
            }
            buf
        }
    };

    let mut session = session(options);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_script(&mut session, &source, &mut out) {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("emoji-palette-demo: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
