use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, debug};

use mparse::grammar::{self, json, stylesheet};
use mparse::lexer;
use mparse::parser::{BoxedParser, ParseError, Parsed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Grammar {
    Stylesheet,
    Json,
    Expression,
    Tokens,
}

/// Parse a document with one of the bundled grammars and print the result.
#[derive(Debug, Parser)]
#[command(name = "mparse", version)]
struct Cli {
    /// Grammar to parse the input with
    #[arg(short, long, value_enum, default_value_t = Grammar::Stylesheet)]
    grammar: Grammar,

    /// Parse this text instead of reading a file
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// File to parse
    #[arg(required_unless_present = "text")]
    file: Option<PathBuf>,

    /// Log engine activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run<'a, T: Display + 'a>(parser: BoxedParser<'a, T>, input: &'a str) -> anyhow::Result<()> {
    match parser.run(input) {
        Ok(Parsed { value, remaining }) => {
            println!("{value}");
            if !remaining.is_empty() {
                eprintln!("Stopped parsing at {:?}", remaining.as_str());
            }
            Ok(())
        }
        Err(ParseError { message, remaining }) => {
            bail!("{message}\nfailed at {:?}", remaining.as_str())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let input = match (&cli.text, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("enter a filename or --text"),
    };
    debug!("parsing {} bytes as {:?}", input.len(), cli.grammar);

    match cli.grammar {
        Grammar::Stylesheet => run(stylesheet::stylesheet(), &input),
        Grammar::Json => run(json::document(), &input),
        Grammar::Expression => run(grammar::expression(), &input),
        Grammar::Tokens => {
            let tokens = lexer::tokens().transform(|tokens| {
                tokens
                    .iter()
                    .map(|token| token.describe())
                    .collect::<Vec<_>>()
                    .join("\n")
            });
            run(tokens, &input)
        }
    }
}
