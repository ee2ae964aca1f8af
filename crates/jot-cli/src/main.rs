//! `jot` CLI — parse, render, and inspect JOT documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse a document and print its canonical rendering (stdin → stdout)
//! echo '{"name":"Ada","scores":[95, 87]}' | jot render
//!
//! # Render from file to file
//! jot render -i data.jot -o canonical.jot
//!
//! # Convert to pretty-printed JSON (escapes decoded, one document per value)
//! jot json -i data.jot
//!
//! # List the scanned tokens
//! echo '[1, true]' | jot tokens
//!
//! # Interactive prompt, one document per line
//! jot repl
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use jot_core::{Diagnostics, Tokenizer};
use std::io::{self, BufRead, Read, Write};

#[derive(Parser)]
#[command(name = "jot", version, about = "JOT (JSON-like Object Tree) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print its canonical rendering
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse a document and pretty-print each top-level value as JSON
    Json {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Tokenize a document and list the scanned tokens
    Tokens {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Interactive prompt: one document per line
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, output } => {
            let source = read_input(input.as_deref())?;
            let document = jot_core::parse(&source).map_err(report)?;
            write_output(output.as_deref(), &document.to_string())?;
        }
        Commands::Json { input, output } => {
            let source = read_input(input.as_deref())?;
            let document = jot_core::parse(&source).map_err(report)?;
            let mut rendered = Vec::new();
            for value in document.to_json() {
                rendered.push(serde_json::to_string_pretty(&value)?);
            }
            write_output(output.as_deref(), &rendered.join("\n"))?;
        }
        Commands::Tokens { input } => {
            let source = read_input(input.as_deref())?;
            let tokenizer = Tokenizer::new(&source).map_err(report)?;
            for token in tokenizer.tokens() {
                println!("{:<10} {:?}", format!("{:?}", token.kind), token.literal);
            }
        }
        Commands::Repl => repl()?,
    }

    Ok(())
}

/// One document per line against a fresh tokenizer/parser pair. Failed lines
/// print their diagnostics to stderr and the loop keeps going; end of input
/// exits cleanly.
fn repl() -> Result<()> {
    println!("jot {} repl", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();
    loop {
        print!(">> ");
        io::stdout().flush()?;

        line.clear();
        let read = reader
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            println!();
            return Ok(());
        }

        match jot_core::parse(&line) {
            Ok(document) => {
                if !document.values.is_empty() {
                    println!("{document}");
                }
            }
            Err(diagnostics) => {
                for diagnostic in diagnostics {
                    eprintln!("{diagnostic}");
                }
            }
        }
    }
}

/// Join every diagnostic into one error, one per line.
fn report(diagnostics: Diagnostics) -> anyhow::Error {
    let rendered: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
    anyhow!(rendered.join("\n"))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
