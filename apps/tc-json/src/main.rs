//! tc-json: answer transit catalogue queries from a JSON document.
//!
//! Reads the document from the path given as the first argument, or from
//! stdin when no argument is given, and prints a JSON array of responses to
//! stdout.  Set `RUST_LOG=info` (or `debug`) for progress on stderr.

mod handler;
mod requests;
mod responses;

#[cfg(test)]
mod tests;

use std::io::{self, Read, Write};

use anyhow::{Context, Result};

use requests::Document;

fn main() -> Result<()> {
    env_logger::init();

    let input = match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let document: Document = serde_json::from_str(&input).context("parsing request document")?;
    let responses = handler::process(&document)?;

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &responses).context("writing responses")?;
    writeln!(out)?;
    Ok(())
}
