use std::io::{self, Write};

use clap::ValueEnum;
use jsx_lexer::Token;

/// How the token list is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One token per line: `row:colStart-colEnd Kind "value"`
    Pretty,
    /// A JSON array of token objects
    Json,
}

pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], format: Format) -> Result<(), crate::CliError> {
    match format {
        Format::Pretty => write_pretty(out, tokens)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_pretty<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    Ok(())
}
