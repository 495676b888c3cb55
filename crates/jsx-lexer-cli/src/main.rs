use std::io::{self, Read, Write};

use clap::{Args, Parser, Subcommand};
use jsx_lexer::{LexerConfig, LexerError, Scanner, Token};

mod check;
mod logging;
mod output;

use output::Format;

#[derive(Parser)]
#[command(name = "jsx-lex")]
#[command(about = "Tokenize JSX markup and print the token stream")]
#[command(version)]
struct Cli {
    /// Log lexer recoveries (-vv for everything)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the tokens of a file
    Tokens {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },

    /// Report unclosed tags and stray characters inside tags
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input file, or `-` for standard input
    path: String,

    /// Drop whitespace-only text between tags
    #[arg(long)]
    skip_whitespace_text: bool,

    /// Refuse inputs larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_input_len: Option<usize>,
}

impl InputArgs {
    fn config(&self) -> LexerConfig {
        let config = LexerConfig::new().with_skip_whitespace_text(self.skip_whitespace_text);
        match self.max_input_len {
            Some(limit) => config.with_max_input_len(limit),
            None => config,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Lexer(#[from] LexerError),
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    #[error("cannot serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Command::Tokens { input, format } => cmd_tokens(&input, format),
        Command::Check { input } => cmd_check(&input),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).map_err(read_err)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}

fn lex(input: &InputArgs) -> Result<Vec<Token>, CliError> {
    let source = read_source(&input.path)?;
    let tokens = Scanner::with_config(input.config()).try_tokenize(&source)?;
    tracing::debug!(path = %input.path, count = tokens.len(), "lexed input");
    Ok(tokens)
}

fn cmd_tokens(input: &InputArgs, format: Format) -> Result<i32, CliError> {
    let tokens = lex(input)?;
    let mut out = io::stdout().lock();
    output::write_tokens(&mut out, &tokens, format)?;
    out.flush()?;
    Ok(0)
}

fn cmd_check(input: &InputArgs) -> Result<i32, CliError> {
    let tokens = lex(input)?;
    let anomalies = check::find_anomalies(&tokens);
    if anomalies.is_empty() {
        eprintln!("OK: {}", input.path);
        return Ok(0);
    }
    for anomaly in &anomalies {
        eprintln!("{}:{anomaly}", input.path);
    }
    Ok(1)
}
