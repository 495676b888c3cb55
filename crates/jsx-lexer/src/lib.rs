//! JSX Lexer
//!
//! Tokenizes JSX-flavored markup into positioned tokens for parsers,
//! formatters, highlighters and linters. Handles text runs, opening,
//! closing and self-closing tags, quoted attribute values and braced
//! embedded expressions. Expression text is delimited, never parsed.
//!
//! The lexer is total: malformed or half-typed markup produces a
//! best-effort token stream instead of an error.
//!
//! # Example
//!
//! ```
//! use jsx_lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("<div id=\"main\">");
//! assert_eq!(tokens[2].kind, TokenKind::AttributeKey);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
//! ```

pub mod config;
pub mod emitter;
pub mod position;
pub mod scanner;
pub mod state;
pub mod token;

pub use config::LexerConfig;
pub use position::Position;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

/// Errors from the configured entry point. Tokenizing itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("input is {len} bytes, limit is {limit}")]
    InputTooLarge { len: usize, limit: usize },
}

/// Tokenize `source` with the default configuration.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::tokenize(source)
}
