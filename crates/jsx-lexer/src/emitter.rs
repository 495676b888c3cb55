use crate::position::Position;
use crate::token::{Token, TokenKind};

/// Clamp a column range so it satisfies the token width rules.
///
/// Null or empty values are zero-width at `col_start`. Anything else is at
/// least one column wide. The start never passes the end.
pub fn normalize_columns(value: Option<&str>, col_start: usize, col_end: usize) -> (usize, usize) {
    let col_end = match value {
        None | Some("") => col_start,
        Some(_) => col_end.max(col_start + 1),
    };
    (col_start.min(col_end), col_end)
}

/// Appends normalized tokens to the output sequence.
#[derive(Debug, Default)]
pub struct Emitter {
    tokens: Vec<Token>,
}

impl Emitter {
    /// Create an emitter with no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token with explicit columns on `row`.
    pub fn emit(
        &mut self,
        kind: TokenKind,
        value: Option<&str>,
        row: usize,
        col_start: usize,
        col_end: usize,
    ) {
        let (col_start, col_end) = normalize_columns(value, col_start, col_end);
        self.tokens
            .push(Token::new(kind, value, row, col_start, col_end));
    }

    /// Append a token for the lexeme between `start` and `end`.
    ///
    /// The first-row columns are normalized as in [`Emitter::emit`]; the true
    /// end position is kept in `end_row` / `end_col`.
    pub fn emit_span(&mut self, kind: TokenKind, value: Option<&str>, start: Position, end: Position) {
        let (col_start, col_end) = normalize_columns(value, start.col, end.col);
        let mut token = Token::new(kind, value, start.row, col_start, col_end);
        token.end_row = end.row;
        token.end_col = end.col;
        self.tokens.push(token);
    }

    /// Tokens emitted so far.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Hand the token sequence to the caller.
    pub fn finish(self) -> Vec<Token> {
        self.tokens
    }
}
