use std::fmt;

use jsx_lexer::{Token, TokenKind};

/// A structural problem visible in a token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    pub row: usize,
    pub column: usize,
    pub message: String,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.row + 1, self.column + 1, self.message)
    }
}

fn anomaly(token: &Token, message: impl Into<String>) -> Anomaly {
    Anomaly {
        row: token.row,
        column: token.col_start,
        message: message.into(),
    }
}

/// Find tags that never reach `>` or `/>`, and stray text inside tags.
///
/// The lexer recovers from these silently; this is the consumer-side check.
pub fn find_anomalies(tokens: &[Token]) -> Vec<Anomaly> {
    let mut found = Vec::new();
    let mut open: Option<&Token> = None;

    for token in tokens {
        match token.kind {
            TokenKind::TagStart | TokenKind::ClosingTagStart => {
                if let Some(tag) = open.replace(token) {
                    found.push(anomaly(tag, "tag is never closed"));
                }
            }
            kind if kind.ends_tag() => open = None,
            TokenKind::Text if open.is_some() => {
                found.push(anomaly(token, format!("unexpected {:?} inside tag", token.text())));
            }
            TokenKind::EndOfInput => {
                if let Some(tag) = open.take() {
                    found.push(anomaly(tag, "tag is never closed"));
                }
            }
            _ => {}
        }
    }

    found
}
