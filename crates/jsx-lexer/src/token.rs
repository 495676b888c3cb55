use std::fmt;

use serde::Serialize;

/// Token classification for JSX markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Tag structure
    TagStart,        // <
    ClosingTagStart, // </
    TagEnd,          // >
    SelfClosing,     // />
    Identifier,

    // Content
    Text,

    // Attributes
    AttributeKey,
    AttributeEquals,
    AttributeValue,
    JavaScriptExpression,

    // End of input
    EndOfInput,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::TagStart => "TagStart",
            TokenKind::ClosingTagStart => "ClosingTagStart",
            TokenKind::TagEnd => "TagEnd",
            TokenKind::SelfClosing => "SelfClosing",
            TokenKind::Identifier => "Identifier",
            TokenKind::Text => "Text",
            TokenKind::AttributeKey => "AttributeKey",
            TokenKind::AttributeEquals => "AttributeEquals",
            TokenKind::AttributeValue => "AttributeValue",
            TokenKind::JavaScriptExpression => "JavaScriptExpression",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// Whether the token's columns cover a delimiter pair (quotes or braces)
    /// that its value leaves out.
    pub fn is_delimited(self) -> bool {
        matches!(
            self,
            TokenKind::AttributeValue | TokenKind::JavaScriptExpression
        )
    }

    /// Tokens that close an open tag.
    pub fn ends_tag(self) -> bool {
        matches!(self, TokenKind::TagEnd | TokenKind::SelfClosing)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token produced by the lexer.
///
/// `row`, `col_start` and `col_end` locate the lexeme's first row as a
/// half-open column range. A lexeme that crosses a line break still reports
/// `col_end` on `row` (clamped so the range never inverts); its real end is
/// `end_row` / `end_col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: Option<String>,
    pub row: usize,
    pub col_start: usize,
    pub col_end: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl Token {
    /// Build a single-row token. `end_row` / `end_col` follow `row` / `col_end`.
    pub fn new(
        kind: TokenKind,
        value: Option<&str>,
        row: usize,
        col_start: usize,
        col_end: usize,
    ) -> Self {
        Self {
            kind,
            value: value.map(str::to_owned),
            row,
            col_start,
            col_end,
            end_row: row,
            end_col: col_end,
        }
    }

    /// The value text, or `""` for the end-of-input sentinel.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    pub fn is_single_row(&self) -> bool {
        self.row == self.end_row
    }

    pub fn width(&self) -> usize {
        self.col_end - self.col_start
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{} {}",
            self.row, self.col_start, self.col_end, self.kind
        )?;
        if let Some(value) = &self.value {
            write!(f, " {value:?}")?;
        }
        if !self.is_single_row() {
            write!(f, " (ends {}:{})", self.end_row, self.end_col)?;
        }
        Ok(())
    }
}
