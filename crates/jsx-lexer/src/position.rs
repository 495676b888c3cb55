use serde::Serialize;

/// A location in source text.
///
/// `row` and `col` are 0-based and count characters, not bytes. `offset` is
/// the byte index into the input and is what in-progress lexemes are sliced
/// with, so buffering never copies text until a token is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub offset: usize,
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position {
        offset: 0,
        row: 0,
        col: 0,
    };

    pub fn new(offset: usize, row: usize, col: usize) -> Self {
        Self { offset, row, col }
    }

    /// Position after consuming one character.
    ///
    /// `\n` starts a new row, `\r` is zero-width, everything else is one column.
    #[inline]
    pub fn advance_char(self, c: char) -> Self {
        let offset = self.offset + c.len_utf8();
        match c {
            '\n' => Self {
                offset,
                row: self.row + 1,
                col: 0,
            },
            '\r' => Self { offset, ..self },
            _ => Self {
                offset,
                col: self.col + 1,
                ..self
            },
        }
    }

    /// Position after consuming all of `text`.
    pub fn advance(self, text: &str) -> Self {
        text.chars().fold(self, Position::advance_char)
    }
}
