use serde::Deserialize;

/// Lexer options.
///
/// The defaults give the verbatim token stream: every text run is emitted
/// and input length is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LexerConfig {
    /// Drop `Text` runs made only of whitespace (indentation between tags).
    pub skip_whitespace_text: bool,
    /// Refuse inputs longer than this many bytes.
    pub max_input_len: Option<usize>,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_whitespace_text(mut self, skip: bool) -> Self {
        self.skip_whitespace_text = skip;
        self
    }

    pub fn with_max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = Some(limit);
        self
    }
}
