use tracing::debug;

use crate::config::LexerConfig;
use crate::position::Position;
use crate::state::{Input, Machine};
use crate::token::Token;
use crate::LexerError;

/// JSX source scanner.
///
/// Feeds the source through the state machine one character at a time,
/// tracking position as it goes, then appends the `EndOfInput` sentinel.
/// Each call owns its own machine, so one scanner can serve any number of
/// inputs on any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: LexerConfig,
}

impl Scanner {
    /// Create a scanner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with a specific configuration.
    pub fn with_config(config: LexerConfig) -> Self {
        Self { config }
    }

    /// Tokenize the entire source with the default configuration.
    ///
    /// Never fails: malformed markup degrades to best-effort tokens.
    pub fn tokenize(source: &str) -> Vec<Token> {
        Scanner::new().scan(source)
    }

    /// Tokenize the entire source, enforcing the configured input limit.
    pub fn try_tokenize(&self, source: &str) -> Result<Vec<Token>, LexerError> {
        if let Some(limit) = self.config.max_input_len {
            if source.len() > limit {
                return Err(LexerError::InputTooLarge {
                    len: source.len(),
                    limit,
                });
            }
        }
        Ok(self.scan(source))
    }

    /// Run the state machine over `source`, ignoring the input limit.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn scan(&self, source: &str) -> Vec<Token> {
        let mut machine = Machine::new(source, &self.config);
        let mut pos = Position::START;

        for c in source.chars() {
            machine.feed(Input::Char(c), pos);
            pos = pos.advance_char(c);
        }
        machine.feed(Input::End, pos);

        let tokens = machine.finish(pos);
        debug!(count = tokens.len(), "tokenized");
        tokens
    }
}
