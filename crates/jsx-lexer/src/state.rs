//! The lexer state machine.
//!
//! One [`State`] variant per lexical mode, each carrying only what that mode
//! needs. [`Machine::feed`] applies a single character (or the end marker)
//! to the current state, emitting tokens and choosing the next state. A
//! transition may ask for the same input to be *reconsumed* by the next
//! state; this replaces lookahead, so the machine only ever sees one
//! character at a time.
//!
//! In-progress lexemes are never copied. States remember the [`Position`]
//! where the lexeme began and the text is sliced out of the source when the
//! token is emitted.
//!
//! Malformed input never fails. Each state has a local recovery rule that
//! drops or reinterprets the partial lexeme and carries on.

use tracing::debug;

use crate::config::LexerConfig;
use crate::emitter::Emitter;
use crate::position::Position;
use crate::token::{Token, TokenKind};

/// One unit of input to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Char(char),
    End,
}

/// Lexer modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Plain text outside tags. `start` is where the buffered run began.
    Data { start: Option<Position> },
    /// Just after `<`.
    TagOpen { lt: Position },
    /// Reading a tag name.
    TagName { start: Option<Position> },
    /// Between attributes inside a tag.
    InTag,
    /// Reading an attribute key that began at `start`.
    AttributeName { start: Position },
    /// After `=`, waiting for a quote or brace.
    AttributeValueStart,
    /// Inside a quoted attribute value opened at `open`.
    QuotedValue { quote: char, open: Position },
    /// Inside a braced expression opened at `open`.
    ///
    /// `depth` counts unmatched `{` including the opening one. While
    /// `in_quote` holds a quote character, braces are not counted.
    ExpressionValue {
        open: Position,
        depth: usize,
        in_quote: Option<char>,
    },
    /// Saw a `/` inside a tag at `slash`; a `>` makes it self-closing.
    AwaitingSelfClose { slash: Position },
}

impl State {
    pub const INITIAL: State = State::Data { start: None };
}

impl Default for State {
    fn default() -> Self {
        State::INITIAL
    }
}

/// Outcome of one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Input consumed, continue in this state.
    Advance(State),
    /// Hand the same input to this state.
    Reconsume(State),
}

fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Drives [`State`] transitions over one source string.
#[derive(Debug)]
pub struct Machine<'src> {
    source: &'src str,
    state: State,
    out: Emitter,
    skip_whitespace_text: bool,
}

impl<'src> Machine<'src> {
    /// Create a machine in the initial `Data` state.
    pub fn new(source: &'src str, config: &LexerConfig) -> Self {
        Self::with_state(source, config, State::INITIAL)
    }

    /// Start in an arbitrary state, for driving a single transition.
    pub fn with_state(source: &'src str, config: &LexerConfig, state: State) -> Self {
        Self {
            source,
            state,
            out: Emitter::new(),
            skip_whitespace_text: config.skip_whitespace_text,
        }
    }

    /// The state the next input will be applied to.
    pub fn state(&self) -> State {
        self.state
    }

    /// Tokens emitted so far.
    pub fn tokens(&self) -> &[Token] {
        self.out.tokens()
    }

    /// Apply `input`, located at `at`, to the current state.
    pub fn feed(&mut self, input: Input, at: Position) {
        let mut state = self.state;
        loop {
            match self.step(state, input, at) {
                Step::Advance(next) => {
                    self.state = next;
                    return;
                }
                Step::Reconsume(next) => state = next,
            }
        }
    }

    /// Append the end-of-input sentinel at `at` and return the tokens.
    pub fn finish(mut self, at: Position) -> Vec<Token> {
        self.out
            .emit(TokenKind::EndOfInput, None, at.row, at.col, at.col);
        self.out.finish()
    }

    /// A single transition: `(state, input, position) -> next`.
    pub fn step(&mut self, state: State, input: Input, at: Position) -> Step {
        match state {
            State::Data { start } => self.data(start, input, at),
            State::TagOpen { lt } => self.tag_open(lt, input, at),
            State::TagName { start } => self.tag_name(start, input, at),
            State::InTag => self.in_tag(input, at),
            State::AttributeName { start } => self.attribute_name(start, input, at),
            State::AttributeValueStart => self.attribute_value_start(input, at),
            State::QuotedValue { quote, open } => self.quoted_value(quote, open, input, at),
            State::ExpressionValue {
                open,
                depth,
                in_quote,
            } => self.expression_value(open, depth, in_quote, input, at),
            State::AwaitingSelfClose { slash } => self.awaiting_self_close(slash, input, at),
        }
    }

    // --- States ---

    fn data(&mut self, start: Option<Position>, input: Input, at: Position) -> Step {
        match input {
            Input::Char('<') => {
                self.flush_text(start, at);
                Step::Advance(State::TagOpen { lt: at })
            }
            Input::Char(_) => Step::Advance(State::Data {
                start: Some(start.unwrap_or(at)),
            }),
            Input::End => {
                self.flush_text(start, at);
                Step::Advance(State::INITIAL)
            }
        }
    }

    fn tag_open(&mut self, lt: Position, input: Input, at: Position) -> Step {
        match input {
            Input::Char('/') => {
                self.out.emit_span(
                    TokenKind::ClosingTagStart,
                    Some("</"),
                    lt,
                    at.advance_char('/'),
                );
                Step::Advance(State::TagName { start: None })
            }
            Input::Char(_) => {
                self.out
                    .emit_span(TokenKind::TagStart, Some("<"), lt, lt.advance_char('<'));
                Step::Reconsume(State::TagName { start: None })
            }
            Input::End => {
                debug!(row = lt.row, col = lt.col, "dangling `<` at end of input dropped");
                Step::Reconsume(State::INITIAL)
            }
        }
    }

    fn tag_name(&mut self, start: Option<Position>, input: Input, at: Position) -> Step {
        match input {
            Input::Char(c) if is_tag_name_char(c) => Step::Advance(State::TagName {
                start: Some(start.unwrap_or(at)),
            }),
            Input::Char(c) if c.is_whitespace() => {
                self.flush_lexeme(TokenKind::Identifier, start, at);
                Step::Advance(State::InTag)
            }
            Input::Char('/') => {
                self.flush_lexeme(TokenKind::Identifier, start, at);
                Step::Advance(State::AwaitingSelfClose { slash: at })
            }
            Input::Char('>') => {
                self.flush_lexeme(TokenKind::Identifier, start, at);
                self.tag_end(at);
                Step::Advance(State::INITIAL)
            }
            Input::Char(c) => {
                self.flush_lexeme(TokenKind::Identifier, start, at);
                debug!(row = at.row, col = at.col, ?c, "invalid tag name character, resuming as text");
                Step::Reconsume(State::INITIAL)
            }
            Input::End => {
                self.flush_lexeme(TokenKind::Identifier, start, at);
                debug!(row = at.row, col = at.col, "unterminated tag at end of input");
                Step::Reconsume(State::INITIAL)
            }
        }
    }

    fn in_tag(&mut self, input: Input, at: Position) -> Step {
        match input {
            Input::Char(c) if c.is_whitespace() => Step::Advance(State::InTag),
            Input::Char('/') => Step::Advance(State::AwaitingSelfClose { slash: at }),
            Input::Char('>') => {
                self.tag_end(at);
                Step::Advance(State::INITIAL)
            }
            Input::Char(_) => Step::Reconsume(State::AttributeName { start: at }),
            Input::End => {
                debug!(row = at.row, col = at.col, "unterminated tag at end of input");
                Step::Reconsume(State::INITIAL)
            }
        }
    }

    fn attribute_name(&mut self, start: Position, input: Input, at: Position) -> Step {
        match input {
            Input::Char('=') => {
                self.flush_lexeme(TokenKind::AttributeKey, Some(start), at);
                self.out.emit_span(
                    TokenKind::AttributeEquals,
                    Some("="),
                    at,
                    at.advance_char('='),
                );
                Step::Advance(State::AttributeValueStart)
            }
            Input::Char('/') => {
                self.flush_lexeme(TokenKind::AttributeKey, Some(start), at);
                Step::Advance(State::AwaitingSelfClose { slash: at })
            }
            Input::Char('>') => {
                self.flush_lexeme(TokenKind::AttributeKey, Some(start), at);
                self.tag_end(at);
                Step::Advance(State::INITIAL)
            }
            Input::Char(c) if c.is_whitespace() => {
                self.flush_lexeme(TokenKind::AttributeKey, Some(start), at);
                Step::Advance(State::InTag)
            }
            Input::Char(_) => Step::Advance(State::AttributeName { start }),
            Input::End => {
                self.flush_lexeme(TokenKind::AttributeKey, Some(start), at);
                debug!(row = at.row, col = at.col, "unterminated tag at end of input");
                Step::Reconsume(State::INITIAL)
            }
        }
    }

    fn attribute_value_start(&mut self, input: Input, at: Position) -> Step {
        match input {
            Input::Char(c) if c.is_whitespace() => Step::Advance(State::AttributeValueStart),
            Input::Char(quote @ ('"' | '\'')) => Step::Advance(State::QuotedValue { quote, open: at }),
            Input::Char('{') => Step::Advance(State::ExpressionValue {
                open: at,
                depth: 1,
                in_quote: None,
            }),
            _ => {
                debug!(row = at.row, col = at.col, "attribute value missing after `=`");
                Step::Reconsume(State::InTag)
            }
        }
    }

    fn quoted_value(&mut self, quote: char, open: Position, input: Input, at: Position) -> Step {
        match input {
            Input::Char(c) if c == quote => {
                let value = &self.source[open.offset + quote.len_utf8()..at.offset];
                self.out.emit_span(
                    TokenKind::AttributeValue,
                    Some(value),
                    open,
                    at.advance_char(c),
                );
                Step::Advance(State::InTag)
            }
            Input::Char(_) => Step::Advance(State::QuotedValue { quote, open }),
            Input::End => {
                debug!(row = open.row, col = open.col, "unterminated quoted attribute value dropped");
                Step::Reconsume(State::INITIAL)
            }
        }
    }

    fn expression_value(
        &mut self,
        open: Position,
        depth: usize,
        in_quote: Option<char>,
        input: Input,
        at: Position,
    ) -> Step {
        let Input::Char(c) = input else {
            debug!(row = open.row, col = open.col, depth, "unterminated expression dropped");
            return Step::Reconsume(State::INITIAL);
        };

        let (depth, in_quote) = match (in_quote, c) {
            (Some(q), c) if c == q => (depth, None),
            (Some(q), _) => (depth, Some(q)),
            (None, '"' | '\'') => (depth, Some(c)),
            (None, '{') => (depth + 1, None),
            (None, '}') if depth == 1 => {
                let value = &self.source[open.offset + '{'.len_utf8()..at.offset];
                self.out.emit_span(
                    TokenKind::JavaScriptExpression,
                    Some(value),
                    open,
                    at.advance_char('}'),
                );
                return Step::Advance(State::InTag);
            }
            (None, '}') => (depth - 1, None),
            (None, _) => (depth, None),
        };

        Step::Advance(State::ExpressionValue {
            open,
            depth,
            in_quote,
        })
    }

    fn awaiting_self_close(&mut self, slash: Position, input: Input, at: Position) -> Step {
        match input {
            Input::Char('>') => {
                self.out.emit_span(
                    TokenKind::SelfClosing,
                    Some("/>"),
                    slash,
                    at.advance_char('>'),
                );
                Step::Advance(State::INITIAL)
            }
            Input::Char(c) if c.is_whitespace() => Step::Advance(State::AwaitingSelfClose { slash }),
            Input::Char(_) => {
                self.lone_slash(slash);
                Step::Reconsume(State::InTag)
            }
            Input::End => {
                self.lone_slash(slash);
                Step::Advance(State::INITIAL)
            }
        }
    }

    // --- Emission helpers ---

    /// Emit the text run buffered since `start`, if any.
    fn flush_text(&mut self, start: Option<Position>, at: Position) {
        let Some(start) = start else {
            return;
        };
        let text = &self.source[start.offset..at.offset];
        if self.skip_whitespace_text && text.chars().all(char::is_whitespace) {
            return;
        }
        let end = start.advance(text);
        debug_assert_eq!(end, at);
        self.out.emit_span(TokenKind::Text, Some(text), start, end);
    }

    /// Emit the lexeme between `start` and `at` unless it is empty.
    fn flush_lexeme(&mut self, kind: TokenKind, start: Option<Position>, at: Position) {
        let Some(start) = start else {
            return;
        };
        if start.offset == at.offset {
            return;
        }
        let text = &self.source[start.offset..at.offset];
        self.out.emit_span(kind, Some(text), start, at);
    }

    fn tag_end(&mut self, at: Position) {
        self.out
            .emit_span(TokenKind::TagEnd, Some(">"), at, at.advance_char('>'));
    }

    /// A `/` that did not become `/>` is kept as literal text.
    fn lone_slash(&mut self, slash: Position) {
        debug!(row = slash.row, col = slash.col, "lone `/` in tag kept as text");
        self.out
            .emit_span(TokenKind::Text, Some("/"), slash, slash.advance_char('/'));
    }
}
