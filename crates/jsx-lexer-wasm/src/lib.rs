//! WASM bindings for the JSX lexer.
//!
//! Exposes `tokenize()` to JavaScript via wasm-bindgen for editor and
//! highlighter hosts. Tokens cross the boundary as plain objects
//! `{ type, value, row, colStart, colEnd, endRow, endCol }`.

use jsx_lexer::{LexerConfig, Scanner, Token};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js(tokens: &[Token]) -> Result<JsValue, JsError> {
    // `null` rather than `undefined` for the end-of-input value.
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    tokens
        .serialize(&serializer)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Tokenize JSX source with the default options.
///
/// Returns an array of token objects. Never throws for malformed markup.
#[wasm_bindgen]
pub fn tokenize(source: &str) -> Result<JsValue, JsError> {
    to_js(&Scanner::tokenize(source))
}

/// Tokenize JSX source with options `{ skipWhitespaceText?, maxInputLen? }`.
///
/// Throws if the options object is malformed or the input exceeds `maxInputLen`.
#[wasm_bindgen(js_name = tokenizeWith)]
pub fn tokenize_with(source: &str, options: JsValue) -> Result<JsValue, JsError> {
    let config = native_config(options)?;
    let tokens = Scanner::with_config(config)
        .try_tokenize(source)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&tokens)
}

fn native_config(options: JsValue) -> Result<LexerConfig, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(LexerConfig::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the lexer version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
