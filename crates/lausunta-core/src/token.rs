// Token public API type

use serde::Serialize;

use crate::enums::TokenKind;

/// A text token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,

    /// The text content of this token, exactly as it appears in the input.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Position of this token within the input (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            kind,
            text,
            token_len,
            pos,
        }
    }

    /// Whether this token is a word.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}
