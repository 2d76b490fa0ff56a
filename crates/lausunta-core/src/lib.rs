//! Shared types and character utilities for Lausunta.
//!
//! - [`character`] -- letter / whitespace / punctuation classification and
//!   simple case conversion
//! - [`case`] -- case pattern detection and initial-letter case copying
//! - [`enums`] -- [`TokenKind`](enums::TokenKind) and
//!   [`Severity`](enums::Severity)
//! - [`token`] -- the [`Token`](token::Token) produced by the tokenizer

pub mod case;
pub mod character;
pub mod enums;
pub mod token;
