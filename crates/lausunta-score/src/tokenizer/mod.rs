// Tokenizer: splits reference text into lossless tokens and transcripts
// into lowercase words.

use lausunta_core::character::{CharType, get_char_type, is_letter};
use lausunta_core::enums::TokenKind;
use lausunta_core::token::Token;

/// Map a character class to the token kind it produces.
fn kind_of(char_type: CharType) -> TokenKind {
    match char_type {
        CharType::Letter => TokenKind::Word,
        CharType::Whitespace => TokenKind::Whitespace,
        CharType::Punctuation => TokenKind::Punctuation,
        CharType::Unknown => TokenKind::Unknown,
    }
}

/// Split `text` into word, whitespace, punctuation and unknown tokens.
///
/// Words, whitespace and unknown characters are grouped into maximal runs;
/// each punctuation mark is a token of its own. Concatenating the `text` of
/// every returned token yields `text` again.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start_byte = 0;
    let mut start_pos = 0;
    let mut current: Option<TokenKind> = None;

    for (pos, (byte, c)) in text.char_indices().enumerate() {
        let kind = kind_of(get_char_type(c));
        let continues = match current {
            Some(prev) => prev == kind && kind != TokenKind::Punctuation,
            None => false,
        };
        if !continues {
            if let Some(prev) = current {
                tokens.push(Token::new(prev, &text[start_byte..byte], start_pos));
            }
            current = Some(kind);
            start_byte = byte;
            start_pos = pos;
        }
    }
    if let Some(prev) = current {
        tokens.push(Token::new(prev, &text[start_byte..], start_pos));
    }

    tokens
}

/// Extract the lowercased letter runs of a transcript.
///
/// Everything that is not a letter separates words and is discarded:
/// recognizers add punctuation that was never spoken.
pub fn words_of(text: &str) -> Vec<String> {
    text.split(|c: char| !is_letter(c))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// The texts of the word tokens, in order.
pub fn reference_words(tokens: &[Token]) -> Vec<&str> {
    tokens
        .iter()
        .filter(|t| t.is_word())
        .map(|t| t.text.as_str())
        .collect()
}
