// Character classification and simple case conversion

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// A letter of any script (Latin with diacritics, Cyrillic, Greek, ...).
    Letter,
    Whitespace,
    /// One of the sentence punctuation marks `. , ! ? ; :`.
    Punctuation,
    /// Anything else: digits, hyphens, quotes, symbols.
    Unknown,
}

/// Returns the character type for a given character.
///
/// Letters take precedence over everything else, so a word is always a
/// maximal run of `Letter` characters.
pub fn get_char_type(c: char) -> CharType {
    if is_letter(c) {
        return CharType::Letter;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if is_sentence_punctuation(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

/// Check whether a character is a letter.
///
/// Uses the Unicode `Alphabetic` property, which covers every script a
/// learner might practise without a hand-maintained range table.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Check whether a character is one of the punctuation marks kept as
/// separate tokens: `. , ! ? ; :`.
pub fn is_sentence_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | '!' | '?' | ';' | ':')
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. For the "simple"
// one-to-one mapping we only take the first character.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c) || c == '\u{018F}' // LATIN CAPITAL LETTER SCHWA
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Check whether a character is whitespace.
///
/// The set is the Unicode `White_Space` characters plus the zero width
/// no-break space (U+FEFF), which speech recognizers occasionally emit.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0x85
        || cp == 0xA0
        || cp == 0x1680
        || cp == 0x180E
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
        || cp == 0xFEFF
}

/// Compare two strings for equality, ignoring letter case.
///
/// Both sides are fully lowercased first, so multi-character mappings
/// (e.g. `İ`) compare the same way `str::to_lowercase` would.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- CharType tests --

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00C4}'), CharType::Letter); // Ä
        assert_eq!(get_char_type('\u{00F6}'), CharType::Letter); // ö
        assert_eq!(get_char_type('\u{00C0}'), CharType::Letter); // À
    }

    #[test]
    fn char_type_cyrillic_letters() {
        assert_eq!(get_char_type('\u{0416}'), CharType::Letter); // Ж
        assert_eq!(get_char_type('\u{0457}'), CharType::Letter); // ї
    }

    #[test]
    fn char_type_whitespace() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
        assert_eq!(get_char_type('\n'), CharType::Whitespace);
    }

    #[test]
    fn char_type_punctuation() {
        for c in ['.', ',', '!', '?', ';', ':'] {
            assert_eq!(get_char_type(c), CharType::Punctuation, "{c}");
        }
    }

    #[test]
    fn char_type_unknown() {
        assert_eq!(get_char_type('-'), CharType::Unknown);
        assert_eq!(get_char_type('"'), CharType::Unknown);
        assert_eq!(get_char_type('7'), CharType::Unknown);
        assert_eq!(get_char_type('@'), CharType::Unknown);
        assert_eq!(get_char_type('\u{00BF}'), CharType::Unknown); // ¿
    }

    // -- Case functions --

    #[test]
    fn simple_lower_extended() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('\u{00C4}'), '\u{00E4}'); // Ä -> ä
        assert_eq!(simple_lower('\u{0416}'), '\u{0436}'); // Ж -> ж
    }

    #[test]
    fn simple_upper_extended() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('\u{00F6}'), '\u{00D6}'); // ö -> Ö
        // ß uppercases to "SS"; the simple mapping keeps the first char
        assert_eq!(simple_upper('\u{00DF}'), 'S');
    }

    #[test]
    fn is_upper_basic() {
        assert!(is_upper('A'));
        assert!(is_upper('\u{00C4}')); // Ä
        assert!(is_upper('\u{018F}')); // Ə
        assert!(!is_upper('a'));
        assert!(!is_upper('1'));
    }

    #[test]
    fn is_lower_basic() {
        assert!(is_lower('a'));
        assert!(is_lower('\u{00E4}')); // ä
        assert!(!is_lower('A'));
        assert!(!is_lower('1'));
    }

    #[test]
    fn whitespace_chars() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\r'));
        assert!(is_whitespace('\u{00A0}')); // NO-BREAK SPACE
        assert!(is_whitespace('\u{3000}')); // IDEOGRAPHIC SPACE
        assert!(is_whitespace('\u{FEFF}'));
        assert!(!is_whitespace('a'));
        assert!(!is_whitespace('0'));
    }

    #[test]
    fn equals_ignore_case_basic() {
        assert!(equals_ignore_case("Kiitos", "kiitos"));
        assert!(equals_ignore_case("\u{00C4}iti", "\u{00E4}iti")); // Äiti / äiti
        assert!(!equals_ignore_case("kiitos", "kiitoz"));
        assert!(!equals_ignore_case("ab", "abc"));
        assert!(equals_ignore_case("", ""));
    }
}
