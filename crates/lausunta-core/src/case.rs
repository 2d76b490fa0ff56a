// Case type detection and initial-letter case copying

use crate::character::{is_lower, is_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No cased letters found in the word.
    NoLetters,
    /// All letters are lowercase: "koira".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Koira".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "koIra".
    Complex,
    /// All letters are uppercase: "KOIRA".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Characters without case (digits, punctuation, uncased scripts) are
/// ignored when determining the pattern.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(first) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(first) {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Copy the case of `source`'s first letter onto `target`.
///
/// When `source` starts with an uppercase letter, the first character of
/// `target` is uppercased; otherwise `target` is returned unchanged. Only
/// the first character is touched, so "Kiitos" + "kiitoz" gives "Kiitoz".
pub fn with_initial_case(source: &str, target: &str) -> String {
    let source_upper = source.chars().next().is_some_and(is_upper);
    let mut chars = target.chars();
    match chars.next() {
        Some(first) if source_upper => {
            let mut out = String::with_capacity(target.len() + 2);
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => target.to_string(),
    }
}
