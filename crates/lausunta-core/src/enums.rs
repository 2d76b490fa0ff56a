// Shared enums: TokenKind, Severity

use serde::Serialize;

/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// A maximal run of letters.
    Word,
    /// A maximal run of whitespace.
    Whitespace,
    /// A single `. , ! ? ; :` character.
    Punctuation,
    /// A maximal run of any other characters (digits, hyphens, quotes).
    Unknown,
}

impl TokenKind {
    /// Stable upper-case label, used by the command-line tools.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

/// How wrong a recognized word is compared to the reference word.
///
/// Ordered from best to worst, so `Severity::Correct < Severity::Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The word was pronounced correctly (or differs only by an ignored
    /// diacritic).
    Correct,
    /// A small slip: a doubled letter or a voiced/voiceless swap.
    Minor,
    /// Anything else, including missing words.
    Major,
}

impl Severity {
    /// Accuracy weight of one reference word with this severity, in percent.
    pub const fn weight(self) -> u32 {
        match self {
            Severity::Correct => 100,
            Severity::Minor => 80,
            Severity::Major => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_weights() {
        assert_eq!(Severity::Correct.weight(), 100);
        assert_eq!(Severity::Minor.weight(), 80);
        assert_eq!(Severity::Major.weight(), 0);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Correct < Severity::Minor);
        assert!(Severity::Minor < Severity::Major);
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Minor).unwrap();
        assert_eq!(json, "\"minor\"");
    }

    #[test]
    fn token_kind_labels() {
        assert_eq!(TokenKind::Word.label(), "WORD");
        assert_eq!(TokenKind::Unknown.label(), "UNKNOWN");
    }
}
