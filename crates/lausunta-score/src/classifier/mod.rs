// Word-pair classifier: decides whether a recognized word is correct, a
// minor mistake or a major mistake compared to the reference word.
//
// The checks run in a fixed order (exact, equivalent, doubled letter,
// voicing, different) and the first one that applies wins.

use lausunta_core::case::{CaseType, detect_case};
use lausunta_core::character::equals_ignore_case;
use lausunta_core::enums::Severity;

use crate::rules::RuleTable;

/// Why a word pair got its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Equal ignoring case.
    Exact,
    /// Equal after diacritic normalization.
    Equivalent,
    /// One doubled letter written single (or the reverse).
    DoubleLetter,
    /// A voiced consonant swapped for its voiceless pair (or the reverse).
    Voicing,
    /// None of the above.
    Different,
}

impl Classification {
    pub fn severity(self) -> Severity {
        match self {
            Classification::Exact | Classification::Equivalent => Severity::Correct,
            Classification::DoubleLetter | Classification::Voicing => Severity::Minor,
            Classification::Different => Severity::Major,
        }
    }
}

/// Check whether a reference word is an abbreviation: two or three letters,
/// all uppercase ("EU", "TV", "USA", "США").
///
/// Recognizers spell abbreviations inconsistently, so they are never
/// penalized.
pub fn is_abbreviation(word: &str) -> bool {
    let len = word.chars().count();
    (2..=3).contains(&len) && detect_case(word) == CaseType::AllUpper
}

/// Accuracy in percent over per-word severities, rounded half up.
///
/// Each item is one reference word. Returns 0 when there are no words.
pub fn accuracy<I>(severities: I) -> u8
where
    I: IntoIterator<Item = Severity>,
{
    let (sum, count) = severities
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), s| {
            (sum + u64::from(s.weight()), count + 1)
        });
    if count == 0 {
        return 0;
    }
    // round(sum / count) with halves rounded up, in integers
    ((2 * sum + count) / (2 * count)) as u8
}

/// Classifier bound to one rule table.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'r> {
    rules: &'r RuleTable,
}

impl<'r> Classifier<'r> {
    pub fn new(rules: &'r RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r RuleTable {
        self.rules
    }

    /// Lowercase `word` and replace every mapped letter by its canonical
    /// replacement.
    ///
    /// The result is only used for comparisons, never displayed.
    pub fn normalize(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        let mut out = String::with_capacity(lower.len());
        for c in lower.chars() {
            match self.rules.canonical(c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }

    /// Whether both words normalize to the same base form.
    pub fn is_equivalent(&self, a: &str, b: &str) -> bool {
        self.normalize(a) == self.normalize(b)
    }

    /// Whether one word becomes the other by collapsing exactly one doubled
    /// letter to a single letter. Case-insensitive and symmetric.
    pub fn is_double_letter_variant(&self, a: &str, b: &str) -> bool {
        let a: Vec<char> = a.to_lowercase().chars().collect();
        let b: Vec<char> = b.to_lowercase().chars().collect();
        let (long, short) = if a.len() == b.len() + 1 {
            (&a, &b)
        } else if b.len() == a.len() + 1 {
            (&b, &a)
        } else {
            return false;
        };

        let k = long
            .iter()
            .zip(short.iter())
            .position(|(x, y)| x != y)
            .unwrap_or(short.len());
        if long[k + 1..] != short[k..] {
            return false;
        }
        // long[k] is the dropped letter; when k is not the last index,
        // long[k + 1] differs from it, so only the left neighbour can pair.
        let dropped = long[k];
        k > 0 && long[k - 1] == dropped && self.rules.is_doubled_letter(dropped)
    }

    /// Whether the words differ only by replacing every occurrence of one
    /// member of a voicing pair with the other. Case-insensitive and
    /// symmetric.
    pub fn is_voicing_variant(&self, a: &str, b: &str) -> bool {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        if a == b {
            return false;
        }
        self.rules.voicing_pairs().iter().any(|&(x, y)| {
            replaces_into(&a, x, y, &b)
                || replaces_into(&a, y, x, &b)
                || replaces_into(&b, x, y, &a)
                || replaces_into(&b, y, x, &a)
        })
    }

    /// Classify a reference / hypothesis pair, keeping the reason.
    pub fn explain(&self, reference: &str, hypothesis: &str) -> Classification {
        if equals_ignore_case(reference, hypothesis) {
            return Classification::Exact;
        }
        if self.is_equivalent(reference, hypothesis) {
            return Classification::Equivalent;
        }
        if self.is_double_letter_variant(reference, hypothesis) {
            return Classification::DoubleLetter;
        }
        if self.is_voicing_variant(reference, hypothesis) {
            return Classification::Voicing;
        }
        Classification::Different
    }

    /// Classify a reference / hypothesis pair.
    pub fn classify(&self, reference: &str, hypothesis: &str) -> Severity {
        self.explain(reference, hypothesis).severity()
    }
}

/// Whether replacing every `from` in `word` with `to` yields `target`.
fn replaces_into(word: &str, from: char, to: char, target: &str) -> bool {
    word.contains(from) && word.replace(from, to.encode_utf8(&mut [0; 4])) == target
}
