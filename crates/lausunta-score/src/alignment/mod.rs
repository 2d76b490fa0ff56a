// Word alignment between a reference phrase and a recognized transcript.
//
// Architecture:
//   - `rules`: individual align rules (AlignRule trait), one heuristic each
//   - `strategy`: the scan loop that evaluates an ordered rule list
//   - `distance`: Levenshtein distance for the compound-word lookahead
//
// The scan is greedy left to right. At every position the first rule that
// matches decides the unit and how many words it consumes on each side.

pub mod distance;
pub mod rules;
pub mod strategy;

use lausunta_core::enums::Severity;
use serde::Serialize;

use crate::classifier::Classifier;

pub use rules::{AlignContext, AlignRule};
pub use strategy::{AlignStrategy, default_strategy};

/// How a correct unit was recognized as correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CorrectBy {
    /// Equal ignoring case.
    Exact,
    /// The reference word is an abbreviation, accepted unchecked.
    Abbreviation,
    /// Equal after diacritic normalization.
    Equivalent,
}

/// The kind of one alignment unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum UnitKind {
    /// One reference word matched one recognized word.
    Correct { by: CorrectBy },
    /// One reference word paired with a different recognized word. The
    /// severity is always `Minor` or `Major`.
    Mismatch { severity: Severity },
    /// A recognized word with no reference counterpart.
    Insertion,
    /// A reference word with no recognized counterpart.
    Deletion,
    /// Two reference words recognized as one word ("totta kai" ->
    /// "tottakai"). `distance` is the edit distance of the second half.
    CompoundMerge { distance: usize },
    /// One reference word recognized as two words ("maitohyllyllä" ->
    /// "maito hyllyllä"). `distance` is the edit distance of the second half.
    CompoundSplit { distance: usize },
}

impl UnitKind {
    /// Severity of every reference word covered by this unit, or `None` for
    /// insertions, which cover no reference word.
    pub fn severity(self) -> Option<Severity> {
        match self {
            UnitKind::Correct { .. }
            | UnitKind::CompoundMerge { .. }
            | UnitKind::CompoundSplit { .. } => Some(Severity::Correct),
            UnitKind::Mismatch { severity } => Some(severity),
            UnitKind::Deletion => Some(Severity::Major),
            UnitKind::Insertion => None,
        }
    }
}

/// One correspondence step between reference and recognized words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentUnit {
    #[serde(flatten)]
    pub kind: UnitKind,
    /// Reference words covered, in their original case.
    pub reference: Vec<String>,
    /// Recognized words consumed, as given to the aligner.
    pub hypothesis: Vec<String>,
}

impl AlignmentUnit {
    pub fn new(kind: UnitKind, reference: Vec<String>, hypothesis: Vec<String>) -> Self {
        Self {
            kind,
            reference,
            hypothesis,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        self.kind.severity()
    }

    pub fn is_insertion(&self) -> bool {
        self.kind == UnitKind::Insertion
    }

    /// One severity per covered reference word.
    pub fn word_severities(&self) -> impl Iterator<Item = Severity> + '_ {
        self.severity()
            .into_iter()
            .flat_map(|s| std::iter::repeat_n(s, self.reference.len()))
    }
}

/// Align reference words with recognized words using the default rule
/// order.
pub fn align(
    reference: &[&str],
    hypothesis: &[&str],
    classifier: &Classifier<'_>,
) -> Vec<AlignmentUnit> {
    default_strategy().align(reference, hypothesis, classifier)
}
