// Individual align rules: each recognizes one kind of correspondence at the
// current scan position and says how many words it consumes on each side.

use crate::classifier::{Classification, Classifier, is_abbreviation};

use super::distance::near_match;
use super::{AlignmentUnit, CorrectBy, UnitKind};

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Both word sequences of one alignment, plus their lowercase forms and the
/// classifier used for word-pair decisions.
pub struct AlignContext<'a> {
    reference: &'a [&'a str],
    hypothesis: &'a [&'a str],
    reference_lower: Vec<String>,
    hypothesis_lower: Vec<String>,
    classifier: Classifier<'a>,
}

impl<'a> AlignContext<'a> {
    pub fn new(
        reference: &'a [&'a str],
        hypothesis: &'a [&'a str],
        classifier: Classifier<'a>,
    ) -> Self {
        Self {
            reference,
            hypothesis,
            reference_lower: reference.iter().map(|w| w.to_lowercase()).collect(),
            hypothesis_lower: hypothesis.iter().map(|w| w.to_lowercase()).collect(),
            classifier,
        }
    }

    pub fn reference(&self) -> &'a [&'a str] {
        self.reference
    }

    pub fn hypothesis(&self) -> &'a [&'a str] {
        self.hypothesis
    }

    pub fn classifier(&self) -> &Classifier<'a> {
        &self.classifier
    }

    /// Lowercase reference word at `i`.
    pub fn reference_lower(&self, i: usize) -> Option<&str> {
        self.reference_lower.get(i).map(String::as_str)
    }

    /// Lowercase recognized word at `j`.
    pub fn hypothesis_lower(&self, j: usize) -> Option<&str> {
        self.hypothesis_lower.get(j).map(String::as_str)
    }

    /// Build a unit covering `reference[i..i + ref_len]` and
    /// `hypothesis[j..j + hyp_len]`.
    pub fn unit(
        &self,
        kind: UnitKind,
        i: usize,
        ref_len: usize,
        j: usize,
        hyp_len: usize,
    ) -> AlignmentUnit {
        AlignmentUnit::new(
            kind,
            self.reference[i..i + ref_len].iter().map(|w| w.to_string()).collect(),
            self.hypothesis[j..j + hyp_len].iter().map(|w| w.to_string()).collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One alignment heuristic.
///
/// `try_align` is called with `i < reference.len()` and
/// `j < hypothesis.len()`. A returned unit must cover at least one word on
/// each side, starting at `i` and `j`.
pub trait AlignRule: Send + Sync {
    /// Short name used in trace logs.
    fn name(&self) -> &'static str;

    fn try_align(&self, cx: &AlignContext<'_>, i: usize, j: usize) -> Option<AlignmentUnit>;
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Same word ignoring case.
pub struct ExactMatch;

impl AlignRule for ExactMatch {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn try_align(&self, cx: &AlignContext<'_>, i: usize, j: usize) -> Option<AlignmentUnit> {
        (cx.reference_lower(i)? == cx.hypothesis_lower(j)?)
            .then(|| cx.unit(UnitKind::Correct { by: CorrectBy::Exact }, i, 1, j, 1))
    }
}

/// Reference abbreviations pair with whatever was recognized.
pub struct Abbreviation;

impl AlignRule for Abbreviation {
    fn name(&self) -> &'static str {
        "abbreviation"
    }

    fn try_align(&self, cx: &AlignContext<'_>, i: usize, j: usize) -> Option<AlignmentUnit> {
        is_abbreviation(cx.reference().get(i)?).then(|| {
            cx.unit(
                UnitKind::Correct {
                    by: CorrectBy::Abbreviation,
                },
                i,
                1,
                j,
                1,
            )
        })
    }
}

/// Two reference words heard as one: the recognized word starts with
/// `reference[i]` and the rest is `reference[i + 1]` or close to it.
pub struct CompoundMerge;

impl AlignRule for CompoundMerge {
    fn name(&self) -> &'static str {
        "compound-merge"
    }

    fn try_align(&self, cx: &AlignContext<'_>, i: usize, j: usize) -> Option<AlignmentUnit> {
        let next = cx.reference_lower(i + 1)?;
        let remainder = cx.hypothesis_lower(j)?.strip_prefix(cx.reference_lower(i)?)?;
        if remainder.is_empty() {
            return None;
        }
        let distance = near_match(remainder, next)?;
        Some(cx.unit(UnitKind::CompoundMerge { distance }, i, 2, j, 1))
    }
}

/// One reference word heard as two: the reference word starts with
/// `hypothesis[j]` and the rest is `hypothesis[j + 1]` or close to it.
pub struct CompoundSplit;

impl AlignRule for CompoundSplit {
    fn name(&self) -> &'static str {
        "compound-split"
    }

    fn try_align(&self, cx: &AlignContext<'_>, i: usize, j: usize) -> Option<AlignmentUnit> {
        let next = cx.hypothesis_lower(j + 1)?;
        let remainder = cx.reference_lower(i)?.strip_prefix(cx.hypothesis_lower(j)?)?;
        if remainder.is_empty() {
            return None;
        }
        let distance = near_match(remainder, next)?;
        Some(cx.unit(UnitKind::CompoundSplit { distance }, i, 1, j, 2))
    }
}

/// Pair the two words one to one and let the classifier decide. Always
/// matches.
pub struct Classified;

impl AlignRule for Classified {
    fn name(&self) -> &'static str {
        "classified"
    }

    fn try_align(&self, cx: &AlignContext<'_>, i: usize, j: usize) -> Option<AlignmentUnit> {
        Some(classified_unit(cx, i, j))
    }
}

/// One-to-one unit with the classifier's verdict.
pub(super) fn classified_unit(cx: &AlignContext<'_>, i: usize, j: usize) -> AlignmentUnit {
    let classification = cx.classifier().explain(cx.reference()[i], cx.hypothesis()[j]);
    let kind = match classification {
        Classification::Exact => UnitKind::Correct { by: CorrectBy::Exact },
        Classification::Equivalent => UnitKind::Correct {
            by: CorrectBy::Equivalent,
        },
        other => UnitKind::Mismatch {
            severity: other.severity(),
        },
    };
    cx.unit(kind, i, 1, j, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleTable;
    use lausunta_core::enums::Severity;

    fn with_context<R>(
        reference: &[&str],
        hypothesis: &[&str],
        f: impl FnOnce(&AlignContext<'_>) -> R,
    ) -> R {
        let table = RuleTable::standard();
        let cx = AlignContext::new(reference, hypothesis, Classifier::new(&table));
        f(&cx)
    }

    #[test]
    fn exact_match_ignores_case() {
        with_context(&["Hyvää"], &["hyvää"], |cx| {
            let unit = ExactMatch.try_align(cx, 0, 0).unwrap();
            assert_eq!(unit.kind, UnitKind::Correct { by: CorrectBy::Exact });
            assert_eq!(unit.reference, vec!["Hyvää"]);
            assert_eq!(unit.hypothesis, vec!["hyvää"]);
        });
        with_context(&["Hyvää"], &["hyva"], |cx| {
            assert!(ExactMatch.try_align(cx, 0, 0).is_none());
        });
    }

    #[test]
    fn abbreviation_needs_uppercase_reference() {
        with_context(&["TV", "tv"], &["teevee", "teevee"], |cx| {
            assert!(Abbreviation.try_align(cx, 0, 0).is_some());
            assert!(Abbreviation.try_align(cx, 1, 1).is_none());
        });
    }

    #[test]
    fn merge_needs_a_following_reference_word() {
        with_context(&["totta"], &["tottakai"], |cx| {
            assert!(CompoundMerge.try_align(cx, 0, 0).is_none());
        });
    }

    #[test]
    fn merge_threshold_measured_on_second_reference_word() {
        // "kai" allows one edit
        with_context(&["totta", "kai"], &["tottakyy"], |cx| {
            assert!(CompoundMerge.try_align(cx, 0, 0).is_none());
        });
        // "hyllyllä" allows two
        with_context(&["maito", "hyllyllä"], &["maitohylylla"], |cx| {
            let unit = CompoundMerge.try_align(cx, 0, 0).unwrap();
            assert_eq!(unit.kind, UnitKind::CompoundMerge { distance: 2 });
        });
    }

    #[test]
    fn merge_is_case_insensitive() {
        with_context(&["Totta", "Kai"], &["tottakai"], |cx| {
            let unit = CompoundMerge.try_align(cx, 0, 0).unwrap();
            assert_eq!(unit.reference, vec!["Totta", "Kai"]);
        });
    }

    #[test]
    fn merge_requires_prefix() {
        with_context(&["totta", "kai"], &["tattakai"], |cx| {
            assert!(CompoundMerge.try_align(cx, 0, 0).is_none());
        });
    }

    #[test]
    fn split_needs_a_following_hypothesis_word() {
        with_context(&["maitohyllyllä"], &["maito"], |cx| {
            assert!(CompoundSplit.try_align(cx, 0, 0).is_none());
        });
    }

    #[test]
    fn split_rejects_distant_remainder() {
        with_context(&["maitohyllyllä"], &["maito", "kauppa"], |cx| {
            assert!(CompoundSplit.try_align(cx, 0, 0).is_none());
        });
    }

    #[test]
    fn classified_always_matches() {
        with_context(&["kalliit", "kissa"], &["kaliit", "koira"], |cx| {
            assert_eq!(
                Classified.try_align(cx, 0, 0).map(|u| u.kind),
                Some(UnitKind::Mismatch {
                    severity: Severity::Minor
                })
            );
            assert_eq!(
                Classified.try_align(cx, 1, 1).map(|u| u.kind),
                Some(UnitKind::Mismatch {
                    severity: Severity::Major
                })
            );
        });
    }
}
