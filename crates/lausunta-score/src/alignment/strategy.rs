// Alignment strategy: the greedy scan loop over an ordered rule list.

use lausunta_core::token::Token;

use crate::classifier::Classifier;
use crate::tokenizer::{reference_words, words_of};

use super::rules::{
    Abbreviation, AlignContext, AlignRule, Classified, CompoundMerge, CompoundSplit, ExactMatch,
    classified_unit,
};
use super::{AlignmentUnit, UnitKind};

/// An ordered list of align rules. At each position the first rule that
/// returns a unit wins.
pub struct AlignStrategy {
    rules: Vec<Box<dyn AlignRule>>,
}

impl AlignStrategy {
    pub fn new(rules: Vec<Box<dyn AlignRule>>) -> Self {
        Self { rules }
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Walk both sequences left to right and emit one unit per step.
    ///
    /// Recognized words left after the reference is exhausted become
    /// insertions. Reference words left after the recognized words run out
    /// become deletions. When no rule matches, the pair is classified one to
    /// one so the scan always advances.
    pub fn align(
        &self,
        reference: &[&str],
        hypothesis: &[&str],
        classifier: &Classifier<'_>,
    ) -> Vec<AlignmentUnit> {
        let cx = AlignContext::new(reference, hypothesis, *classifier);
        let (n, m) = (reference.len(), hypothesis.len());
        let mut units = Vec::with_capacity(n.max(m));
        let (mut i, mut j) = (0, 0);

        while i < n || j < m {
            let unit = if i >= n {
                cx.unit(UnitKind::Insertion, i, 0, j, 1)
            } else if j >= m {
                cx.unit(UnitKind::Deletion, i, 1, j, 0)
            } else {
                self.step(&cx, i, j)
            };
            i += unit.reference.len();
            j += unit.hypothesis.len();
            units.push(unit);
        }
        units
    }

    /// Align the word tokens of a tokenized reference with the words of a
    /// raw transcript.
    pub fn align_text(
        &self,
        reference: &[Token],
        hypothesis: &str,
        classifier: &Classifier<'_>,
    ) -> Vec<AlignmentUnit> {
        let words = words_of(hypothesis);
        let hypothesis: Vec<&str> = words.iter().map(String::as_str).collect();
        self.align(&reference_words(reference), &hypothesis, classifier)
    }

    fn step(&self, cx: &AlignContext<'_>, i: usize, j: usize) -> AlignmentUnit {
        for rule in &self.rules {
            let Some(unit) = rule.try_align(cx, i, j) else {
                continue;
            };
            if unit.reference.is_empty() || unit.hypothesis.is_empty() {
                log::warn!("align rule {} returned an empty side; ignored", rule.name());
                continue;
            }
            log::trace!(
                "{} at ({i}, {j}): {:?} <- {:?}",
                rule.name(),
                unit.reference,
                unit.hypothesis
            );
            return unit;
        }
        classified_unit(cx, i, j)
    }
}

impl Default for AlignStrategy {
    fn default() -> Self {
        default_strategy()
    }
}

/// The standard rule order: exact match, abbreviation, compound merge,
/// compound split, then the word-pair classifier.
pub fn default_strategy() -> AlignStrategy {
    let rules: Vec<Box<dyn AlignRule>> = vec![
        Box::new(ExactMatch),
        Box::new(Abbreviation),
        Box::new(CompoundMerge),
        Box::new(CompoundSplit),
        Box::new(Classified),
    ];
    AlignStrategy::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::CorrectBy;
    use crate::rules::RuleTable;
    use lausunta_core::enums::Severity;

    #[test]
    fn default_rule_order() {
        assert_eq!(
            default_strategy().rule_names(),
            vec![
                "exact",
                "abbreviation",
                "compound-merge",
                "compound-split",
                "classified"
            ]
        );
    }

    #[test]
    fn abbreviation_wins_over_split() {
        let table = RuleTable::standard();
        let c = Classifier::new(&table);
        let units = default_strategy().align(&["USA"], &["us", "a"], &c);
        assert_eq!(
            units.iter().map(|u| u.kind).collect::<Vec<_>>(),
            vec![
                UnitKind::Correct {
                    by: CorrectBy::Abbreviation
                },
                UnitKind::Insertion
            ]
        );
    }

    #[test]
    fn without_compound_rules_merges_become_mismatches() {
        let table = RuleTable::standard();
        let c = Classifier::new(&table);
        let rules: Vec<Box<dyn AlignRule>> = vec![Box::new(ExactMatch), Box::new(Classified)];
        let strategy = AlignStrategy::new(rules);
        let units = strategy.align(&["totta", "kai"], &["tottakai"], &c);
        assert_eq!(
            units.iter().map(|u| u.kind).collect::<Vec<_>>(),
            vec![
                UnitKind::Mismatch {
                    severity: Severity::Major
                },
                UnitKind::Deletion
            ]
        );
    }

    #[test]
    fn empty_strategy_still_advances() {
        let table = RuleTable::standard();
        let c = Classifier::new(&table);
        let strategy = AlignStrategy::new(Vec::new());
        let units = strategy.align(&["kissa", "koira"], &["kissa", "kaira"], &c);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].kind, UnitKind::Correct { by: CorrectBy::Exact });
        assert_eq!(
            units[1].kind,
            UnitKind::Mismatch {
                severity: Severity::Major
            }
        );
    }

    struct Greedy;

    impl AlignRule for Greedy {
        fn name(&self) -> &'static str {
            "greedy"
        }

        fn try_align(&self, cx: &AlignContext<'_>, i: usize, j: usize) -> Option<AlignmentUnit> {
            Some(cx.unit(UnitKind::Insertion, i, 0, j, 1))
        }
    }

    #[test]
    fn units_with_an_empty_side_are_ignored() {
        let table = RuleTable::standard();
        let c = Classifier::new(&table);
        let rules: Vec<Box<dyn AlignRule>> = vec![Box::new(Greedy), Box::new(ExactMatch)];
        let strategy = AlignStrategy::new(rules);
        let units = strategy.align(&["kissa"], &["kissa"], &c);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].kind, UnitKind::Correct { by: CorrectBy::Exact });
    }
}
