// Scorer: turns an alignment into accuracy and per-severity word counts.

use lausunta_core::enums::Severity;
use serde::Serialize;

use crate::alignment::{AlignmentUnit, default_strategy};
use crate::classifier::{Classifier, accuracy};
use crate::rules::RuleTable;
use crate::tokenizer::tokenize;

/// Outcome of scoring one transcript against its reference.
///
/// Counts are per reference word: a compound merge contributes two correct
/// words, a compound split one. Recognized words with no reference
/// counterpart are reported in `insertion_count` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Rounded percentage, 0..=100.
    pub accuracy: u8,
    pub correct_count: usize,
    pub minor_count: usize,
    pub major_count: usize,
    /// Number of reference words; equals correct + minor + major.
    pub total_count: usize,
    pub insertion_count: usize,
}

impl ScoreResult {
    /// Tally an alignment.
    pub fn from_units(units: &[AlignmentUnit]) -> Self {
        let mut result = ScoreResult::default();
        for unit in units {
            if unit.is_insertion() {
                result.insertion_count += unit.hypothesis.len();
                continue;
            }
            for severity in unit.word_severities() {
                match severity {
                    Severity::Correct => result.correct_count += 1,
                    Severity::Minor => result.minor_count += 1,
                    Severity::Major => result.major_count += 1,
                }
                result.total_count += 1;
            }
        }
        result.accuracy = accuracy(units.iter().flat_map(|u| u.word_severities()));
        result
    }

    /// Minor and major mistakes together.
    pub fn error_count(&self) -> usize {
        self.minor_count + self.major_count
    }
}

/// Score a recognized transcript against a reference phrase.
pub fn score(reference: &str, hypothesis: &str, rules: &RuleTable) -> ScoreResult {
    let tokens = tokenize(reference);
    let units = default_strategy().align_text(&tokens, hypothesis, &Classifier::new(rules));
    let result = ScoreResult::from_units(&units);
    log::debug!(
        "scored {} words, {} inserted: {}%",
        result.total_count,
        result.insertion_count,
        result.accuracy
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{CorrectBy, UnitKind};

    fn unit(kind: UnitKind, reference: &[&str], hypothesis: &[&str]) -> AlignmentUnit {
        AlignmentUnit::new(
            kind,
            reference.iter().map(|w| w.to_string()).collect(),
            hypothesis.iter().map(|w| w.to_string()).collect(),
        )
    }

    #[test]
    fn tally_counts_reference_words() {
        let units = vec![
            unit(
                UnitKind::CompoundMerge { distance: 0 },
                &["totta", "kai"],
                &["tottakai"],
            ),
            unit(
                UnitKind::Mismatch {
                    severity: Severity::Minor,
                },
                &["kalliit"],
                &["kaliit"],
            ),
            unit(UnitKind::Deletion, &["nyt"], &[]),
            unit(UnitKind::Insertion, &[], &["joo"]),
        ];
        let result = ScoreResult::from_units(&units);
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.minor_count, 1);
        assert_eq!(result.major_count, 1);
        assert_eq!(result.total_count, 4);
        assert_eq!(result.insertion_count, 1);
        // (100 + 100 + 80 + 0) / 4 = 70
        assert_eq!(result.accuracy, 70);
        assert_eq!(result.error_count(), 2);
    }

    #[test]
    fn split_counts_one_word() {
        let units = vec![unit(
            UnitKind::CompoundSplit { distance: 0 },
            &["maitohyllyllä"],
            &["maito", "hyllyllä"],
        )];
        let result = ScoreResult::from_units(&units);
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.total_count, 1);
        assert_eq!(result.accuracy, 100);
    }

    #[test]
    fn empty_alignment() {
        assert_eq!(ScoreResult::from_units(&[]), ScoreResult::default());
    }

    #[test]
    fn insertions_do_not_lower_accuracy() {
        let units = vec![
            unit(UnitKind::Correct { by: CorrectBy::Exact }, &["Kiitos"], &["kiitos"]),
            unit(UnitKind::Insertion, &[], &["paljon"]),
        ];
        let result = ScoreResult::from_units(&units);
        assert_eq!(result.accuracy, 100);
        assert_eq!(result.total_count, 1);
        assert_eq!(result.insertion_count, 1);
    }

    #[test]
    fn score_ignores_transcript_punctuation() {
        let rules = RuleTable::standard();
        let result = score("Hyvää huomenta!", "hyvää, huomenta.", &rules);
        assert_eq!(result.accuracy, 100);
        assert_eq!(result.total_count, 2);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(ScoreResult::default()).unwrap();
        assert_eq!(json["correctCount"], 0);
        assert_eq!(json["insertionCount"], 0);
    }
}
