// ScoringEngine: owns a rule table and an alignment strategy and runs the
// whole pipeline (tokenize, align, score, render) behind one value.
//
// The engine holds no mutable state. Classifiers borrow the owned table
// per call, so one engine can be shared across threads.

use lausunta_core::token::Token;
use serde::Serialize;

use crate::alignment::{AlignStrategy, AlignmentUnit};
use crate::classifier::Classifier;
use crate::render::{HtmlMarkup, Markup, render_tokens};
use crate::rules::{RuleTable, RuleTableError};
use crate::scorer::ScoreResult;
use crate::tokenizer;

/// Everything one comparison produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub units: Vec<AlignmentUnit>,
    pub score: ScoreResult,
    pub annotated: String,
}

/// Reusable scorer bound to one rule table.
pub struct ScoringEngine {
    rules: RuleTable,
    strategy: AlignStrategy,
}

impl ScoringEngine {
    /// Engine with the default align rule order.
    pub fn new(rules: RuleTable) -> Self {
        Self::with_strategy(rules, AlignStrategy::default())
    }

    pub fn with_strategy(rules: RuleTable, strategy: AlignStrategy) -> Self {
        Self { rules, strategy }
    }

    /// Engine over a JSON rule table.
    pub fn from_json_str(json: &str) -> Result<Self, RuleTableError> {
        Ok(Self::new(RuleTable::from_json_str(json)?))
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn strategy(&self) -> &AlignStrategy {
        &self.strategy
    }

    fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.rules)
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenizer::tokenize(text)
    }

    /// Align the words of `hypothesis` with the words of `reference`.
    pub fn align(&self, reference: &str, hypothesis: &str) -> Vec<AlignmentUnit> {
        let tokens = tokenizer::tokenize(reference);
        self.strategy.align_text(&tokens, hypothesis, &self.classifier())
    }

    pub fn score(&self, reference: &str, hypothesis: &str) -> ScoreResult {
        ScoreResult::from_units(&self.align(reference, hypothesis))
    }

    /// Annotated reference with the default HTML markup.
    pub fn render_annotated(&self, reference: &str, hypothesis: &str) -> String {
        self.render_with(reference, hypothesis, &HtmlMarkup)
    }

    pub fn render_with(&self, reference: &str, hypothesis: &str, markup: &dyn Markup) -> String {
        let tokens = tokenizer::tokenize(reference);
        let units = self.strategy.align_text(&tokens, hypothesis, &self.classifier());
        render_tokens(&tokens, &units, markup)
    }

    /// Align once and return the units, the score and the annotated text.
    pub fn assess(&self, reference: &str, hypothesis: &str) -> Assessment {
        self.assess_with(reference, hypothesis, &HtmlMarkup)
    }

    pub fn assess_with(
        &self,
        reference: &str,
        hypothesis: &str,
        markup: &dyn Markup,
    ) -> Assessment {
        let tokens = tokenizer::tokenize(reference);
        let units = self.strategy.align_text(&tokens, hypothesis, &self.classifier());
        let score = ScoreResult::from_units(&units);
        let annotated = render_tokens(&tokens, &units, markup);
        log::debug!(
            "assessed {} words ({} correct, {} minor, {} major, {} inserted): {}%",
            score.total_count,
            score.correct_count,
            score.minor_count,
            score.major_count,
            score.insertion_count,
            score.accuracy
        );
        Assessment {
            units,
            score,
            annotated,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(RuleTable::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::rules::{Classified, ExactMatch};
    use crate::alignment::{AlignRule, UnitKind};
    use crate::render::MarkdownMarkup;

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoringEngine>();
    }

    #[test]
    fn assess_matches_separate_calls() {
        let engine = ScoringEngine::default();
        let reference = "Kiitos, totta kai!";
        let hypothesis = "kiitoz tottakai joo";
        let assessment = engine.assess(reference, hypothesis);
        assert_eq!(assessment.units, engine.align(reference, hypothesis));
        assert_eq!(assessment.score, engine.score(reference, hypothesis));
        assert_eq!(
            assessment.annotated,
            engine.render_annotated(reference, hypothesis)
        );
        assert_eq!(assessment.score.insertion_count, 1);
    }

    #[test]
    fn engine_agrees_with_free_functions() {
        let rules = RuleTable::standard();
        let engine = ScoringEngine::new(rules.clone());
        let (reference, hypothesis) = ("Hyvää huomenta", "hyva huomenta");
        assert_eq!(
            engine.score(reference, hypothesis),
            crate::score(reference, hypothesis, &rules)
        );
        assert_eq!(
            engine.render_annotated(reference, hypothesis),
            crate::render_annotated(reference, hypothesis, &rules)
        );
    }

    #[test]
    fn custom_strategy_is_used() {
        let rules: Vec<Box<dyn AlignRule>> = vec![Box::new(ExactMatch), Box::new(Classified)];
        let engine =
            ScoringEngine::with_strategy(RuleTable::standard(), AlignStrategy::new(rules));
        let units = engine.align("totta kai", "tottakai");
        assert_eq!(units.len(), 2);
        assert_eq!(units[1].kind, UnitKind::Deletion);
    }

    #[test]
    fn markdown_rendering() {
        let engine = ScoringEngine::default();
        assert_eq!(
            engine.render_with("Kiitos paljon", "kiitus", &MarkdownMarkup),
            "**Kiitus** ~~paljon~~"
        );
    }

    #[test]
    fn rules_from_json() {
        let engine = ScoringEngine::from_json_str(r#"{ "equivalents": { "ä": ["a"] } }"#).unwrap();
        assert_eq!(engine.score("mämmi", "mammi").accuracy, 100);
        assert_eq!(engine.score("kalliit", "kaliit").accuracy, 0);
        assert!(ScoringEngine::from_json_str("{").is_err());
    }
}
