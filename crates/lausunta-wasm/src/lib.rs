// WASM bindings for the Lausunta transcript scorer.
//
// Provides a `WasmScorer` class exported via wasm-bindgen that wraps the
// `ScoringEngine` from lausunta-score. Structured results (scores,
// alignments, tokens, level status) are handed to JavaScript through
// serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const scorer = new WasmScorer();            // built-in rule table
//   const german = new WasmScorer(rulesJson);   // custom rule table
//   scorer.score("Kiitos", "kiitos paljon");    // => { accuracy: 100, ... }
//   scorer.renderAnnotated("Kiitos", "kiitoz"); // => "<span ...>Kiitoz</span>"
//   scorer.assess("Totta kai", "tottakai");     // => { units, score, annotated }
//   scorer.levelStatus("dialogue", [90, 85], null, true);
//                                               // => { completed: true, ... }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use lausunta_score::progress::{LevelProgress, ProgressThresholds, TrainingLevel};
use lausunta_score::{MarkdownMarkup, RuleTable, ScoringEngine};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Completion verdict for one training level.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLevelStatus {
    completed: bool,
    attempted: bool,
    average_accuracy: Option<f64>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

// Maps become plain objects, so results survive `JSON.stringify`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// The rule table as the JSON text the constructor accepts.
fn rules_json(engine: &ScoringEngine) -> Result<String, serde_json::Error> {
    serde_json::to_string(&engine.rules().to_raw())
}

fn level_status(
    thresholds: &ProgressThresholds,
    level: TrainingLevel,
    progress: &LevelProgress,
) -> JsLevelStatus {
    JsLevelStatus {
        completed: thresholds.is_completed(level, progress),
        attempted: thresholds.is_attempted(level, progress),
        average_accuracy: progress.average_accuracy(),
    }
}

// ============================================================================
// WasmScorer
// ============================================================================

/// Transcript scorer for WebAssembly.
///
/// Scores what a speech recognizer heard against the phrase the learner
/// was asked to say, and renders the phrase with mistakes marked.
#[wasm_bindgen]
pub struct WasmScorer {
    engine: ScoringEngine,
    thresholds: ProgressThresholds,
}

#[wasm_bindgen]
impl WasmScorer {
    /// Create a scorer.
    ///
    /// - `rules_json`: rule table as JSON (optional; the built-in standard
    ///   table is used when absent)
    #[wasm_bindgen(constructor)]
    pub fn new(rules_json: Option<String>) -> Result<WasmScorer, JsError> {
        let rules = match rules_json {
            Some(json) => {
                RuleTable::from_json_str(&json).map_err(|e| JsError::new(&e.to_string()))?
            }
            None => RuleTable::standard(),
        };
        Ok(WasmScorer {
            engine: ScoringEngine::new(rules),
            thresholds: ProgressThresholds::default(),
        })
    }

    /// Score a transcript.
    ///
    /// Returns an object with fields `accuracy`, `correctCount`,
    /// `minorCount`, `majorCount`, `totalCount`, `insertionCount`.
    pub fn score(&self, reference: &str, hypothesis: &str) -> Result<JsValue, JsError> {
        to_js(&self.engine.score(reference, hypothesis))
    }

    /// Accuracy percentage only.
    pub fn accuracy(&self, reference: &str, hypothesis: &str) -> u8 {
        self.engine.score(reference, hypothesis).accuracy
    }

    /// The reference with mistakes wrapped in coloured `<span>` elements.
    #[wasm_bindgen(js_name = "renderAnnotated")]
    pub fn render_annotated(&self, reference: &str, hypothesis: &str) -> String {
        self.engine.render_annotated(reference, hypothesis)
    }

    /// The reference with mistakes marked in Markdown.
    #[wasm_bindgen(js_name = "renderMarkdown")]
    pub fn render_markdown(&self, reference: &str, hypothesis: &str) -> String {
        self.engine.render_with(reference, hypothesis, &MarkdownMarkup)
    }

    /// Align once and return `{ units, score, annotated }`.
    ///
    /// Each unit has `kind` ("correct", "mismatch", "insertion",
    /// "deletion", "compoundMerge", "compoundSplit"), `reference` and
    /// `hypothesis` word arrays, plus `by`, `severity` or `distance`
    /// depending on the kind.
    pub fn assess(&self, reference: &str, hypothesis: &str) -> Result<JsValue, JsError> {
        to_js(&self.engine.assess(reference, hypothesis))
    }

    /// Tokenize a reference phrase.
    ///
    /// Returns an array of `{ kind, text, tokenLen, pos }` objects.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.engine.tokenize(text))
    }

    /// The lowercase words a transcript is reduced to.
    pub fn words(&self, text: &str) -> js_sys::Array {
        lausunta_score::tokenizer::words_of(text)
            .iter()
            .map(|w| JsValue::from_str(w))
            .collect()
    }

    /// The rule table in use, as JSON text that `new WasmScorer(...)`
    /// accepts.
    pub fn rules(&self) -> Result<String, JsError> {
        rules_json(&self.engine).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Replace the level thresholds with a JSON document. Missing sections
    /// keep their defaults.
    #[wasm_bindgen(js_name = "setThresholds")]
    pub fn set_thresholds(&mut self, json: JsValue) -> Result<(), JsError> {
        self.thresholds =
            serde_wasm_bindgen::from_value(json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(())
    }

    /// Judge a training level from its replica scores.
    ///
    /// - `level`: "replicas", "dialogue", "recall" (or "level2".."level4")
    /// - `replica_scores`: accuracy of each replica
    /// - `total_errors`: mistakes over the level (needed for recall)
    /// - `all_replicas_completed`: whether every replica was spoken
    ///
    /// Returns `{ completed, attempted, averageAccuracy }`.
    #[wasm_bindgen(js_name = "levelStatus")]
    pub fn level_status(
        &self,
        level: JsValue,
        replica_scores: Vec<u8>,
        total_errors: Option<usize>,
        all_replicas_completed: bool,
    ) -> Result<JsValue, JsError> {
        let level: TrainingLevel =
            serde_wasm_bindgen::from_value(level).map_err(|e| JsError::new(&e.to_string()))?;
        let progress = LevelProgress {
            replica_scores,
            total_errors,
            all_replicas_completed,
        };
        to_js(&level_status(&self.thresholds, level, &progress))
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_status_reports_average() {
        let progress = LevelProgress {
            replica_scores: vec![90, 80],
            total_errors: None,
            all_replicas_completed: true,
        };
        let status = level_status(
            &ProgressThresholds::default(),
            TrainingLevel::Dialogue,
            &progress,
        );
        assert_eq!(
            status,
            JsLevelStatus {
                completed: true,
                attempted: true,
                average_accuracy: Some(85.0),
            }
        );
    }

    #[test]
    fn rules_json_feeds_the_constructor() {
        let engine = ScoringEngine::default();
        let json = rules_json(&engine).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["equivalents"].is_object());
        assert_eq!(value["equivalents"]["ä"], serde_json::json!(["a", "ae"]));

        let reloaded = RuleTable::from_json_str(&json).unwrap();
        assert_eq!(&reloaded, engine.rules());
        assert_eq!(ScoringEngine::new(reloaded).score("mämmi", "mammi").accuracy, 100);
    }

    #[test]
    fn listening_status_is_never_set() {
        let status = level_status(
            &ProgressThresholds::default(),
            TrainingLevel::Listening,
            &LevelProgress::default(),
        );
        assert!(!status.completed);
        assert!(!status.attempted);
        assert_eq!(status.average_accuracy, None);
    }
}
