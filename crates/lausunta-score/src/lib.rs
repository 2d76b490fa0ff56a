//! Transcript scoring for pronunciation training.
//!
//! Compares what a speech recognizer heard with the phrase the learner was
//! asked to say and produces an accuracy score plus an annotated copy of the
//! phrase.
//!
//! - [`tokenizer`] -- lossless reference tokens and transcript words
//! - [`rules`] -- the per-language [`RuleTable`] (equivalences, doubled
//!   letters, voicing pairs), built in or loaded from JSON
//! - [`classifier`] -- correct / minor / major decision for one word pair
//! - [`alignment`] -- greedy word alignment driven by ordered align rules
//! - [`scorer`] -- [`ScoreResult`] from an alignment
//! - [`render`] -- annotated reference text (HTML or Markdown)
//! - [`engine`] -- [`ScoringEngine`], the whole pipeline behind one value
//! - [`progress`] -- level completion thresholds over replica scores
//!
//! ```
//! use lausunta_score::{RuleTable, score};
//!
//! let rules = RuleTable::standard();
//! let result = score("Kiitos paljon", "kiitos paljon", &rules);
//! assert_eq!(result.accuracy, 100);
//! ```

pub mod alignment;
pub mod classifier;
pub mod engine;
pub mod progress;
pub mod render;
pub mod rules;
pub mod scorer;
pub mod tokenizer;

pub use alignment::{AlignmentUnit, CorrectBy, UnitKind, align};
pub use classifier::Classifier;
pub use engine::{Assessment, ScoringEngine};
pub use render::{HtmlMarkup, MarkdownMarkup, Markup, render_annotated};
pub use rules::{RuleTable, RuleTableError};
pub use scorer::{ScoreResult, score};
