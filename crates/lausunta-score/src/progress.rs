// Level progress: decides from per-replica scores whether a training level
// counts as completed, or at least attempted.

use serde::{Deserialize, Serialize};

use crate::scorer::ScoreResult;

/// Training levels of a dialogue, in the order a learner meets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrainingLevel {
    /// Level 1: listen only. Never completed nor attempted.
    #[serde(alias = "level1")]
    Listening,
    /// Level 2: repeat single replicas.
    #[serde(alias = "level2")]
    Replicas,
    /// Level 3: speak one side of the dialogue.
    #[serde(alias = "level3")]
    Dialogue,
    /// Level 4: recall the dialogue without prompts.
    #[serde(alias = "level4")]
    Recall,
}

/// What a learner achieved on one level of one dialogue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelProgress {
    /// Accuracy of each replica, in order.
    pub replica_scores: Vec<u8>,
    /// Mistakes over the whole level; `None` when not tracked.
    pub total_errors: Option<usize>,
    /// Whether every replica of the dialogue was spoken.
    pub all_replicas_completed: bool,
}

impl LevelProgress {
    /// Collect progress from the score of each replica.
    pub fn from_results(results: &[ScoreResult], all_replicas_completed: bool) -> Self {
        Self {
            replica_scores: results.iter().map(|r| r.accuracy).collect(),
            total_errors: Some(results.iter().map(ScoreResult::error_count).sum()),
            all_replicas_completed,
        }
    }

    /// Mean replica accuracy, or `None` without replicas.
    pub fn average_accuracy(&self) -> Option<f64> {
        if self.replica_scores.is_empty() {
            return None;
        }
        let sum: u32 = self.replica_scores.iter().map(|&s| u32::from(s)).sum();
        Some(f64::from(sum) / self.replica_scores.len() as f64)
    }
}

/// Accuracy bar for levels scored per replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyThreshold {
    /// Every replica must reach this.
    pub min_replica_accuracy: u8,
    /// The average must reach this.
    #[serde(alias = "minDialogAccuracy")]
    pub min_dialogue_accuracy: u8,
}

/// Average accuracy that must be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageThreshold {
    pub min_average_accuracy: u8,
}

/// Mistake budget for the recall level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorThreshold {
    pub max_allowed_errors: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionThresholds {
    #[serde(alias = "level2")]
    pub replicas: AccuracyThreshold,
    #[serde(alias = "level3")]
    pub dialogue: AccuracyThreshold,
    #[serde(alias = "level4")]
    pub recall: ErrorThreshold,
}

impl Default for CompletionThresholds {
    fn default() -> Self {
        Self {
            replicas: AccuracyThreshold {
                min_replica_accuracy: 85,
                min_dialogue_accuracy: 90,
            },
            dialogue: AccuracyThreshold {
                min_replica_accuracy: 80,
                min_dialogue_accuracy: 80,
            },
            recall: ErrorThreshold {
                max_allowed_errors: 1,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttemptThresholds {
    #[serde(alias = "level2")]
    pub replicas: AverageThreshold,
    #[serde(alias = "level3")]
    pub dialogue: AverageThreshold,
    #[serde(alias = "level4")]
    pub recall: ErrorThreshold,
}

impl Default for AttemptThresholds {
    fn default() -> Self {
        Self {
            replicas: AverageThreshold {
                min_average_accuracy: 50,
            },
            dialogue: AverageThreshold {
                min_average_accuracy: 50,
            },
            recall: ErrorThreshold {
                max_allowed_errors: 6,
            },
        }
    }
}

/// Level completion and attempt thresholds.
///
/// Loadable from JSON; missing sections keep their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressThresholds {
    pub completion: CompletionThresholds,
    pub attempted: AttemptThresholds,
}

impl ProgressThresholds {
    /// Whether `progress` completes `level`.
    pub fn is_completed(&self, level: TrainingLevel, progress: &LevelProgress) -> bool {
        match level {
            TrainingLevel::Listening => false,
            TrainingLevel::Replicas => passes(&self.completion.replicas, progress),
            TrainingLevel::Dialogue => passes(&self.completion.dialogue, progress),
            TrainingLevel::Recall => progress
                .total_errors
                .is_some_and(|e| e <= self.completion.recall.max_allowed_errors),
        }
    }

    /// Whether `progress` counts as a real attempt at `level`.
    pub fn is_attempted(&self, level: TrainingLevel, progress: &LevelProgress) -> bool {
        match level {
            TrainingLevel::Listening => false,
            TrainingLevel::Replicas => exceeds(&self.attempted.replicas, progress),
            TrainingLevel::Dialogue => exceeds(&self.attempted.dialogue, progress),
            TrainingLevel::Recall => {
                progress.all_replicas_completed
                    && progress
                        .total_errors
                        .is_some_and(|e| e <= self.attempted.recall.max_allowed_errors)
            }
        }
    }
}

fn passes(threshold: &AccuracyThreshold, progress: &LevelProgress) -> bool {
    let Some(average) = progress.average_accuracy() else {
        return false;
    };
    progress
        .replica_scores
        .iter()
        .all(|&s| s >= threshold.min_replica_accuracy)
        && average >= f64::from(threshold.min_dialogue_accuracy)
}

fn exceeds(threshold: &AverageThreshold, progress: &LevelProgress) -> bool {
    progress
        .average_accuracy()
        .is_some_and(|a| a > f64::from(threshold.min_average_accuracy))
}

/// [`ProgressThresholds::is_completed`] with the default thresholds.
pub fn is_completed(level: TrainingLevel, progress: &LevelProgress) -> bool {
    ProgressThresholds::default().is_completed(level, progress)
}

/// [`ProgressThresholds::is_attempted`] with the default thresholds.
pub fn is_attempted(level: TrainingLevel, progress: &LevelProgress) -> bool {
    ProgressThresholds::default().is_attempted(level, progress)
}
