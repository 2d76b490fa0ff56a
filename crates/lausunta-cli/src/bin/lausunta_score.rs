// lausunta-score: Score recognized transcripts against reference phrases.
//
// Scores a single pair given as arguments, or reads
// `reference<TAB>transcript` lines from stdin (one replica per line).
// With --level, the replicas are also judged as one training level.
//
// Usage:
//   lausunta-score [OPTIONS] [REFERENCE TRANSCRIPT]
//
// Set RUST_LOG=debug to see how each phrase was aligned.

use std::io::{self, BufRead, Write};

use clap::Parser;
use lausunta_score::progress::{LevelProgress, TrainingLevel};
use lausunta_score::{
    Assessment, HtmlMarkup, MarkdownMarkup, Markup, ScoreResult, ScoringEngine,
};

/// Score speech-recognition transcripts against reference phrases.
#[derive(Parser)]
#[command(name = "lausunta-score")]
struct Cli {
    /// Reference phrase. Without it, pairs are read from stdin as
    /// `reference<TAB>transcript` lines.
    reference: Option<String>,

    /// What the recognizer heard.
    #[arg(requires = "reference")]
    transcript: Option<String>,

    /// Rule table JSON file, or a directory containing rules.json.
    #[arg(long)]
    rules: Option<String>,

    /// Print one JSON assessment per pair.
    #[arg(long)]
    json: bool,

    /// Mark mistakes with HTML spans instead of Markdown.
    #[arg(long, conflicts_with = "json")]
    html: bool,

    /// Print the rule table in use as JSON and exit.
    #[arg(long)]
    print_rules: bool,

    /// Judge all pairs as the replicas of one level: replicas, dialogue
    /// or recall.
    #[arg(long, value_parser = lausunta_cli::parse_level)]
    level: Option<TrainingLevel>,

    /// Level threshold JSON file (defaults built in).
    #[arg(long, requires = "level")]
    thresholds: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let (rules, thresholds) =
        lausunta_cli::load_settings(cli.rules.as_deref(), cli.thresholds.as_deref())
            .unwrap_or_else(|e| lausunta_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.print_rules {
        match serde_json::to_string_pretty(&rules.to_raw()) {
            Ok(json) => {
                let _ = writeln!(out, "{json}");
            }
            Err(e) => eprintln!("error: {e}"),
        }
        return;
    }

    let engine = ScoringEngine::new(rules);
    let markup: &dyn Markup = if cli.html { &HtmlMarkup } else { &MarkdownMarkup };

    let mut results = Vec::new();
    let mut skipped = 0usize;

    match &cli.reference {
        Some(reference) => {
            let transcript = cli.transcript.as_deref().unwrap_or_default();
            let assessment = engine.assess_with(reference, transcript, markup);
            print_assessment(&mut out, &assessment, cli.json);
            results.push(assessment.score);
        }
        None => {
            for (n, line) in io::stdin().lock().lines().enumerate() {
                let line = match line {
                    Ok(l) => l,
                    Err(e) => {
                        eprintln!("error reading stdin: {e}");
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let Some((reference, transcript)) = lausunta_cli::parse_pair(&line) else {
                    log::warn!("line {}: no tab between reference and transcript", n + 1);
                    skipped += 1;
                    continue;
                };
                let assessment = engine.assess_with(reference, transcript, markup);
                print_assessment(&mut out, &assessment, cli.json);
                results.push(assessment.score);
            }
        }
    }

    if let Some(level) = cli.level {
        let progress = LevelProgress::from_results(&results, skipped == 0);
        let completed = thresholds.is_completed(level, &progress);
        let attempted = thresholds.is_attempted(level, &progress);
        print_progress(&mut out, level, &progress, completed, attempted, cli.json);
    }
}

fn print_assessment(out: &mut impl Write, assessment: &Assessment, json: bool) {
    if json {
        match serde_json::to_string(assessment) {
            Ok(line) => {
                let _ = writeln!(out, "{line}");
            }
            Err(e) => eprintln!("error: {e}"),
        }
        return;
    }
    let _ = writeln!(out, "{}", assessment.annotated);
    let _ = writeln!(out, "  {}", summary(&assessment.score));
}

fn summary(score: &ScoreResult) -> String {
    format!(
        "{}% ({} words: {} correct, {} minor, {} major; {} inserted)",
        score.accuracy,
        score.total_count,
        score.correct_count,
        score.minor_count,
        score.major_count,
        score.insertion_count
    )
}

fn print_progress(
    out: &mut impl Write,
    level: TrainingLevel,
    progress: &LevelProgress,
    completed: bool,
    attempted: bool,
    json: bool,
) {
    if json {
        let value = serde_json::json!({
            "level": level,
            "progress": progress,
            "averageAccuracy": progress.average_accuracy(),
            "completed": completed,
            "attempted": attempted,
        });
        let _ = writeln!(out, "{value}");
        return;
    }
    let average = progress
        .average_accuracy()
        .map_or_else(|| "-".to_string(), |a| format!("{a:.1}%"));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{level:?}: {} replicas, average {average}, {} errors",
        progress.replica_scores.len(),
        progress.total_errors.unwrap_or_default()
    );
    let _ = writeln!(
        out,
        "  completed: {}, attempted: {}",
        if completed { "yes" } else { "no" },
        if attempted { "yes" } else { "no" }
    );
}
