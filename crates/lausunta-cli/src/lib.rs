// lausunta-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use lausunta_score::RuleTable;
use lausunta_score::progress::{ProgressThresholds, TrainingLevel};

/// Rule table file name looked up in each search directory.
const RULES_FILE: &str = "rules.json";

/// Environment variable naming a rule table file or a directory holding one.
const RULES_ENV: &str = "LAUSUNTA_RULES";

/// Load the rule table to score with.
///
/// Search order:
/// 1. `rules_path` argument (if provided; must exist)
/// 2. `LAUSUNTA_RULES` environment variable
/// 3. `~/.lausunta/rules.json`
/// 4. `/etc/lausunta/rules.json`, `/usr/share/lausunta/rules.json`
/// 5. the built-in standard table
pub fn load_rules(rules_path: Option<&str>) -> Result<RuleTable, String> {
    if let Some(p) = rules_path {
        let path = resolve_rules_file(Path::new(p))
            .ok_or_else(|| format!("rule table not found: {p}"))?;
        return read_rules(&path);
    }

    let env_path = std::env::var(RULES_ENV).ok();
    for path in search_paths(env_path.as_deref(), home_dir().as_deref()) {
        if path.is_file() {
            return read_rules(&path);
        }
    }

    log::debug!("no rule table file found; using the standard table");
    Ok(RuleTable::standard())
}

/// Candidate rule table files, in search order, excluding the explicit
/// argument.
pub fn search_paths(env_path: Option<&str>, home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = env_path {
        let p = PathBuf::from(p);
        paths.push(p.join(RULES_FILE));
        paths.push(p);
    }

    if let Some(home) = home {
        paths.push(home.join(".lausunta").join(RULES_FILE));
    }

    paths.push(PathBuf::from("/etc/lausunta").join(RULES_FILE));
    paths.push(PathBuf::from("/usr/share/lausunta").join(RULES_FILE));

    paths
}

/// A rule table file given directly or as the directory containing it.
fn resolve_rules_file(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    let inner = path.join(RULES_FILE);
    inner.is_file().then_some(inner)
}

fn read_rules(path: &Path) -> Result<RuleTable, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let table = RuleTable::from_json_str(&json)
        .map_err(|e| format!("invalid rule table {}: {}", path.display(), e))?;
    log::info!("loaded rule table from {}", path.display());
    Ok(table)
}

/// Load level thresholds from a JSON file, or the defaults.
pub fn load_thresholds(path: Option<&str>) -> Result<ProgressThresholds, String> {
    let Some(p) = path else {
        return Ok(ProgressThresholds::default());
    };
    let json =
        std::fs::read_to_string(p).map_err(|e| format!("failed to read {p}: {e}"))?;
    serde_json::from_str(&json).map_err(|e| format!("invalid thresholds {p}: {e}"))
}

/// Load the rule table and the level thresholds before any input is read.
pub fn load_settings(
    rules_path: Option<&str>,
    thresholds_path: Option<&str>,
) -> Result<(RuleTable, ProgressThresholds), String> {
    let rules = load_rules(rules_path)?;
    let thresholds = load_thresholds(thresholds_path)?;
    Ok((rules, thresholds))
}

/// Parse a training level name: `replicas`, `dialogue`, `recall`,
/// `listening`, or the numbered form `level1`..`level4`.
pub fn parse_level(name: &str) -> Result<TrainingLevel, String> {
    serde_json::from_value(serde_json::Value::String(name.to_ascii_lowercase()))
        .map_err(|_| format!("unknown training level: {name}"))
}

/// Split a `reference<TAB>transcript` input line.
///
/// Returns `None` for lines without a tab.
pub fn parse_pair(line: &str) -> Option<(&str, &str)> {
    let (reference, transcript) = line.split_once('\t')?;
    Some((reference.trim(), transcript.trim()))
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Render text on one line, with control characters escaped.
pub fn escape_control(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
