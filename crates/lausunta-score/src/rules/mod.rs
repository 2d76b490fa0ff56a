// Classification rule table: diacritic equivalences, doubled letters and
// voicing pairs for one learning language.
//
// A `RuleTable` is built once (from the built-in values or from JSON),
// validated, and then only read. It is handed to the classifier by
// reference, so several tables can live side by side.

mod standard;

use std::collections::BTreeMap;

use hashbrown::{HashMap, HashSet};
use lausunta_core::character::{is_letter, is_upper};
use serde::{Deserialize, Serialize};

/// Error raised when a rule table is malformed.
///
/// Every variant is an invalid configuration; it is reported when the table
/// is loaded, never while scoring.
#[derive(Debug, thiserror::Error)]
pub enum RuleTableError {
    /// The JSON document could not be parsed.
    #[error("malformed rule table JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An equivalence key is not exactly one lowercase letter.
    #[error("equivalence key {key:?} must be a single lowercase letter")]
    InvalidEquivalenceKey { key: String },

    /// An equivalence has no replacements, or an empty one.
    #[error("equivalence for {key:?} needs at least one non-empty replacement")]
    EmptyReplacement { key: char },

    /// A doubled-letter entry is not one lowercase letter written twice.
    #[error("doubled-letter entry {entry:?} is not a lowercase letter written twice")]
    NotDoubled { entry: String },

    /// A voicing pair is not two different lowercase letters.
    #[error("voicing pair ({0:?}, {1:?}) must be two different lowercase letters")]
    InvalidVoicingPair(String, String),
}

/// Doubled-letter lists as they appear in configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDoubles {
    #[serde(default)]
    pub consonants: Vec<String>,
    #[serde(default)]
    pub vowels: Vec<String>,
}

/// Unvalidated rule table, the serde form of [`RuleTable`].
///
/// ```json
/// {
///   "equivalents": { "ä": ["a", "ae"], "ß": ["ss"] },
///   "doubles": { "consonants": ["kk", "ll"], "vowels": ["aa"] },
///   "voicing": [["d", "t"], ["b", "p"]]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRuleTable {
    #[serde(default)]
    pub equivalents: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub doubles: RawDoubles,
    #[serde(default)]
    pub voicing: Vec<(String, String)>,
}

/// Immutable classification rules for one learning language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    /// Source letter -> replacements; the first replacement is canonical.
    equivalents: HashMap<char, Vec<String>>,
    /// Consonants listed as doubled letters, in configuration order.
    consonant_doubles: Vec<char>,
    /// Vowels listed as doubled letters, in configuration order.
    vowel_doubles: Vec<char>,
    /// Union of both lists for lookups.
    doubled: HashSet<char>,
    /// Voiced / voiceless pairs.
    voicing: Vec<(char, char)>,
}

impl RuleTable {
    /// The built-in table used by the trainer for every language it ships.
    pub fn standard() -> Self {
        let equivalents = standard::EQUIVALENTS
            .iter()
            .map(|&(c, reps)| (c, reps.iter().map(|r| r.to_string()).collect()))
            .collect();
        Self::from_parts(
            equivalents,
            standard::CONSONANT_DOUBLES.to_vec(),
            standard::VOWEL_DOUBLES.to_vec(),
            standard::VOICING.to_vec(),
        )
    }

    /// An empty table: only exact matches count as correct and nothing is
    /// a minor mistake.
    pub fn empty() -> Self {
        Self::from_parts(HashMap::new(), Vec::new(), Vec::new(), Vec::new())
    }

    /// Parse and validate a JSON rule table.
    pub fn from_json_str(json: &str) -> Result<Self, RuleTableError> {
        let raw: RawRuleTable = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Validate a raw table.
    pub fn from_raw(raw: RawRuleTable) -> Result<Self, RuleTableError> {
        let mut equivalents = HashMap::with_capacity(raw.equivalents.len());
        for (key, replacements) in raw.equivalents {
            let c = single_lowercase_letter(&key)
                .ok_or_else(|| RuleTableError::InvalidEquivalenceKey { key: key.clone() })?;
            if replacements.is_empty() || replacements.iter().any(String::is_empty) {
                return Err(RuleTableError::EmptyReplacement { key: c });
            }
            equivalents.insert(c, replacements);
        }

        let consonant_doubles = parse_doubles(&raw.doubles.consonants)?;
        let vowel_doubles = parse_doubles(&raw.doubles.vowels)?;

        let mut voicing = Vec::with_capacity(raw.voicing.len());
        for (a, b) in raw.voicing {
            match (single_lowercase_letter(&a), single_lowercase_letter(&b)) {
                (Some(x), Some(y)) if x != y => voicing.push((x, y)),
                _ => return Err(RuleTableError::InvalidVoicingPair(a, b)),
            }
        }

        Ok(Self::from_parts(
            equivalents,
            consonant_doubles,
            vowel_doubles,
            voicing,
        ))
    }

    fn from_parts(
        equivalents: HashMap<char, Vec<String>>,
        consonant_doubles: Vec<char>,
        vowel_doubles: Vec<char>,
        voicing: Vec<(char, char)>,
    ) -> Self {
        let doubled = consonant_doubles
            .iter()
            .chain(vowel_doubles.iter())
            .copied()
            .collect();
        Self {
            equivalents,
            consonant_doubles,
            vowel_doubles,
            doubled,
            voicing,
        }
    }

    /// The canonical (first) replacement for `c`, if `c` is mapped.
    pub fn canonical(&self, c: char) -> Option<&str> {
        self.equivalents
            .get(&c)
            .and_then(|reps| reps.first())
            .map(String::as_str)
    }

    /// All replacements listed for `c`.
    pub fn replacements(&self, c: char) -> Option<&[String]> {
        self.equivalents.get(&c).map(Vec::as_slice)
    }

    /// Whether writing `c` twice instead of once (or the reverse) is a
    /// minor mistake.
    pub fn is_doubled_letter(&self, c: char) -> bool {
        self.doubled.contains(&c)
    }

    /// The voiced / voiceless pairs, in configuration order.
    pub fn voicing_pairs(&self) -> &[(char, char)] {
        &self.voicing
    }

    /// Convert back to the serde form, with keys sorted.
    pub fn to_raw(&self) -> RawRuleTable {
        let equivalents = self
            .equivalents
            .iter()
            .map(|(c, reps)| (c.to_string(), reps.clone()))
            .collect();
        let doubles = RawDoubles {
            consonants: self.consonant_doubles.iter().map(|&c| doubled(c)).collect(),
            vowels: self.vowel_doubles.iter().map(|&c| doubled(c)).collect(),
        };
        let voicing = self
            .voicing
            .iter()
            .map(|&(a, b)| (a.to_string(), b.to_string()))
            .collect();
        RawRuleTable {
            equivalents,
            doubles,
            voicing,
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn doubled(c: char) -> String {
    [c, c].iter().collect()
}

/// Returns the letter if `s` is exactly one letter that is not uppercase.
fn single_lowercase_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_letter(c) && !is_upper(c) => Some(c),
        _ => None,
    }
}

fn parse_doubles(entries: &[String]) -> Result<Vec<char>, RuleTableError> {
    entries
        .iter()
        .map(|entry| {
            let mut chars = entry.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) if a == b && is_letter(a) && !is_upper(a) => Ok(a),
                _ => Err(RuleTableError::NotDoubled {
                    entry: entry.clone(),
                }),
            }
        })
        .collect()
}
