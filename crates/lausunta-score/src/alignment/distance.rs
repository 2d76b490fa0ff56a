// Character-level edit distance used by the compound-word lookahead.

/// Levenshtein distance between two strings, counted in characters, with
/// unit cost for insertion, deletion and substitution.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP over the shorter string.
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for i in 1..=long.len() {
        curr[0] = i;
        for j in 1..=short.len() {
            let cost = usize::from(long[i - 1] != short[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}

/// Largest distance at which `remainder` still counts as a misheard
/// `target`: 1 for targets of up to five characters, 2 for longer ones.
pub fn near_match_threshold(target: &str) -> usize {
    if target.chars().count() <= 5 { 1 } else { 2 }
}

/// Distance between `remainder` and `target` if it is within the
/// near-match threshold for `target`.
pub fn near_match(remainder: &str, target: &str) -> Option<usize> {
    if remainder == target {
        return Some(0);
    }
    let distance = levenshtein(remainder, target);
    (distance <= near_match_threshold(target)).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings() {
        assert_eq!(levenshtein("kissa", "kissa"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn against_empty() {
        assert_eq!(levenshtein("", "kai"), 3);
        assert_eq!(levenshtein("kai", ""), 3);
    }

    #[test]
    fn classic_examples() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("sitting", "kitten"), 3);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(levenshtein("hyllyllä", "hyllylla"), 1);
        assert_eq!(levenshtein("ä", "a"), 1);
    }

    #[test]
    fn threshold_depends_on_target_length() {
        assert_eq!(near_match_threshold("kai"), 1);
        assert_eq!(near_match_threshold("hylly"), 1);
        assert_eq!(near_match_threshold("hyllyllä"), 2);
    }

    #[test]
    fn near_match_within_threshold() {
        assert_eq!(near_match("kai", "kai"), Some(0));
        assert_eq!(near_match("kay", "kai"), Some(1));
        assert_eq!(near_match("kyy", "kai"), None);
        assert_eq!(near_match("hylylla", "hyllyllä"), Some(2));
        assert_eq!(near_match("hylyla", "hyllyllä"), None);
    }
}
