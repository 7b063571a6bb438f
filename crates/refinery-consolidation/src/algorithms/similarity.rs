//! Name similarity in [0, 1], evaluated as the first matching rule:
//!
//! 1. Case-folded, trimmed equality → 1.0
//! 2. Equality after stripping whitespace, `-` and `_` → 0.95
//! 3. Equal morphological stems longer than 2 chars → 0.9
//! 4. Normalized Levenshtein distance on the original strings

/// Score for case-folded exact equality.
pub const EXACT_MATCH: f64 = 1.0;
/// Score for equality once separators are removed.
pub const SEPARATOR_MATCH: f64 = 0.95;
/// Score for equal stems after suffix stripping.
pub const MORPHOLOGICAL_MATCH: f64 = 0.9;

/// Suffixes stripped when comparing stems. The first one that matches is removed.
pub const MORPHOLOGICAL_SUFFIXES: &[&str] = &["s", "ing", "ed", "er", "ly"];

/// Stems must be longer than this to count as a morphological match.
const MIN_STEM_CHARS: usize = 2;

/// Similarity of two concept names. Symmetric, and `similarity(a, a) == 1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_folded = a.trim().to_lowercase();
    let b_folded = b.trim().to_lowercase();
    if a_folded == b_folded {
        return EXACT_MATCH;
    }

    if strip_separators(&a_folded) == strip_separators(&b_folded) {
        return SEPARATOR_MATCH;
    }

    let a_stem = stem(&a_folded);
    let b_stem = stem(&b_folded);
    if a_stem == b_stem && a_stem.chars().count() > MIN_STEM_CHARS {
        return MORPHOLOGICAL_MATCH;
    }

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return EXACT_MATCH;
    }
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

/// Unit-cost Levenshtein distance over chars. Case-sensitive.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn strip_separators(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect()
}

/// Strip the first matching suffix from an already case-folded name.
fn stem(folded: &str) -> &str {
    for suffix in MORPHOLOGICAL_SUFFIXES {
        if folded.len() > suffix.len() {
            if let Some(stripped) = folded.strip_suffix(suffix) {
                return stripped;
            }
        }
    }
    folded
}
