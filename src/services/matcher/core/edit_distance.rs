//! Levenshtein distance between two names.

/// Minimum number of single-character inserts, deletes and substitutions
/// turning `a` into `b`. Counts characters, not bytes.
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }
    strsim::levenshtein(a, b)
}

#[cfg(test)]
#[path = "tests/edit_distance_tests.rs"]
mod tests;
