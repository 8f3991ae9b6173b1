//! String manipulation utilities

/// Format a count with its pluralized noun, e.g. `1 node` / `3 nodes`
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
