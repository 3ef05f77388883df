/// Strip line-ending artifacts and surrounding whitespace from a word,
/// folding it to lowercase when asked. Characters are otherwise kept as-is.
pub fn normalize(s: &str, lowercase: bool) -> String {
    let trimmed = s.trim();
    if lowercase {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}

/// Length of a word in characters, the unit the search threshold is measured in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
