//! Small text helpers shared by both pipelines.

/// Collapse every whitespace run into a single space and trim both ends.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Append `c` unless already present, keeping first-seen order.
pub(crate) fn push_unique(set: &mut Vec<char>, c: char) {
    if !set.contains(&c) {
        set.push(c);
    }
}
