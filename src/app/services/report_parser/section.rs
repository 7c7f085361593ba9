//! Section title detection
//!
//! Table sections in SMN reports are untitled in any structural sense: the
//! line visually above the sentinel header is the title, unless it is known
//! boilerplate or a metadata line. Each handler supplies its own exclusion
//! rule; the backward scan itself is shared.

/// The nearest non-blank line above `idx`, as a section title
///
/// Returns `None` when no non-blank line precedes the sentinel or when the
/// candidate is rejected by the handler's exclusion predicate.
pub fn title_before<F>(lines: &[String], idx: usize, exclude: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    let title = lines[..idx.min(lines.len())]
        .iter()
        .rev()
        .map(|line| line.trim())
        .find(|trimmed| !trimmed.is_empty())?;

    if exclude(title) {
        None
    } else {
        Some(title.to_string())
    }
}
