use std::collections::HashSet;

use super::keyword::Keyword;

/// True if a trimmed line is a step: a step keyword, exact case, then a
/// space. A bare `Given` is not a step.
pub fn is_step_line(trimmed: &str) -> bool {
    Keyword::STEPS.iter().any(|k| {
        trimmed
            .strip_prefix(k.as_str())
            .is_some_and(|rest| rest.starts_with(' '))
    })
}

/// Collects the distinct step lines of every document, trimmed, in the
/// order they are first seen.
///
/// Documents are scanned in iteration order and lines top to bottom.
/// Deduplication is exact: `Given x` and `given x` are different steps.
pub fn extract_steps<'a, I>(documents: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut steps = vec![];

    for document in documents {
        for line in document.split('\n') {
            let trimmed = line.trim();
            if is_step_line(trimmed) && seen.insert(trimmed) {
                steps.push(trimmed.to_string());
            }
        }
    }

    steps
}
