use super::keyword::Keyword;

/// Filters `keywords` to those whose spelling starts with `fragment`,
/// ignoring case. Order follows `keywords`.
///
/// An empty fragment, or one holding a `:`, matches nothing: the colon means
/// the user already finished a keyword such as `Feature:`.
pub fn match_prefix(fragment: &str, keywords: &[Keyword]) -> Vec<Keyword> {
    if fragment.is_empty() || fragment.contains(':') {
        return Vec::new();
    }
    keywords
        .iter()
        .copied()
        .filter(|k| k.starts_with_ignore_case(fragment))
        .collect()
}

/// [`match_prefix`] against the full keyword table.
pub fn suggestions(fragment: &str) -> Vec<Keyword> {
    match_prefix(fragment, &Keyword::ALL)
}

/// The suggestion taken when the user confirms.
pub fn best_suggestion(fragment: &str) -> Option<Keyword> {
    suggestions(fragment).into_iter().next()
}

/// The word being typed: the last line of `before_cursor` without its
/// indentation.
pub fn current_fragment(before_cursor: &str) -> &str {
    let line = before_cursor
        .rsplit_once('\n')
        .map_or(before_cursor, |(_, line)| line);
    line.trim_start()
}
