//! # View Name Matcher
//!
//! Acceptance gate deciding whether a resolver owns a given symbolic view
//! name, based on a configured set of exact names or simple wildcard
//! patterns.
//!
//! Pattern semantics: `my*`, `*Report` and `*Repo*` all match the view name
//! `myReport`; a lone `*` matches everything; a pattern without a wildcard
//! requires exact equality. Matching is case-sensitive and `*` cannot be
//! escaped. Malformed patterns never match and never panic.

/// Acceptance gate over configured view name patterns.
///
/// `None` means the resolver accepts every name; an explicit empty list
/// accepts none.
#[derive(Debug, Clone, Default)]
pub struct ViewNameMatcher {
    patterns: Option<Vec<String>>,
}

impl ViewNameMatcher {
    /// Create a matcher from the configured name patterns, if any.
    pub fn new(patterns: Option<Vec<String>>) -> Self {
        Self { patterns }
    }

    /// Whether the supplied view name is in the acceptance set.
    pub fn can_handle(&self, view_name: &str) -> bool {
        match &self.patterns {
            None => true,
            Some(patterns) => patterns.iter().any(|p| simple_match(p, view_name)),
        }
    }
}

/// Match a value against a simple wildcard pattern.
///
/// Supported shapes: exact (`name`), match-all (`*`), prefix (`pre*`),
/// suffix (`*suf`), substring (`*mid*`) and bounded (`pre*suf`, where the
/// value must carry both literals over disjoint halves). Any other `*`
/// arrangement matches nothing.
pub fn simple_match(pattern: &str, value: &str) -> bool {
    if !pattern.contains('*') {
        return pattern == value;
    }
    if pattern == "*" {
        return true;
    }

    let stars = pattern.matches('*').count();
    if stars == 2 && pattern.starts_with('*') && pattern.ends_with('*') {
        let inner = &pattern[1..pattern.len() - 1];
        return value.contains(inner);
    }
    if stars != 1 {
        return false;
    }
    if let Some(suffix) = pattern.strip_prefix('*') {
        return value.ends_with(suffix);
    }
    if let Some(prefix) = pattern.strip_suffix('*') {
        return value.starts_with(prefix);
    }
    // Literal text on both sides of the wildcard: the halves must not overlap.
    if let Some((head, tail)) = pattern.split_once('*') {
        return value.len() >= head.len() + tail.len()
            && value.starts_with(head)
            && value.ends_with(tail);
    }
    false
}
