//! Case-insensitive substring search helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by the
//! store layer and any future CLI or reporting tooling. Every list view in
//! the console filters with the same semantics: a record matches when any of
//! its searchable fields contains the query, ignoring case.

// ---------------------------------------------------------------------------
// Matching helpers
// ---------------------------------------------------------------------------

/// Case-insensitive substring test.
///
/// # Examples
///
/// ```
/// use gympro_core::search::contains_ci;
/// assert!(contains_ci("Jane Smith", "jane"));
/// assert!(contains_ci("jane.smith@email.com", "SMITH"));
/// assert!(!contains_ci("Mike Johnson", "jane"));
/// ```
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Match a query against a record's searchable fields.
///
/// - An empty or whitespace-only query matches every record.
/// - Otherwise the record matches when any field contains the trimmed query,
///   ignoring case.
pub fn matches_any<'a, I>(fields: I, query: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    fields.into_iter().any(|field| contains_ci(field, query))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- contains_ci ---------------------------------------------------------

    #[test]
    fn contains_ci_exact_match() {
        assert!(contains_ci("treadmill", "treadmill"));
    }

    #[test]
    fn contains_ci_ignores_case_both_sides() {
        assert!(contains_ci("Treadmill Pro X1", "pro"));
        assert!(contains_ci("treadmill pro x1", "PRO"));
    }

    #[test]
    fn contains_ci_substring_in_middle() {
        assert!(contains_ci("jane.smith@email.com", "smith"));
    }

    #[test]
    fn contains_ci_no_match() {
        assert!(!contains_ci("Morning Yoga", "hiit"));
    }

    #[test]
    fn contains_ci_empty_needle_always_matches() {
        assert!(contains_ci("anything", ""));
        assert!(contains_ci("", ""));
    }

    // -- matches_any ---------------------------------------------------------

    #[test]
    fn matches_any_hits_on_second_field() {
        assert!(matches_any(["John Doe", "john.doe@email.com"], "doe@"));
    }

    #[test]
    fn matches_any_misses_every_field() {
        assert!(!matches_any(["John Doe", "john.doe@email.com"], "jane"));
    }

    #[test]
    fn matches_any_empty_query_matches_everything() {
        assert!(matches_any(["John Doe"], ""));
        assert!(matches_any(std::iter::empty::<&str>(), ""));
    }

    #[test]
    fn matches_any_whitespace_query_matches_everything() {
        assert!(matches_any(["John Doe"], "   "));
    }

    #[test]
    fn matches_any_trims_query_before_matching() {
        assert!(matches_any(["Jane Smith"], "  jane  "));
    }

    #[test]
    fn matches_any_nonempty_query_never_matches_no_fields() {
        assert!(!matches_any(std::iter::empty::<&str>(), "jane"));
    }
}
