//! resolver::matcher
//!
//! Token-aware fuzzy matching for repository names.
//!
//! # Policy
//!
//! Candidates and filters are split into tokens on the segment delimiters
//! `/`, `.`, `-` and `_`. A candidate satisfies a filter when every filter
//! token is a **prefix** of a distinct candidate token, with the matched
//! tokens appearing in the same order as the filter's. Matching is
//! case-insensitive and the empty filter matches everything.
//!
//! This is deliberately stricter than character-subsequence matching: it
//! keeps completion suggestions tight while still allowing heavily
//! abbreviated input like `gh/org` for `github.com/org/repo`.
//!
//! # Examples
//!
//! ```
//! use grove::resolver::matches;
//!
//! assert!(matches("github.com/org/repo", "gh/org"));
//! assert!(matches("org/cool-app", "cool-app"));
//! assert!(matches("Foo/Bar", "foo/bar"));
//! assert!(!matches("github.com/org/repo", "repo/org"));
//! ```

/// Characters treated as token boundaries in names and filters.
const DELIMITERS: &[char] = &['/', '.', '-', '_'];

/// Test whether `candidate` satisfies the fuzzy `filter`.
///
/// Pure and deterministic; both inputs are case-folded internally.
pub fn matches(candidate: &str, filter: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let filter = filter.to_lowercase();

    let mut have = tokens(&candidate);

    'wanted: for want in tokens(&filter) {
        // Consume candidate tokens until one carries this filter token as a
        // prefix; tokens skipped here stay consumed, which enforces ordering.
        for token in have.by_ref() {
            if token.starts_with(want) {
                continue 'wanted;
            }
        }
        return false;
    }

    true
}

fn tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split(DELIMITERS).filter(|t| !t.is_empty())
}
