//! Property-based tests for the fuzzy matcher.
//!
//! These tests use proptest to verify the matcher's documented contract
//! across randomly generated inputs.

use proptest::prelude::*;

use grove::resolver::matches;

/// Strategy for generating a single name token (no delimiters).
fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-p][a-p0-9]{0,7}").unwrap()
}

/// Strategy for generating qualified-name-shaped candidates.
fn candidate() -> impl Strategy<Value = String> {
    proptest::collection::vec(token(), 1..5).prop_map(|tokens| tokens.join("/"))
}

proptest! {
    /// The empty filter matches every candidate.
    #[test]
    fn empty_filter_matches_all(candidate in candidate()) {
        prop_assert!(matches(&candidate, ""));
    }

    /// Every candidate matches itself.
    #[test]
    fn candidates_match_themselves(candidate in candidate()) {
        prop_assert!(matches(&candidate, &candidate));
    }

    /// Matching is case-insensitive.
    #[test]
    fn matching_is_case_insensitive(candidate in candidate()) {
        prop_assert!(matches(&candidate, &candidate.to_uppercase()));
        prop_assert!(matches(&candidate.to_uppercase(), &candidate));
    }

    /// An ordered subset of a candidate's tokens always matches it.
    #[test]
    fn ordered_token_subsets_match(
        tokens in proptest::collection::vec(token(), 1..5),
        mask in proptest::collection::vec(any::<bool>(), 5),
    ) {
        let candidate = tokens.join("/");
        let subset: Vec<&str> = tokens
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(t, _)| t.as_str())
            .collect();
        let filter = subset.join("/");
        prop_assert!(matches(&candidate, &filter));
    }

    /// Truncating each filter token to a prefix preserves the match.
    #[test]
    fn token_prefixes_match(tokens in proptest::collection::vec(token(), 1..5)) {
        let candidate = tokens.join("/");
        let filter: Vec<&str> = tokens.iter().map(|t| &t[..1]).collect();
        prop_assert!(matches(&candidate, &filter.join("/")));
    }

    /// A filter containing a token that appears nowhere in the candidate
    /// never matches. Candidate tokens only use [a-p0-9], so a token
    /// starting with 'z' cannot be a prefix of any of them.
    #[test]
    fn foreign_tokens_never_match(candidate in candidate(), extra in "z[a-z]{0,4}") {
        let filter = format!("{}/{}", candidate, extra);
        prop_assert!(!matches(&candidate, &filter));
        prop_assert!(!matches(&candidate, &extra));
    }

    /// The matcher is a pure function: repeated calls agree.
    #[test]
    fn matching_is_deterministic(candidate in candidate(), filter in candidate()) {
        let first = matches(&candidate, &filter);
        let second = matches(&candidate, &filter);
        prop_assert_eq!(first, second);
    }
}
