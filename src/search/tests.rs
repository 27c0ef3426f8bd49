//! Search Module Tests
//!
//! Validates the query pipeline, including tokenization, per-field matching,
//! scoring, and deterministic ordering.
//!
//! ## Test Scopes
//! - **Tokenizer**: normalization, order preservation, empty-query rejection.
//! - **Matcher**: exact/prefix semantics per field, year digit rule.
//! - **Ranker**: weights, AND-across-tokens disqualification, tie-breaking.
//! - **Engine**: end-to-end ranking over an indexed snapshot.

#[cfg(test)]
mod tests {
    use crate::directory::record::{Field, PersonRecord};
    use crate::directory::snapshot::Snapshot;
    use crate::error::QueryError;
    use crate::search::engine::search;
    use crate::search::matcher::{MatchStrength, best_match, field_match};
    use crate::search::ranker::{EXACT_WEIGHT, PREFIX_WEIGHT, score_record, weight};
    use crate::search::tokenizer::tokenize;

    fn person(login: &str, first: &str, last: &str, location: &str, year: u16) -> PersonRecord {
        PersonRecord {
            login: login.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            location: location.to_string(),
            year,
        }
    }

    fn corpus() -> Snapshot {
        Snapshot::build(
            vec![
                person("motet_a", "antoine", "motet", "FR/LYN", 2015),
                person("motta_c", "carla", "motta", "IT/ROM", 2015),
                person("durand_b", "bertrand", "durand", "FR/PAR", 2016),
                person("martin_a", "antoine", "martin", "FR/LYN", 2016),
                person("ante_z", "zora", "ante", "HR/ZAG", 2015),
            ],
            1,
        )
        .unwrap()
    }

    fn logins(results: &[PersonRecord]) -> Vec<&str> {
        results.iter().map(|r| r.login.as_str()).collect()
    }

    // ============================================================
    // TOKENIZER TESTS
    // ============================================================

    #[test]
    fn test_tokenize_empty_is_bad_query() {
        assert_eq!(tokenize(""), Err(QueryError::BadQuery));
    }

    #[test]
    fn test_tokenize_whitespace_only_is_bad_query() {
        assert_eq!(tokenize("   "), Err(QueryError::BadQuery));
        assert_eq!(tokenize("\t \n"), Err(QueryError::BadQuery));
    }

    #[test]
    fn test_tokenize_lowercases() {
        let tokens = tokenize("AnToInE MotET").unwrap();
        assert_eq!(tokens, vec!["antoine", "motet"]);
    }

    #[test]
    fn test_tokenize_preserves_order_and_duplicates() {
        let tokens = tokenize("motet antoine motet").unwrap();
        assert_eq!(tokens, vec!["motet", "antoine", "motet"]);
    }

    #[test]
    fn test_tokenize_splits_on_whitespace_runs() {
        let tokens = tokenize("  motet \t 2015   antoin ").unwrap();
        assert_eq!(tokens, vec!["motet", "2015", "antoin"]);
    }

    #[test]
    fn test_tokenize_keeps_short_and_numeric_terms() {
        // No minimum token length: "a" and "201" are legitimate prefixes.
        let tokens = tokenize("a 201").unwrap();
        assert_eq!(tokens, vec!["a", "201"]);
    }

    // ============================================================
    // MATCHER TESTS - field_match
    // ============================================================

    #[test]
    fn test_field_match_exact_beats_prefix_beats_none() {
        assert_eq!(
            field_match(Field::LastName, "motet", "motet"),
            MatchStrength::Exact
        );
        assert_eq!(
            field_match(Field::LastName, "motet", "mot"),
            MatchStrength::Prefix
        );
        assert_eq!(
            field_match(Field::LastName, "motet", "durand"),
            MatchStrength::None
        );
        assert!(MatchStrength::Exact > MatchStrength::Prefix);
        assert!(MatchStrength::Prefix > MatchStrength::None);
    }

    #[test]
    fn test_field_match_year_accepts_digit_prefix() {
        assert_eq!(
            field_match(Field::Year, "2015", "2015"),
            MatchStrength::Exact
        );
        assert_eq!(field_match(Field::Year, "2015", "201"), MatchStrength::Prefix);
    }

    #[test]
    fn test_field_match_year_rejects_non_digit_tokens() {
        assert_eq!(field_match(Field::Year, "2015", "20a"), MatchStrength::None);
        assert_eq!(
            field_match(Field::Year, "2015", "motet"),
            MatchStrength::None
        );
    }

    // ============================================================
    // MATCHER TESTS - best_match
    // ============================================================

    #[test]
    fn test_best_match_takes_strongest_field() {
        let snapshot = corpus();
        let record = snapshot.indexed(0); // motet_a

        // "motet" is exact on last name, prefix on login; exact wins.
        let m = best_match(record, "motet");
        assert_eq!(m.strength, MatchStrength::Exact);
        assert_eq!(m.fields, vec![Field::LastName]);
    }

    #[test]
    fn test_best_match_reports_all_tied_fields() {
        let snapshot = Snapshot::build(
            vec![person("antoine_a", "antoine", "antoine", "FR/LYN", 2015)],
            1,
        )
        .unwrap();

        let m = best_match(snapshot.indexed(0), "antoine");
        assert_eq!(m.strength, MatchStrength::Exact);
        assert_eq!(m.fields, vec![Field::FirstName, Field::LastName]);
    }

    #[test]
    fn test_best_match_none_when_no_field_matches() {
        let snapshot = corpus();
        let m = best_match(snapshot.indexed(0), "zzz");
        assert_eq!(m.strength, MatchStrength::None);
        assert!(m.fields.is_empty());
    }

    // ============================================================
    // RANKER TESTS
    // ============================================================

    #[test]
    fn test_weights_exact_strictly_outranks_prefix() {
        assert!(EXACT_WEIGHT > PREFIX_WEIGHT);
        assert_eq!(weight(MatchStrength::Exact), EXACT_WEIGHT);
        assert_eq!(weight(MatchStrength::Prefix), PREFIX_WEIGHT);
        assert_eq!(weight(MatchStrength::None), 0);
    }

    #[test]
    fn test_score_sums_best_match_per_token() {
        let snapshot = corpus();
        let record = snapshot.indexed(0); // motet_a

        // exact last name + exact year + prefix first name
        let tokens = vec!["motet".to_string(), "2015".to_string(), "antoin".to_string()];
        assert_eq!(
            score_record(record, &tokens),
            Some(EXACT_WEIGHT * 2 + PREFIX_WEIGHT)
        );
    }

    #[test]
    fn test_score_any_unmatched_token_disqualifies() {
        let snapshot = corpus();
        let record = snapshot.indexed(0); // motet_a

        let tokens = vec!["motet".to_string(), "nomatch".to_string()];
        assert_eq!(score_record(record, &tokens), None);
    }

    // ============================================================
    // ENGINE TESTS
    // ============================================================

    #[test]
    fn test_search_empty_query_is_bad_query() {
        let snapshot = corpus();
        assert_eq!(search(&snapshot, "", 20), Err(QueryError::BadQuery));
        assert_eq!(search(&snapshot, "   ", 20), Err(QueryError::BadQuery));
    }

    #[test]
    fn test_search_by_login_ranks_owner_first() {
        let snapshot = corpus();
        let results = search(&snapshot, "motet_a", 20).unwrap();
        assert_eq!(results[0].login, "motet_a");
    }

    #[test]
    fn test_search_mixed_case_names() {
        let snapshot = corpus();
        let results = search(&snapshot, "AnToInE MotET", 20).unwrap();
        assert_eq!(results[0].login, "motet_a");
    }

    #[test]
    fn test_search_year_and_partial_first_name() {
        let snapshot = corpus();
        // exact last name + exact year + prefix first name
        let results = search(&snapshot, "motet 2015 antoin", 20).unwrap();
        assert_eq!(results[0].login, "motet_a");
    }

    #[test]
    fn test_search_is_term_order_invariant() {
        let snapshot = corpus();
        let a = search(&snapshot, "motet antoine", 20).unwrap();
        let b = search(&snapshot, "antoine motet", 20).unwrap();
        assert_eq!(logins(&a), logins(&b));
    }

    #[test]
    fn test_search_and_semantics_across_tokens() {
        let snapshot = corpus();

        let base = search(&snapshot, "motet", 20).unwrap();
        assert!(logins(&base).contains(&"motet_a"));

        // Adding a token that motet_a cannot match must drop it entirely.
        let narrowed = search(&snapshot, "motet durand", 20).unwrap();
        assert!(!logins(&narrowed).contains(&"motet_a"));
    }

    #[test]
    fn test_search_prefix_reaches_multiple_records() {
        let snapshot = corpus();
        // "mot" prefixes motet_a (login, last name) and motta_c.
        let results = search(&snapshot, "mot", 20).unwrap();
        assert_eq!(logins(&results), vec!["motet_a", "motta_c"]);
    }

    #[test]
    fn test_search_ties_break_on_ascending_login() {
        let snapshot = corpus();
        // Both 2015ers with nothing else in common with the token "2015":
        // exact year match each, so ordering falls back to login.
        let results = search(&snapshot, "2015", 20).unwrap();
        assert_eq!(logins(&results), vec!["ante_z", "motet_a", "motta_c"]);
    }

    #[test]
    fn test_search_year_prefix_token() {
        let snapshot = corpus();
        let results = search(&snapshot, "201", 20).unwrap();
        assert_eq!(results.len(), 5, "201 prefix-matches every enrollment year");
    }

    #[test]
    fn test_search_truncates_to_limit() {
        let snapshot = corpus();
        let results = search(&snapshot, "201", 2).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_no_match_is_empty_not_error() {
        let snapshot = corpus();
        let results = search(&snapshot, "etsiruanetiurnateisru", 20).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_is_deterministic_across_calls() {
        let snapshot = corpus();
        let first = search(&snapshot, "an 2015", 20).unwrap();
        for _ in 0..10 {
            assert_eq!(search(&snapshot, "an 2015", 20).unwrap(), first);
        }
    }

    #[test]
    fn test_search_exact_login_outranks_prefix_only_competitors() {
        let snapshot = corpus();
        // "ante" is exact on ante_z's last name but only a prefix of
        // "antoine"; the exact hit must come first.
        let results = search(&snapshot, "ante", 20).unwrap();
        assert_eq!(results[0].login, "ante_z");
    }

    #[test]
    fn test_search_location_field() {
        let snapshot = corpus();
        let results = search(&snapshot, "fr/lyn", 20).unwrap();
        assert_eq!(logins(&results), vec!["martin_a", "motet_a"]);
    }
}
