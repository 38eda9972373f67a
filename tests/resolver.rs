//! Tests for first-match rule resolution.
mod common;
use common::*;
use suisen::prelude::*;

#[test]
fn test_first_match_wins() {
    // The catch-all would also match, but the specific rule is listed first.
    let resolver = Resolver::new(age_gate_rules());
    let resolution = resolver.resolve(&values(&[("age", num(20.0))]));

    match resolution {
        Resolution::Matched {
            outcome,
            rule_index,
            reason,
        } => {
            assert_eq!(outcome.status, "ok");
            assert_eq!(outcome.message, "You are eligible.");
            assert_eq!(rule_index, 0);
            assert!(reason.contains("$age (was 20) >= 18"));
        }
        Resolution::NoMatch => panic!("expected a match"),
    }
}

#[test]
fn test_catch_all_fires_when_earlier_rules_fail() {
    let resolver = Resolver::new(age_gate_rules());
    let resolution = resolver.resolve(&values(&[("age", num(5.0))]));

    let outcome = resolution.outcome().expect("catch-all should match");
    assert_eq!(outcome.status, "no");
}

#[test]
fn test_no_match_is_a_distinguished_value() {
    let resolver = Resolver::new(vec![rule(
        compare("age", CompareOp::Gt, num(100.0)),
        "ok",
        "Centenarian discount.",
    )]);
    let resolution = resolver.resolve(&values(&[("age", num(5.0))]));

    assert_eq!(resolution, Resolution::NoMatch);
    assert!(!resolution.is_match());
    assert!(resolution.outcome().is_none());
}

#[test]
fn test_malformed_rule_does_not_abort_resolution() {
    // A rule whose condition the converter rejected sits in front; the
    // valid rule behind it must still be reachable.
    let resolver = Resolver::new(vec![
        rule(Condition::Invalid, "ok", "Never fires."),
        rule(compare("age", CompareOp::Ge, num(18.0)), "ok", "Eligible."),
    ]);
    let resolution = resolver.resolve(&values(&[("age", num(20.0))]));

    match resolution {
        Resolution::Matched {
            outcome,
            rule_index,
            ..
        } => {
            assert_eq!(outcome.message, "Eligible.");
            assert_eq!(rule_index, 1);
        }
        Resolution::NoMatch => panic!("expected the second rule to match"),
    }
}

#[test]
fn test_later_rules_are_not_evaluated_after_a_match() {
    // Both rules match; resolution must return the first and its index.
    let resolver = Resolver::new(vec![
        rule(Condition::All(vec![]), "restrict", "First."),
        rule(Condition::All(vec![]), "ok", "Second."),
    ]);
    let resolution = resolver.resolve(&values(&[]));

    match resolution {
        Resolution::Matched {
            outcome,
            rule_index,
            ..
        } => {
            assert_eq!(outcome.status, "restrict");
            assert_eq!(rule_index, 0);
        }
        Resolution::NoMatch => panic!("expected a match"),
    }
}

#[test]
fn test_empty_rule_list_never_matches() {
    let resolver = Resolver::new(vec![]);
    assert_eq!(resolver.resolve(&values(&[])), Resolution::NoMatch);
}

#[test]
fn test_resolution_is_stateless_across_value_maps() {
    let resolver = Resolver::new(age_gate_rules());

    let adult = resolver.resolve(&values(&[("age", num(30.0))]));
    let minor = resolver.resolve(&values(&[("age", num(10.0))]));
    let adult_again = resolver.resolve(&values(&[("age", num(30.0))]));

    assert_eq!(adult.outcome().unwrap().status, "ok");
    assert_eq!(minor.outcome().unwrap().status, "no");
    assert_eq!(adult, adult_again);
}
