//! Tests for wire-format conversion and structural validation.
mod common;
use common::*;
use suisen::error::ConfigError;
use suisen::prelude::*;
use suisen::tool::convert_condition;
use suisen::ui::UiCondition;

fn parse_condition(json: &str) -> Condition {
    let ui: UiCondition = serde_json::from_str(json).expect("condition JSON should parse");
    convert_condition(ui)
}

#[test]
fn test_full_configuration_conversion() {
    let config = Configuration::from_json(PLAN_PICKER_JSON).unwrap();

    assert_eq!(config.title, "Plan picker");
    assert_eq!(config.cta_label(), "Check my plan");
    assert_eq!(config.fields.len(), 4);
    assert_eq!(config.rules.len(), 4);

    let plan = config.field("plan").unwrap();
    assert!(plan.required);
    match &plan.field_type {
        FieldType::Select { options } => assert_eq!(options.len(), 3),
        other => panic!("expected a select field, got {:?}", other),
    }

    let age = config.field("age").unwrap();
    match age.field_type {
        FieldType::Number { min, max, .. } => {
            assert_eq!(min, Some(0.0));
            assert_eq!(max, Some(120.0));
        }
        ref other => panic!("expected a number field, got {:?}", other),
    }
}

#[test]
fn test_unknown_field_type_renders_as_text() {
    let config = Configuration::from_json(
        r#"{ "fields": [ { "id": "x", "type": "color" } ], "rules": [] }"#,
    )
    .unwrap();
    assert_eq!(config.fields[0].field_type, FieldType::Text);
    assert_eq!(config.title, "Decision Tool");
}

#[test]
fn test_shape_priority_on_ambiguous_nodes() {
    // A node carrying both a group key and compare keys resolves as the
    // group; the compare keys are ignored.
    let condition = parse_condition(
        r#"{ "all": [], "field": "age", "op": ">", "value": 100 }"#,
    );
    assert_eq!(condition, Condition::All(vec![]));
    assert!(evaluate_condition(&condition, &values(&[])));

    // "any" beats "not", which beats "in", which beats compare.
    let condition = parse_condition(
        r#"{ "any": [], "not": { "all": [] }, "in": { "field": "x", "values": [1] } }"#,
    );
    assert_eq!(condition, Condition::Any(vec![]));

    let condition = parse_condition(
        r#"{ "not": { "all": [] }, "in": { "field": "x", "values": [1] } }"#,
    );
    assert!(matches!(condition, Condition::Not(_)));

    let condition = parse_condition(
        r#"{ "in": { "field": "x", "values": [1] }, "field": "x", "op": "==", "value": 2 }"#,
    );
    assert!(matches!(condition, Condition::In { .. }));
}

#[test]
fn test_unrecognized_nodes_convert_to_invalid() {
    assert_eq!(parse_condition(r#"{}"#), Condition::Invalid);
    // Unknown operator.
    assert_eq!(
        parse_condition(r#"{ "field": "age", "op": "~=", "value": 3 }"#),
        Condition::Invalid
    );
    // Compare missing its field.
    assert_eq!(
        parse_condition(r#"{ "op": ">", "value": 3 }"#),
        Condition::Invalid
    );
    // Non-scalar compare literal.
    assert_eq!(
        parse_condition(r#"{ "field": "age", "op": ">", "value": { "nested": true } }"#),
        Condition::Invalid
    );
    // Membership without a values list.
    assert_eq!(
        parse_condition(r#"{ "in": { "field": "plan" } }"#),
        Condition::Invalid
    );
}

#[test]
fn test_membership_drops_non_scalar_members() {
    let condition = parse_condition(
        r#"{ "in": { "field": "plan", "values": ["pro", { "bad": 1 }, null, "pro"] } }"#,
    );
    match condition {
        Condition::In { values, .. } => {
            // The object and null are dropped, and the duplicate is folded.
            assert_eq!(values, vec![Value::Str("pro".to_string())]);
        }
        other => panic!("expected a membership condition, got {:?}", other),
    }
}

#[test]
fn test_rule_without_outcome_is_dropped() {
    let config = Configuration::from_json(
        r#"{
            "fields": [ { "id": "age", "type": "number" } ],
            "rules": [
                { "if": { "field": "age", "op": ">=", "value": 18 } },
                { "if": { "field": "age", "op": ">=", "value": 18 },
                  "then": { "status": "ok", "message": "Eligible." } }
            ]
        }"#,
    )
    .unwrap();

    // Only the complete rule survives, and it still resolves.
    assert_eq!(config.rules.len(), 1);
    let resolver = Resolver::new(config.rules);
    let resolution = resolver.resolve(&values(&[("age", num(20.0))]));
    assert_eq!(resolution.outcome().unwrap().status, "ok");
}

#[test]
fn test_rule_without_condition_never_fires() {
    let config = Configuration::from_json(
        r#"{
            "fields": [ { "id": "age", "type": "number" } ],
            "rules": [
                { "then": { "status": "ok", "message": "Never." } },
                { "if": { "all": [] }, "then": { "status": "restrict", "message": "Always." } }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[0].condition, Condition::Invalid);

    let resolver = Resolver::new(config.rules);
    let resolution = resolver.resolve(&values(&[("age", num(20.0))]));
    assert_eq!(resolution.outcome().unwrap().status, "restrict");
}

#[test]
fn test_duplicate_field_ids_are_rejected() {
    let result = Configuration::from_json(
        r#"{ "fields": [ { "id": "age" }, { "id": "age" } ], "rules": [] }"#,
    );
    assert!(matches!(
        result,
        Err(ConfigError::DuplicateFieldId { id }) if id == "age"
    ));
}

#[test]
fn test_select_without_options_is_rejected() {
    let result = Configuration::from_json(
        r#"{ "fields": [ { "id": "plan", "type": "select" } ], "rules": [] }"#,
    );
    assert!(matches!(
        result,
        Err(ConfigError::EmptySelectOptions { id }) if id == "plan"
    ));
}

#[test]
fn test_field_without_id_is_rejected() {
    let result =
        Configuration::from_json(r#"{ "fields": [ { "label": "Age" } ], "rules": [] }"#);
    assert!(matches!(result, Err(ConfigError::MissingFieldId)));

    let result = Configuration::from_json(r#"not json"#);
    assert!(matches!(result, Err(ConfigError::JsonParseError(_))));
}

#[test]
fn test_round_trip_preserves_resolution_behaviour() {
    let config = Configuration::from_json(PLAN_PICKER_JSON).unwrap();
    let serialized = serde_json::to_string(&config).unwrap();
    let reparsed: Configuration = serde_json::from_str(&serialized).unwrap();
    assert_eq!(config, reparsed);

    let vm = values(&[
        ("age", num(30.0)),
        ("team_size", num(25.0)),
        ("plan", text("pro")),
        ("notes", text("")),
    ]);
    let before = Resolver::new(config.rules).resolve(&vm);
    let after = Resolver::new(reparsed.rules).resolve(&vm);
    assert_eq!(before, after);
    assert_eq!(before.outcome().unwrap().status, "custom_fit");
}
