//! Common test utilities for building configurations and value maps.
use suisen::prelude::*;

#[allow(dead_code)]
pub fn num(n: f64) -> Value {
    Value::Number(n)
}

#[allow(dead_code)]
pub fn text(s: &str) -> Value {
    Value::Str(s.to_string())
}

#[allow(dead_code)]
pub fn values(pairs: &[(&str, Value)]) -> ValueMap {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.clone()))
        .collect()
}

#[allow(dead_code)]
pub fn compare(field: &str, op: CompareOp, value: Value) -> Condition {
    Condition::Compare {
        field: field.to_string(),
        op,
        value,
    }
}

#[allow(dead_code)]
pub fn membership(field: &str, members: &[Value]) -> Condition {
    Condition::In {
        field: field.to_string(),
        values: members.to_vec(),
    }
}

#[allow(dead_code)]
pub fn rule(condition: Condition, status: &str, message: &str) -> Rule {
    Rule {
        condition,
        outcome: Outcome {
            status: status.to_string(),
            message: message.to_string(),
        },
    }
}

/// An age gate with a specific rule listed before a catch-all.
///
/// Logic: `$age >= 18` -> ok, otherwise the empty-`all` catch-all -> no.
#[allow(dead_code)]
pub fn age_gate_rules() -> Vec<Rule> {
    vec![
        rule(
            compare("age", CompareOp::Ge, num(18.0)),
            "ok",
            "You are eligible.",
        ),
        rule(Condition::All(vec![]), "no", "Not eligible yet."),
    ]
}

/// A complete configuration JSON in the wire format, exercising every field
/// type plus status label and style overrides.
#[allow(dead_code)]
pub const PLAN_PICKER_JSON: &str = r##"{
    "title": "Plan picker",
    "cta": "Check my plan",
    "fields": [
        { "id": "age", "label": "Age", "type": "number", "min": 0, "max": 120, "required": true },
        { "id": "team_size", "label": "Team size", "type": "number" },
        {
            "id": "plan",
            "label": "Plan",
            "type": "select",
            "required": true,
            "options": [
                { "value": "basic", "label": "Basic" },
                { "value": "pro", "label": "Pro" },
                { "value": "enterprise", "label": "Enterprise" }
            ]
        },
        { "id": "notes", "label": "Notes", "type": "text", "placeholder": "Anything else?" }
    ],
    "rules": [
        {
            "if": {
                "all": [
                    { "field": "age", "op": ">=", "value": 18 },
                    { "in": { "field": "plan", "values": ["pro", "enterprise"] } },
                    { "field": "team_size", "op": ">", "value": 10 }
                ]
            },
            "then": { "status": "custom_fit", "message": "A larger plan fits your team." }
        },
        {
            "if": {
                "all": [
                    { "field": "age", "op": ">=", "value": 18 },
                    { "in": { "field": "plan", "values": ["pro", "enterprise"] } }
                ]
            },
            "then": { "status": "ok", "message": "This plan fits you." }
        },
        {
            "if": { "field": "age", "op": "<", "value": 18 },
            "then": { "status": "no", "message": "Not available for minors." }
        },
        {
            "if": { "any": [ { "in": { "field": "plan", "values": ["basic"] } } ] },
            "then": { "status": "restrict", "message": "Basic works, with limits." }
        }
    ],
    "statusLabels": { "custom_fit": "Great fit" },
    "statusStyles": {
        "custom_fit": { "text": "#1e3a8a", "bg": "#eff6ff", "border": "#bfdbfe" }
    }
}"##;
