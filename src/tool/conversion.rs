use super::{Configuration, FieldSpec, FieldType, Outcome, Rule, SelectOption};
use crate::ast::{CompareOp, Condition, Value};
use crate::error::ConfigError;
use crate::ui::{UiCondition, UiConfig, UiField, UiRule};
use ahash::AHashMap;
use itertools::Itertools;

/// A trait for wire formats that can be converted into a canonical
/// [`Configuration`].
///
/// This is the extension point for embedding applications with their own
/// persistence shape: implement it on your parsed structs and hand the
/// result to [`FormController`](crate::form::FormController).
pub trait IntoConfiguration {
    /// Consumes the object and converts it into an evaluatable configuration.
    fn into_configuration(self) -> Result<Configuration, ConfigError>;
}

impl Configuration {
    /// Parses and converts the embedding application's JSON in one step.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let ui: UiConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))?;
        ui.into_configuration()
    }
}

impl IntoConfiguration for UiConfig {
    fn into_configuration(self) -> Result<Configuration, ConfigError> {
        let fields = self
            .fields
            .into_iter()
            .map(convert_field)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(id) = fields.iter().map(|f| f.id.as_str()).duplicates().next() {
            return Err(ConfigError::DuplicateFieldId { id: id.to_string() });
        }

        // Rule conversion is lenient: a rule without an outcome is dropped,
        // a rule without a condition keeps its outcome behind a condition
        // that never fires. Neighbouring rules are unaffected either way.
        let rules = self
            .rules
            .into_iter()
            .filter_map(convert_rule)
            .collect::<Vec<_>>();

        let mut status_labels = AHashMap::new();
        let mut status_styles = AHashMap::new();
        for (key, label) in self.status_labels {
            status_labels.insert(key, label);
        }
        for (key, style) in self.status_styles {
            if let Some(label) = style.label {
                status_labels.entry(key.clone()).or_insert(label);
            }
            status_styles.insert(
                key,
                super::StatusStyle {
                    text: style.text.unwrap_or_default(),
                    bg: style.bg.unwrap_or_default(),
                    border: style.border.unwrap_or_default(),
                },
            );
        }

        Ok(Configuration {
            title: self.title.unwrap_or_else(|| "Decision Tool".to_string()),
            cta: self.cta,
            fields,
            rules,
            status_labels,
            status_styles,
        })
    }
}

fn convert_field(ui: UiField) -> Result<FieldSpec, ConfigError> {
    let id = ui
        .id
        .filter(|id| !id.is_empty())
        .ok_or(ConfigError::MissingFieldId)?;

    let field_type = match ui.field_type.as_deref() {
        Some("number") => FieldType::Number {
            min: ui.min,
            max: ui.max,
            step: ui.step,
        },
        Some("select") => {
            let options = ui
                .options
                .unwrap_or_default()
                .into_iter()
                .filter_map(|option| {
                    let value = scalar_display_string(option.value.as_ref()?);
                    let label = option.label.unwrap_or_else(|| value.clone());
                    Some(SelectOption { value, label })
                })
                .collect::<Vec<_>>();
            if options.is_empty() {
                return Err(ConfigError::EmptySelectOptions { id });
            }
            FieldType::Select { options }
        }
        // Unknown declarations render as plain text inputs.
        _ => FieldType::Text,
    };

    Ok(FieldSpec {
        label: ui.label.unwrap_or_else(|| id.clone()),
        id,
        field_type,
        required: ui.required,
        placeholder: ui.placeholder,
    })
}

fn convert_rule(ui: UiRule) -> Option<Rule> {
    let outcome = ui.outcome?;
    let condition = ui
        .condition
        .map(convert_condition)
        .unwrap_or(Condition::Invalid);
    Some(Rule {
        condition,
        outcome: Outcome {
            status: outcome.status.unwrap_or_default(),
            message: outcome.message.unwrap_or_default(),
        },
    })
}

/// Resolves a raw node's shape by the fixed key priority, then converts it.
/// Anything unrecognizable becomes [`Condition::Invalid`], which evaluates
/// to false without disturbing the rest of the rule list.
pub fn convert_condition(ui: UiCondition) -> Condition {
    if let Some(children) = ui.all {
        return Condition::All(children.into_iter().map(convert_condition).collect());
    }
    if let Some(children) = ui.any {
        return Condition::Any(children.into_iter().map(convert_condition).collect());
    }
    if let Some(child) = ui.not {
        return Condition::Not(Box::new(convert_condition(*child)));
    }
    if let Some(membership) = ui.membership {
        if let (Some(field), Some(values)) = (membership.field, membership.values) {
            // Non-scalar members could never match a field value; they are
            // dropped rather than poisoning the node.
            let members = values
                .iter()
                .filter_map(convert_scalar)
                .unique()
                .collect::<Vec<_>>();
            return Condition::In {
                field,
                values: members,
            };
        }
        return Condition::Invalid;
    }

    match (
        ui.field,
        ui.op.as_deref().and_then(CompareOp::from_symbol),
        ui.value.as_ref().and_then(convert_scalar),
    ) {
        (Some(field), Some(op), Some(value)) => Condition::Compare { field, op, value },
        _ => Condition::Invalid,
    }
}

fn convert_scalar(raw: &serde_json::Value) -> Option<Value> {
    match raw {
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number),
        serde_json::Value::String(s) => Some(Value::Str(s.clone())),
        _ => None,
    }
}

/// Renders a raw JSON scalar the way the form runtime stringified select
/// option values.
fn scalar_display_string(raw: &serde_json::Value) -> String {
    match raw {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
