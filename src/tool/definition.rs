use super::status::StatusStyle;
use crate::ast::Condition;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The complete, canonical definition of one decision tool, ready for
/// evaluation. This is the target structure for any wire-format conversion.
///
/// A configuration is constructed once per render, consumed read-only for
/// the lifetime of one interactive session, and never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub title: String,
    /// Submit-button label; [`Configuration::cta_label`] applies the default.
    pub cta: Option<String>,
    pub fields: Vec<FieldSpec>,
    pub rules: Vec<Rule>,
    /// Status key -> display label overrides.
    pub status_labels: AHashMap<String, String>,
    /// Status key -> visual treatment overrides.
    pub status_styles: AHashMap<String, StatusStyle>,
}

impl Configuration {
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn cta_label(&self) -> &str {
        self.cta.as_deref().unwrap_or("Get recommendation")
    }
}

/// Describes a single user-facing input of the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Unique key within a configuration; conditions refer to it.
    pub id: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    /// Options are guaranteed non-empty by conversion-time validation.
    Select { options: Vec<SelectOption> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// One conditional rule. Rules form an ordered sequence; position in the
/// list is the only priority mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub condition: Condition,
    pub outcome: Outcome,
}

/// The status + message pair produced by a matched rule.
///
/// `status` is an open-ended key resolved through the status registry at
/// display time; `message` is free-form user-facing text, never markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: String,
    pub message: String,
}
