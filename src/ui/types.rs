use serde::Deserialize;
use std::collections::HashMap;

/// Raw configuration as authored in the embedding application's admin box.
///
/// These structs mirror the persisted JSON exactly; they are converted into
/// the canonical [`Configuration`](crate::tool::Configuration) model before
/// any evaluation happens.
#[derive(Debug, Deserialize, Default)]
pub struct UiConfig {
    pub title: Option<String>,
    /// Submit-button label override.
    pub cta: Option<String>,
    #[serde(default)]
    pub fields: Vec<UiField>,
    #[serde(default)]
    pub rules: Vec<UiRule>,
    #[serde(default, alias = "statusLabels")]
    pub status_labels: HashMap<String, String>,
    #[serde(default, alias = "statusStyles")]
    pub status_styles: HashMap<String, UiStatusStyle>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiField {
    pub id: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub options: Option<Vec<UiSelectOption>>,
    #[serde(default)]
    pub required: bool,
    pub placeholder: Option<String>,
}

/// Option values are kept as raw JSON scalars; the converter renders them to
/// strings the way the form runtime did.
#[derive(Debug, Deserialize, Clone)]
pub struct UiSelectOption {
    pub value: Option<serde_json::Value>,
    pub label: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiRule {
    #[serde(rename = "if")]
    pub condition: Option<UiCondition>,
    #[serde(rename = "then")]
    pub outcome: Option<UiOutcome>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiOutcome {
    pub status: Option<String>,
    pub message: Option<String>,
}

/// A raw condition node. Authors can (and defensively do) set several shape
/// keys on one node; the converter resolves the ambiguity with a fixed
/// priority: `all`, then `any`, `not`, `in`, and finally binary compare.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct UiCondition {
    pub all: Option<Vec<UiCondition>>,
    pub any: Option<Vec<UiCondition>>,
    pub not: Option<Box<UiCondition>>,
    #[serde(rename = "in")]
    pub membership: Option<UiMembership>,
    pub field: Option<String>,
    pub op: Option<String>,
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiMembership {
    pub field: Option<String>,
    pub values: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiStatusStyle {
    pub label: Option<String>,
    pub text: Option<String>,
    pub bg: Option<String>,
    pub border: Option<String>,
}
