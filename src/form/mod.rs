use crate::ast::{Value, ValueMap};
use crate::evaluator::{Resolution, Resolver};
use crate::tool::{Configuration, FieldType, StatusRegistry, StatusStyle};
use ahash::AHashMap;

/// Message shown when a required field is still empty at submit time.
pub const INCOMPLETE_MESSAGE: &str = "Please complete all fields.";
/// Message shown when no rule matched the submitted values.
pub const NO_MATCH_MESSAGE: &str = "Criteria not met.";

/// A fully-resolved recommendation, ready for the embedding application to
/// render as a styled badge plus message text.
///
/// `message` and `reason` are plain text; hosts must escape them as such
/// and never interpret them as markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Normalized status key the display was resolved under.
    pub status: String,
    pub label: String,
    pub style: StatusStyle,
    pub message: String,
    /// Explanation of the matched rule's logic; absent for the incomplete
    /// and no-match recommendations.
    pub reason: Option<String>,
}

/// One interactive instance of a decision tool.
///
/// Each controller is explicitly constructed with its own configuration and
/// owns its raw input state; instances on the same page share nothing
/// mutable. Evaluation runs only on [`FormController::submit`], never per
/// keystroke.
pub struct FormController {
    configuration: Configuration,
    registry: StatusRegistry,
    resolver: Resolver,
    inputs: AHashMap<String, String>,
}

impl FormController {
    pub fn new(configuration: Configuration) -> Self {
        let registry = StatusRegistry::from_configuration(&configuration);
        let resolver = Resolver::new(configuration.rules.clone());
        let inputs = configuration
            .fields
            .iter()
            .map(|field| (field.id.clone(), String::new()))
            .collect();
        Self {
            configuration,
            registry,
            resolver,
            inputs,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn registry(&self) -> &StatusRegistry {
        &self.registry
    }

    /// Records raw input for a declared field. Input for undeclared field
    /// ids is ignored.
    pub fn set_input(&mut self, field_id: &str, raw: impl Into<String>) {
        if let Some(slot) = self.inputs.get_mut(field_id) {
            *slot = raw.into();
        }
    }

    pub fn input(&self, field_id: &str) -> Option<&str> {
        self.inputs.get(field_id).map(String::as_str)
    }

    /// Clears all inputs back to empty strings.
    pub fn reset(&mut self) {
        for slot in self.inputs.values_mut() {
            slot.clear();
        }
    }

    /// Builds the evaluation-time snapshot of all field inputs.
    ///
    /// Number-typed fields with non-empty raw input become numbers;
    /// unparseable input becomes NaN, which then fails every comparison the
    /// same way it did in the configurations' original runtime. Everything
    /// else passes through as a string, including empty strings for
    /// untouched fields.
    pub fn values(&self) -> ValueMap {
        let mut out = ValueMap::default();
        for field in &self.configuration.fields {
            let raw = self
                .inputs
                .get(&field.id)
                .map(String::as_str)
                .unwrap_or_default();
            let value = match &field.field_type {
                FieldType::Number { .. } if !raw.is_empty() => {
                    Value::Number(raw.trim().parse().unwrap_or(f64::NAN))
                }
                _ => Value::Str(raw.to_string()),
            };
            out.insert(field.id.clone(), value);
        }
        out
    }

    /// Evaluates the current inputs and returns a recommendation.
    ///
    /// This never fails: an empty required field short-circuits to the
    /// incomplete recommendation before any rule is evaluated, and an
    /// unmatched rule list resolves to the no-match recommendation.
    pub fn submit(&self) -> Recommendation {
        let incomplete = self.configuration.fields.iter().any(|field| {
            field.required && self.inputs.get(&field.id).is_none_or(|raw| raw.is_empty())
        });
        if incomplete {
            return self.fallback(INCOMPLETE_MESSAGE);
        }

        match self.resolver.resolve(&self.values()) {
            Resolution::Matched {
                outcome, reason, ..
            } => {
                let display = self.registry.display(&outcome.status);
                Recommendation {
                    status: display.key,
                    label: display.label,
                    style: display.style,
                    message: outcome.message,
                    reason: Some(reason),
                }
            }
            Resolution::NoMatch => self.fallback(NO_MATCH_MESSAGE),
        }
    }

    fn fallback(&self, message: &str) -> Recommendation {
        let display = self.registry.display("no");
        Recommendation {
            status: display.key,
            label: display.label,
            style: display.style,
            message: message.to_string(),
            reason: None,
        }
    }
}
