use crate::ast::ValueMap;
use crate::tool::{Outcome, Rule};
use crate::trace::TraceFormatter;

mod engine;

pub use engine::{evaluate_condition, ConditionEngine, MAX_DEPTH};

/// The result of a resolution run.
///
/// `NoMatch` is an ordinary outcome, not an error: the embedding
/// application decides how to present "no recommendation".
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Matched {
        outcome: Outcome,
        /// Position of the matched rule in the authored list.
        rule_index: usize,
        /// A human-readable explanation of the logic that led to the match.
        reason: String,
    },
    NoMatch,
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Resolution::Matched { outcome, .. } => Some(outcome),
            Resolution::NoMatch => None,
        }
    }
}

/// Resolves an ordered rule list against value maps.
///
/// Rule order encodes priority: the first rule whose condition holds wins
/// and later rules are not evaluated, so a specific rule must be listed
/// before a general catch-all. A `Resolver` holds no mutable state and can
/// be used repeatedly and safely across threads.
pub struct Resolver {
    rules: Vec<Rule>,
}

impl Resolver {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the outcome of the first rule whose condition evaluates true.
    ///
    /// A rule carrying an invalid condition is skipped exactly as if its
    /// condition were false; it never aborts resolution of later rules.
    pub fn resolve(&self, values: &ValueMap) -> Resolution {
        let engine = ConditionEngine::new(values);
        for (rule_index, rule) in self.rules.iter().enumerate() {
            let trace = engine.evaluate(&rule.condition);
            if trace.get_outcome() {
                return Resolution::Matched {
                    outcome: rule.outcome.clone(),
                    rule_index,
                    reason: TraceFormatter::format_trace(&trace),
                };
            }
        }
        Resolution::NoMatch
    }
}
