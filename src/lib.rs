//! # Suisen - First-Match Rule Evaluation Engine
//!
//! **Suisen** is a rule evaluation engine for embeddable decision-tool
//! forms: given the values a user typed into a small form and an ordered
//! list of conditional rules, it determines which rule fires first and
//! returns the associated recommendation status and message, together with
//! a human-readable explanation of the logic that produced it.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic and operates on a canonical
//! [`Configuration`](tool::Configuration) model. The primary workflow is:
//!
//! 1. **Load Your Configuration**: Parse the embedding application's JSON
//!    with [`Configuration::from_json`](tool::Configuration::from_json), or
//!    implement [`IntoConfiguration`](tool::IntoConfiguration) for your own
//!    wire format.
//! 2. **Instantiate a Controller**: Create one
//!    [`FormController`](form::FormController) per tool instance on the
//!    page; each owns its configuration and input state.
//! 3. **Collect Inputs**: Feed raw user input through
//!    [`set_input`](form::FormController::set_input).
//! 4. **Submit**: [`submit`](form::FormController::submit) validates
//!    required fields, resolves the rules first-match, and hands back a
//!    fully-styled [`Recommendation`](form::Recommendation). It never
//!    fails: malformed conditions evaluate to false and unknown status keys
//!    fall back to the default treatment.
//!
//! Lower-level pieces are available individually: the
//! [`ConditionEngine`](evaluator::ConditionEngine) evaluates a single
//! condition tree against a [`ValueMap`](ast::ValueMap), and the
//! [`Resolver`](evaluator::Resolver) runs first-match resolution without
//! any form plumbing.
//!
//! ## Quick Start
//!
//! ```rust
//! # fn main() -> Result<(), suisen::error::ConfigError> {
//! use suisen::prelude::*;
//!
//! let config = Configuration::from_json(
//!     r#"{
//!         "title": "Plan picker",
//!         "fields": [
//!             { "id": "age", "label": "Age", "type": "number", "required": true },
//!             { "id": "plan", "label": "Plan", "type": "select",
//!               "options": [
//!                 { "value": "basic", "label": "Basic" },
//!                 { "value": "pro", "label": "Pro" }
//!               ] }
//!         ],
//!         "rules": [
//!             { "if": { "all": [
//!                 { "field": "age", "op": ">=", "value": 18 },
//!                 { "in": { "field": "plan", "values": ["pro"] } }
//!               ] },
//!               "then": { "status": "ok", "message": "Pro fits you." } },
//!             { "if": { "field": "age", "op": "<", "value": 18 },
//!               "then": { "status": "no", "message": "Not available yet." } }
//!         ]
//!     }"#,
//! )?;
//!
//! let mut form = FormController::new(config);
//! form.set_input("age", "20");
//! form.set_input("plan", "pro");
//!
//! let recommendation = form.submit();
//! assert_eq!(recommendation.status, "ok");
//! assert_eq!(recommendation.label, "Recommended");
//! assert_eq!(recommendation.message, "Pro fits you.");
//! # Ok(())
//! # }
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod form;
pub mod prelude;
pub mod tool;
pub mod trace;
pub mod ui;
