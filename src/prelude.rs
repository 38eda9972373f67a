//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! suisen crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use suisen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load and convert the configuration
//! let config_json = std::fs::read_to_string("path/to/config.json")?;
//! let config = Configuration::from_json(&config_json)?;
//!
//! // Drive one tool instance and evaluate
//! let mut form = FormController::new(config);
//! form.set_input("age", "20");
//! let recommendation = form.submit();
//!
//! println!("{}: {}", recommendation.label, recommendation.message);
//! # Ok(())
//! # }
//! ```

// Condition trees and runtime values
pub use crate::ast::{
    coerce_number, loose_eq, strict_eq, CompareOp, Condition, EvaluationTrace, Value, ValueMap,
};

// Evaluation and resolution
pub use crate::evaluator::{evaluate_condition, ConditionEngine, Resolution, Resolver};

// Configuration model and status display
pub use crate::tool::{
    Configuration, FieldSpec, FieldType, IntoConfiguration, Outcome, Rule, SelectOption,
    StatusDisplay, StatusRegistry, StatusStyle, ToolArtifact,
};

// Form boundary
pub use crate::form::{FormController, Recommendation};

// Wire format
pub use crate::ui::UiConfig;

// Error types
pub use crate::error::{ArtifactError, ConfigError};

// Trace formatting
pub use crate::trace::TraceFormatter;

// Hash map flavor used throughout this crate
pub use ahash::AHashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
