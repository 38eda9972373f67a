use super::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A boolean condition tree evaluated against a [`ValueMap`](super::ValueMap).
///
/// The variants form a closed vocabulary: configurations authored against it
/// must keep evaluating identically across releases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// True iff every child is true. An empty group is vacuously true.
    All(Vec<Condition>),
    /// True iff at least one child is true. An empty group is false.
    Any(Vec<Condition>),
    /// Logical negation of the child.
    Not(Box<Condition>),
    /// Strict same-type membership of the field's value in `values`.
    In { field: String, values: Vec<Value> },
    /// Binary comparison of the field's value against a literal scalar.
    Compare {
        field: String,
        op: CompareOp,
        value: Value,
    },
    /// Produced by the wire-format converter for nodes it cannot recognize.
    /// Always evaluates to false.
    Invalid,
}

/// The comparison operators recognized in rule configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CompareOp {
    /// Parses the wire-format operator symbol. Unknown symbols are not an
    /// error at this level; callers map them to [`Condition::Invalid`].
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(CompareOp::Eq),
            "!=" => Some(CompareOp::Ne),
            ">" => Some(CompareOp::Gt),
            ">=" => Some(CompareOp::Ge),
            "<" => Some(CompareOp::Lt),
            "<=" => Some(CompareOp::Le),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
        }
    }

    /// Whether this operator coerces both operands to numbers.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            CompareOp::Gt | CompareOp::Ge | CompareOp::Lt | CompareOp::Le
        )
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
