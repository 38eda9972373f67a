use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime scalar types observed during evaluation.
///
/// Form inputs arrive as strings; only number-typed fields with non-empty
/// input are promoted to `Number` before evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Str(String),
    Number(f64),
}

/// The evaluation-time snapshot of all field inputs, keyed by field id.
pub type ValueMap = AHashMap<String, Value>;

// Manual implementation to handle f64
impl Eq for Value {}

// Manual implementation to handle f64 by hashing its bits
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Str(s) => s.hash(state),
            Value::Number(n) => n.to_bits().hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

/// Coerces a value to a finite number for ordering comparisons.
///
/// Legacy form-runtime rules apply: numbers pass through unless non-finite;
/// strings are trimmed and parsed as decimal floats; the empty string
/// coerces to 0. `None` means the coercion failed and the enclosing
/// comparison is false.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.is_finite().then_some(*n),
        Value::Str(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Some(0.0);
            }
            trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
        }
    }
}

/// Loose equality, as used by the `==`/`!=` operators.
///
/// Same-type operands compare directly. Mixed string/number operands are
/// both coerced through [`coerce_number`]; if either side fails to coerce,
/// the operands are not equal. This reproduces `"5" == 5` from the
/// configurations' original runtime and must not be tightened.
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Str(l), Value::Str(r)) => l == r,
        (Value::Number(l), Value::Number(r)) => l == r,
        _ => matches!(
            (coerce_number(left), coerce_number(right)),
            (Some(l), Some(r)) if l == r
        ),
    }
}

/// Strict same-type equality, as used by membership tests.
///
/// A number is never equal to a string here, no matter how it prints.
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Str(l), Value::Str(r)) => l == r,
        (Value::Number(l), Value::Number(r)) => l == r,
        _ => false,
    }
}
