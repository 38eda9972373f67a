use crate::ast::{EvaluationTrace, Value};
use itertools::Itertools;

/// Formats evaluation traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format an evaluation trace into a human-readable explanation.
    pub fn format_trace(trace: &EvaluationTrace) -> String {
        // Start the recursive formatting with the lowest possible parent precedence.
        Self::format_recursive(trace, 0)
    }

    /// Recursively formats the trace, adding parentheses only when necessary.
    fn format_recursive(trace: &EvaluationTrace, parent_precedence: u8) -> String {
        let current_precedence = trace.precedence();
        let needs_parens = current_precedence < parent_precedence;

        let mut result = String::new();
        if needs_parens {
            result.push('(');
        }

        match trace {
            EvaluationTrace::Group {
                op_symbol,
                children,
                outcome,
            } => {
                // Short-circuited children are elided; only the decisive
                // prefix of the group is shown.
                let rendered = children
                    .iter()
                    .filter(|child| !matches!(child, EvaluationTrace::NotEvaluated))
                    .map(|child| Self::format_recursive(child, current_precedence))
                    .collect::<Vec<_>>();
                if rendered.is_empty() {
                    result.push_str(if *outcome { "true" } else { "false" });
                } else {
                    result.push_str(&rendered.join(&format!(" {} ", op_symbol)));
                }
            }
            EvaluationTrace::UnaryOp {
                op_symbol, child, ..
            } => {
                let child_str = Self::format_recursive(child, current_precedence);
                result.push_str(&format!("{} {}", op_symbol, child_str));
            }
            EvaluationTrace::Comparison {
                field,
                op_symbol,
                observed,
                literal,
                ..
            } => {
                result.push_str(&format!(
                    "{} {} {}",
                    Self::format_leaf(field, observed),
                    op_symbol,
                    Self::format_value(literal)
                ));
            }
            EvaluationTrace::Membership {
                field,
                observed,
                members,
                ..
            } => {
                let member_list = members.iter().map(Self::format_value).join(", ");
                result.push_str(&format!(
                    "{} in [{}]",
                    Self::format_leaf(field, observed),
                    member_list
                ));
            }
            EvaluationTrace::Invalid => result.push_str("<invalid condition>"),
            EvaluationTrace::NotEvaluated => {}
        }

        if needs_parens {
            result.push(')');
        }
        result
    }

    fn format_leaf(field: &str, observed: &Option<Value>) -> String {
        match observed {
            Some(value) => format!("${} (was {})", field, Self::format_value(value)),
            None => format!("${} (missing)", field),
        }
    }

    /// Format a value for display. Strings are quoted so that `"5"` and `5`
    /// stay distinguishable in a reason.
    fn format_value(value: &Value) -> String {
        match value {
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Value::Str(s) => format!("\"{}\"", s),
        }
    }
}
