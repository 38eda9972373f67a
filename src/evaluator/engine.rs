use crate::ast::{
    coerce_number, loose_eq, strict_eq, CompareOp, Condition, EvaluationTrace, Value, ValueMap,
};

/// Hard bound on condition nesting. Subtrees past this depth resolve to
/// [`EvaluationTrace::Invalid`] (false) instead of recursing further.
pub const MAX_DEPTH: usize = 100;

/// The core recursive engine for evaluating a single condition tree.
///
/// Evaluation is total: no structurally-typed input can make it panic or
/// return an error. Anything the engine cannot make sense of resolves to
/// false.
pub struct ConditionEngine<'a> {
    values: &'a ValueMap,
}

impl<'a> ConditionEngine<'a> {
    pub fn new(values: &'a ValueMap) -> Self {
        Self { values }
    }

    /// Evaluates the condition and returns a trace of the execution.
    pub fn evaluate(&self, condition: &Condition) -> EvaluationTrace {
        self.evaluate_recursive(condition, 0)
    }

    fn evaluate_recursive(&self, condition: &Condition, depth: usize) -> EvaluationTrace {
        if depth >= MAX_DEPTH {
            return EvaluationTrace::Invalid;
        }

        match condition {
            Condition::All(children) => {
                let mut traces = Vec::with_capacity(children.len());
                // Vacuously true when empty.
                let mut outcome = true;
                for child in children {
                    if !outcome {
                        traces.push(EvaluationTrace::NotEvaluated);
                        continue;
                    }
                    let trace = self.evaluate_recursive(child, depth + 1);
                    outcome = trace.get_outcome();
                    traces.push(trace);
                }
                EvaluationTrace::Group {
                    op_symbol: "AND",
                    children: traces,
                    outcome,
                }
            }
            Condition::Any(children) => {
                let mut traces = Vec::with_capacity(children.len());
                let mut outcome = false;
                for child in children {
                    if outcome {
                        traces.push(EvaluationTrace::NotEvaluated);
                        continue;
                    }
                    let trace = self.evaluate_recursive(child, depth + 1);
                    outcome = trace.get_outcome();
                    traces.push(trace);
                }
                EvaluationTrace::Group {
                    op_symbol: "OR",
                    children: traces,
                    outcome,
                }
            }
            Condition::Not(child) => {
                let child_trace = self.evaluate_recursive(child, depth + 1);
                let outcome = !child_trace.get_outcome();
                EvaluationTrace::UnaryOp {
                    op_symbol: "NOT",
                    child: Box::new(child_trace),
                    outcome,
                }
            }
            Condition::In { field, values } => {
                let observed = self.values.get(field);
                let outcome =
                    observed.is_some_and(|v| values.iter().any(|member| strict_eq(v, member)));
                EvaluationTrace::Membership {
                    field: field.clone(),
                    observed: observed.cloned(),
                    members: values.clone(),
                    outcome,
                }
            }
            Condition::Compare { field, op, value } => {
                let observed = self.values.get(field);
                // A field absent from the value map fails every operator.
                let outcome = observed.is_some_and(|v| compare(v, *op, value));
                EvaluationTrace::Comparison {
                    field: field.clone(),
                    op_symbol: op.symbol(),
                    observed: observed.cloned(),
                    literal: value.clone(),
                    outcome,
                }
            }
            Condition::Invalid => EvaluationTrace::Invalid,
        }
    }
}

/// Evaluates a condition to a plain boolean, without collecting a trace.
pub fn evaluate_condition(condition: &Condition, values: &ValueMap) -> bool {
    ConditionEngine::new(values).evaluate(condition).get_outcome()
}

fn compare(observed: &Value, op: CompareOp, literal: &Value) -> bool {
    match op {
        CompareOp::Eq => loose_eq(observed, literal),
        CompareOp::Ne => !loose_eq(observed, literal),
        CompareOp::Gt => ordering(observed, literal, |a, b| a > b),
        CompareOp::Ge => ordering(observed, literal, |a, b| a >= b),
        CompareOp::Lt => ordering(observed, literal, |a, b| a < b),
        CompareOp::Le => ordering(observed, literal, |a, b| a <= b),
    }
}

fn ordering<F>(left: &Value, right: &Value, f: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    match (coerce_number(left), coerce_number(right)) {
        (Some(l), Some(r)) => f(l, r),
        _ => false,
    }
}
