use crate::dsl::{Consequence, Expr};

/// The ordered, immutable rule base.
///
/// Order does not change the inference result (aggregation is a pointwise
/// max), but it is preserved so the per-rule firing strengths reported in
/// [`crate::Outputs`] line up with the order rules were authored in.
#[derive(Default)]
pub struct Rules<T>(pub(crate) Vec<Rule<T>>);

impl<T> Rules<T> {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, premise: Expr<T>, consequence: Consequence<T>) {
        self.0.push(Rule {
            premise,
            consequence,
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub(crate) struct Rule<T> {
    pub(crate) premise: Expr<T>,
    pub(crate) consequence: Consequence<T>,
}
