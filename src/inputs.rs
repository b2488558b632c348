use std::collections::HashMap;

use crate::variable::{Variable, VariableKey};

/// The crisp inputs of one inference run, keyed by antecedent variable.
///
/// Values are assumed already validated against the variable's range by the
/// caller; each variable takes exactly one value, a second `add` for the same
/// variable replaces the first.
#[derive(Default)]
pub struct Inputs(pub(crate) HashMap<VariableKey, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    pub fn add<I>(&mut self, var: Variable<I>, val: f64) {
        self.0.insert(var.0, val);
    }
}
