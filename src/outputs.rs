use std::collections::HashMap;

use crate::variable::{Variable, VariableKey};

/// The result of one inference run.
///
/// Holds the defuzzified crisp value per output variable, plus the
/// intermediate products useful for debugging and plotting: each rule's
/// firing strength (in rule-base order) and each output variable's
/// aggregated fuzzy set over its universe grid.
#[derive(Debug)]
pub struct Outputs {
    crisp: HashMap<VariableKey, f64>,
    aggregates: HashMap<VariableKey, Vec<f64>>,
    firing_strengths: Vec<f64>,
}

impl Outputs {
    pub(crate) fn new(
        crisp: HashMap<VariableKey, f64>,
        aggregates: HashMap<VariableKey, Vec<f64>>,
        firing_strengths: Vec<f64>,
    ) -> Self {
        Self {
            crisp,
            aggregates,
            firing_strengths,
        }
    }

    /// The defuzzified value of an output variable.
    pub fn crisp<I>(&self, var: Variable<I>) -> Option<f64> {
        self.crisp.get(&var.0).copied()
    }

    /// The aggregated fuzzy set of an output variable, pointwise over its
    /// universe grid.
    pub fn aggregate<I>(&self, var: Variable<I>) -> Option<&[f64]> {
        self.aggregates.get(&var.0).map(|agg| agg.as_slice())
    }

    /// Per-rule firing strengths, in the order the rules were added.
    pub fn firing_strengths(&self) -> &[f64] {
        &self.firing_strengths
    }
}
