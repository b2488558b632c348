use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::defuzz::centroid;
use crate::dsl::Expr;
use crate::error::{ConfigError, EngineError};
use crate::inputs::Inputs;
use crate::outputs::Outputs;
use crate::rules::Rules;
use crate::truth::Truth;
use crate::variable::{Role, VariableKey, Variables};

/// Mamdani inference with a fixed policy: Zadeh AND/OR over the premise
/// tree, min-clip implication, pointwise-max aggregation, centroid
/// defuzzification.
///
/// `eval` borrows the variables and rules immutably and keeps every piece of
/// per-run state local to the call, so one engine and one configuration can
/// serve any number of concurrent runs. The result is a pure function of the
/// crisp inputs.
#[derive(Default)]
pub struct MamdaniEngine;

impl MamdaniEngine {
    pub fn new() -> Self {
        MamdaniEngine
    }

    pub fn eval<T: Eq + Hash>(
        &self,
        vars: &Variables<T>,
        rules: &Rules<T>,
        inputs: &Inputs,
    ) -> Result<Outputs, EngineError> {
        let run = Run {
            vars,
            rules,
            inputs,
        };

        run.check_inputs()?;

        let strengths = run.firing_strengths()?;
        let aggregates = run.aggregate(&strengths)?;
        let crisp = run.defuzzify(&aggregates)?;

        Ok(Outputs::new(
            crisp,
            aggregates,
            strengths.into_iter().map(Truth::value).collect(),
        ))
    }
}

/// One inference run. Borrows the shared read-only configuration; everything
/// it computes is owned by the call and handed back in `Outputs`.
struct Run<'a, T> {
    vars: &'a Variables<T>,
    rules: &'a Rules<T>,
    inputs: &'a Inputs,
}

impl<T: Eq + Hash> Run<'_, T> {
    /// Every declared antecedent must have received exactly one crisp value
    /// before rule evaluation proceeds.
    fn check_inputs(&self) -> Result<(), ConfigError> {
        for (key, var) in self.vars.0.iter() {
            if var.role == Role::Antecedent && !self.inputs.0.contains_key(&key) {
                return Err(ConfigError::MissingInput(var.name.clone()));
            }
        }

        Ok(())
    }

    /// Fuzzifies the inputs and folds each premise tree down to the rule's
    /// firing strength, in rule-base order.
    fn firing_strengths(&self) -> Result<Vec<Truth>, ConfigError> {
        let mut strengths = Vec::with_capacity(self.rules.0.len());

        for (i, rule) in self.rules.0.iter().enumerate() {
            let strength = self.eval_premise(&rule.premise)?;

            trace!(rule = i, strength = strength.value(), "premise evaluated");
            strengths.push(strength);
        }

        Ok(strengths)
    }

    fn eval_premise(&self, expr: &Expr<T>) -> Result<Truth, ConfigError> {
        match expr {
            Expr::Is(var_key, term) => {
                let var = &self.vars.0[*var_key];

                if var.role != Role::Antecedent {
                    return Err(ConfigError::ConsequentInPremise(var.name.clone()));
                }

                let membership = var
                    .membership(term)
                    .ok_or_else(|| ConfigError::UnknownTerm(var.name.clone()))?;

                // Present for every antecedent once check_inputs has passed
                Ok(membership.degree(self.inputs.0[var_key]))
            },
            Expr::And(exprs) => {
                let mut truth = Truth::TRUE;

                for expr in exprs {
                    truth = truth.and(self.eval_premise(expr)?);
                }

                Ok(truth)
            },
            Expr::Or(exprs) => {
                let mut truth = Truth::FALSE;

                for expr in exprs {
                    truth = truth.or(self.eval_premise(expr)?);
                }

                Ok(truth)
            },
        }
    }

    /// Clips each rule's consequent set by its firing strength and unions the
    /// contributions per output variable with a pointwise max.
    ///
    /// A zero-strength rule still claims its output variable's aggregate (as
    /// all zeros), so "no rule fired" is observable downstream instead of
    /// producing a missing entry.
    fn aggregate(&self, strengths: &[Truth]) -> Result<HashMap<VariableKey, Vec<f64>>, ConfigError> {
        let mut aggregates: HashMap<VariableKey, Vec<f64>> = HashMap::new();

        for (rule, strength) in self.rules.0.iter().zip(strengths) {
            let var_key = rule.consequence.var;
            let var = &self.vars.0[var_key];

            if var.role != Role::Consequent {
                return Err(ConfigError::AntecedentAsConsequent(var.name.clone()));
            }

            let membership = var
                .membership(&rule.consequence.term)
                .ok_or_else(|| ConfigError::UnknownTerm(var.name.clone()))?;
            let aggregate = aggregates
                .entry(var_key)
                .or_insert_with(|| vec![0.0; var.universe.len()]);

            for (x, slot) in var.universe.iter().zip(aggregate.iter_mut()) {
                let clipped = strength.and(membership.degree(*x)).value();

                if clipped > *slot {
                    *slot = clipped;
                }
            }
        }

        Ok(aggregates)
    }

    /// Centroid of area per output variable. An all-zero aggregate has no
    /// centroid and surfaces as `EngineError::Undefined` rather than a
    /// fabricated number.
    fn defuzzify(
        &self,
        aggregates: &HashMap<VariableKey, Vec<f64>>,
    ) -> Result<HashMap<VariableKey, f64>, EngineError> {
        let mut crisp = HashMap::with_capacity(aggregates.len());

        for (var_key, aggregate) in aggregates {
            let var = &self.vars.0[*var_key];

            match centroid(&var.universe, aggregate) {
                Some(value) => {
                    debug!(variable = %var.name, value, "defuzzified");
                    crisp.insert(*var_key, value);
                },
                None => {
                    return Err(EngineError::Undefined {
                        variable: var.name.clone(),
                    });
                },
            }
        }

        Ok(crisp)
    }
}

#[cfg(test)]
use crate::membership::Triangular;
#[cfg(test)]
use crate::terms::{Key, Terms};
#[cfg(test)]
use crate::variable::Variable;

#[cfg(test)]
#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
enum Temp {
    Cool,
    Warm,
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
enum Speed {
    Slow,
    Fast,
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum FanTerms {
    Temp(Temp),
    Speed(Speed),
}

#[cfg(test)]
impl From<Temp> for FanTerms {
    fn from(t: Temp) -> Self {
        Self::Temp(t)
    }
}

#[cfg(test)]
impl From<Speed> for FanTerms {
    fn from(s: Speed) -> Self {
        Self::Speed(s)
    }
}

/// Minimal fan controller: one antecedent, one consequent, two terms each.
#[cfg(test)]
fn fan_system() -> (Variables<FanTerms>, Variable<Temp>, Variable<Speed>) {
    let mut temp_terms = Terms::new();
    let mut speed_terms = Terms::new();

    temp_terms.insert(Temp::Cool, Triangular::new(0., 0., 5.).unwrap());
    temp_terms.insert(Temp::Warm, Triangular::new(5., 10., 10.).unwrap());
    speed_terms.insert(Speed::Slow, Triangular::new(0., 0., 50.).unwrap());
    speed_terms.insert(Speed::Fast, Triangular::new(50., 100., 100.).unwrap());

    let mut vars = Variables::new();
    let temp = vars.antecedent("Temperature", 0. ..=10., temp_terms, Some(1.));
    let speed = vars.consequent("FanSpeed", 0. ..=100., speed_terms, Some(1.));

    (vars, temp, speed)
}

#[test]
fn test_fan_controller() {
    let (vars, temp, speed) = fan_system();
    let mut rules = Rules::new();

    rules.add(temp.is(Temp::Cool), speed.becomes(Speed::Slow));
    rules.add(temp.is(Temp::Warm), speed.becomes(Speed::Fast));

    let engine = MamdaniEngine::new();
    let mut inputs = Inputs::new();

    inputs.add(temp, 10.);

    let outputs = engine.eval(&vars, &rules, &inputs).unwrap();

    assert_eq!(outputs.firing_strengths(), &[0., 1.]);

    let fast = outputs.crisp(speed).unwrap();

    assert!(fast > 80. && fast <= 100.);

    let mut inputs = Inputs::new();

    inputs.add(temp, 0.);

    let outputs = engine.eval(&vars, &rules, &inputs).unwrap();
    let slow = outputs.crisp(speed).unwrap();

    assert!(slow >= 0. && slow < 20.);
    assert!(slow < fast);
}

#[test]
fn test_no_rule_fired_is_undefined() {
    let (vars, temp, speed) = fan_system();
    let mut rules = Rules::new();

    rules.add(temp.is(Temp::Cool), speed.becomes(Speed::Slow));
    rules.add(temp.is(Temp::Warm), speed.becomes(Speed::Fast));

    let mut inputs = Inputs::new();

    // Cool and Warm are both zero exactly at 5
    inputs.add(temp, 5.);

    let result = MamdaniEngine::new().eval(&vars, &rules, &inputs);

    assert_eq!(
        result.unwrap_err(),
        EngineError::Undefined {
            variable: "FanSpeed".into()
        }
    );
}

#[test]
fn test_missing_input_is_config_error() {
    let (vars, temp, speed) = fan_system();
    let mut rules = Rules::new();

    rules.add(temp.is(Temp::Cool), speed.becomes(Speed::Slow));

    let result = MamdaniEngine::new().eval(&vars, &rules, &Inputs::new());

    assert_eq!(
        result.unwrap_err(),
        EngineError::Config(ConfigError::MissingInput("Temperature".into()))
    );
}

#[test]
fn test_adding_a_rule_never_lowers_the_aggregate() {
    let (vars, temp, speed) = fan_system();
    let engine = MamdaniEngine::new();
    let mut inputs = Inputs::new();

    inputs.add(temp, 3.);

    let mut rules = Rules::new();

    rules.add(temp.is(Temp::Cool), speed.becomes(Speed::Slow));

    let before = engine.eval(&vars, &rules, &inputs).unwrap();

    rules.add(temp.is(Temp::Cool), speed.becomes(Speed::Fast));

    let after = engine.eval(&vars, &rules, &inputs).unwrap();
    let before_agg = before.aggregate(speed).unwrap();
    let after_agg = after.aggregate(speed).unwrap();

    assert!(before_agg
        .iter()
        .zip(after_agg.iter())
        .all(|(b, a)| a >= b));
    assert!(before_agg
        .iter()
        .zip(after_agg.iter())
        .any(|(b, a)| a > b));
}

#[test]
fn test_premise_on_consequent_is_rejected() {
    let (vars, temp, speed) = fan_system();
    let mut rules = Rules::new();

    rules.add(speed.is(Speed::Fast), speed.becomes(Speed::Fast));

    let mut inputs = Inputs::new();

    inputs.add(temp, 5.);

    let result = MamdaniEngine::new().eval(&vars, &rules, &inputs);

    assert_eq!(
        result.unwrap_err(),
        EngineError::Config(ConfigError::ConsequentInPremise("FanSpeed".into()))
    );
}

#[test]
fn test_consequent_on_antecedent_is_rejected() {
    let (vars, temp, _speed) = fan_system();
    let mut rules = Rules::new();

    rules.add(temp.is(Temp::Cool), temp.becomes(Temp::Warm));

    let mut inputs = Inputs::new();

    inputs.add(temp, 2.);

    let result = MamdaniEngine::new().eval(&vars, &rules, &inputs);

    assert_eq!(
        result.unwrap_err(),
        EngineError::Config(ConfigError::AntecedentAsConsequent("Temperature".into()))
    );
}
