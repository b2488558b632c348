use std::collections::HashMap;
use std::marker::PhantomData;
use std::{hash::Hash, ops::RangeInclusive};

use slotmap::{new_key_type, SlotMap};

use crate::linspace::Linspace;
use crate::membership::Triangular;
use crate::terms::{Term as FixedKey, Terms};

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// A typed, copyable handle to a registered linguistic variable.
///
/// The phantom parameter ties the handle to the variable's own term enum, so
/// `var.is(term)` can only pair a variable with one of its own terms.
pub struct Variable<I>(pub(crate) VariableKey, PhantomData<I>);

impl<I> Clone for Variable<I> {
    fn clone(&self) -> Self {
        Variable(self.0, PhantomData)
    }
}

impl<I> Copy for Variable<I> {}

/// Which side of a rule a variable may appear on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// Consumes one crisp input per inference run.
    Antecedent,
    /// Produces an aggregated fuzzy set, defuzzified to a crisp result.
    Consequent,
}

/// The registry of all linguistic variables of one inference system.
///
/// Built once at startup and immutable afterwards; inference runs only ever
/// read it, so any number of concurrent runs may share it without locking.
#[derive(Default)]
pub struct Variables<T>(pub(crate) SlotMap<VariableKey, LinguisticVariable<T>>);

impl<T: Eq + Hash> Variables<T> {
    pub fn new() -> Self {
        Self(SlotMap::with_key())
    }

    /// Registers an input variable. If the step is not provided, it defaults
    /// to 0.1.
    pub fn antecedent<I: Into<T> + FixedKey + 'static>(
        &mut self,
        name: impl Into<String>,
        universe_range: RangeInclusive<f64>,
        terms: Terms<I>,
        step: Option<f64>,
    ) -> Variable<I> {
        self.insert(name.into(), Role::Antecedent, universe_range, terms, step)
    }

    /// Registers an output variable. If the step is not provided, it defaults
    /// to 0.1.
    pub fn consequent<I: Into<T> + FixedKey + 'static>(
        &mut self,
        name: impl Into<String>,
        universe_range: RangeInclusive<f64>,
        terms: Terms<I>,
        step: Option<f64>,
    ) -> Variable<I> {
        self.insert(name.into(), Role::Consequent, universe_range, terms, step)
    }

    fn insert<I: Into<T> + FixedKey + 'static>(
        &mut self,
        name: String,
        role: Role,
        universe_range: RangeInclusive<f64>,
        terms: Terms<I>,
        step: Option<f64>,
    ) -> Variable<I> {
        let term_memberships = terms.0.iter().map(|(k, mf)| (k.into(), *mf));
        let key = self.0.insert(LinguisticVariable::new(
            name,
            role,
            universe_range,
            term_memberships,
            terms.0.len(),
            step.unwrap_or(0.1),
        ));

        Variable(key, PhantomData)
    }
}

/// One linguistic variable: a name, a role, a fixed universe grid, and the
/// membership function of each of its terms.
pub(crate) struct LinguisticVariable<T> {
    pub(crate) name: String,
    pub(crate) role: Role,
    pub(crate) universe: Vec<f64>,
    terms: HashMap<T, Triangular>,
}

impl<T: Eq + Hash> LinguisticVariable<T> {
    fn new(
        name: String,
        role: Role,
        universe_range: RangeInclusive<f64>,
        term_memberships: impl IntoIterator<Item = (T, Triangular)>,
        n_terms: usize,
        step: f64,
    ) -> Self {
        let min_u = *universe_range.start();
        let max_u = *universe_range.end();
        // floor is closest approx to what python does for int() conversion. But at least one edgecase exists
        // where the decimals are really long: int(4.999999999999999999) == 5
        let num = ((max_u - min_u) / step).floor() as usize + 1;
        let universe = Linspace::new(min_u, max_u, num).collect();
        let mut terms = HashMap::with_capacity(n_terms);

        for (term, membership) in term_memberships {
            terms.insert(term, membership);
        }

        Self {
            name,
            role,
            universe,
            terms,
        }
    }

    pub(crate) fn membership(&self, term: &T) -> Option<Triangular> {
        self.terms.get(term).copied()
    }
}

#[test]
fn test_universe_grid() {
    use crate::terms::Key;

    #[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
    enum Level {
        Low,
        High,
    }

    let mut terms = Terms::new();

    terms.insert(Level::Low, Triangular::new(0., 0., 5.).unwrap());
    terms.insert(Level::High, Triangular::new(5., 10., 10.).unwrap());

    let mut vars = Variables::<Level>::new();
    let level = vars.antecedent("Level", 0. ..=10., terms, Some(1.));
    let var = &vars.0[level.0];

    assert_eq!(var.role, Role::Antecedent);
    assert_eq!(var.universe.len(), 11);
    assert_eq!(var.universe.first(), Some(&0.));
    assert_eq!(var.universe.last(), Some(&10.));
    assert!(var.membership(&Level::Low).is_some());
}
