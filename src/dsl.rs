use crate::{Variable, VariableKey};

/// An antecedent expression tree.
///
/// Leaves test one variable against one of its terms; internal nodes combine
/// child truths with the Zadeh operators (`And` = min, `Or` = max).
pub enum Expr<T> {
    Is(VariableKey, T),
    And(Vec<Expr<T>>),
    Or(Vec<Expr<T>>),
}

impl<T> Expr<T> {
    pub fn or(self, rhs: Expr<T>) -> Self {
        Expr::Or(vec![self, rhs])
    }

    pub fn and(self, rhs: Expr<T>) -> Self {
        Expr::And(vec![self, rhs])
    }

    pub fn and2(self, rhs: Expr<T>, rhs2: Expr<T>) -> Self {
        Expr::And(vec![self, rhs, rhs2])
    }
}

/// The "then" side of a rule: exactly one term assignment on one output
/// variable.
pub struct Consequence<T> {
    pub(crate) var: VariableKey,
    pub(crate) term: T,
}

impl<I> Variable<I> {
    /// Builds a premise leaf: "this variable is in this fuzzy set".
    pub fn is<T>(self, rhs: I) -> Expr<T>
    where
        I: Into<T>,
    {
        Expr::Is(self.0, rhs.into())
    }

    /// Builds a consequent assignment: "then this variable becomes this set".
    pub fn becomes<T>(self, rhs: I) -> Consequence<T>
    where
        I: Into<T>,
    {
        Consequence {
            var: self.0,
            term: rhs.into(),
        }
    }
}
