//! Error types for the inference engine.

use thiserror::Error;

/// A defect in the shared configuration or in how a call was assembled.
///
/// These indicate programming errors (malformed membership functions, a rule
/// referencing a variable the wrong way, a missing input), not runtime data
/// conditions. They never corrupt the shared configuration.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Triangular breakpoints must satisfy `a <= b <= c`.
    #[error("triangular breakpoints must be non-decreasing, got ({a}, {b}, {c})")]
    Breakpoints { a: f64, b: f64, c: f64 },

    /// An antecedent variable received no crisp input for this run.
    #[error("no crisp input supplied for antecedent `{0}`")]
    MissingInput(String),

    /// A rule premise referenced a consequent variable.
    #[error("`{0}` is a consequent and cannot appear in a rule premise")]
    ConsequentInPremise(String),

    /// A rule consequent targeted an antecedent variable.
    #[error("`{0}` is an antecedent and cannot be a rule consequent")]
    AntecedentAsConsequent(String),

    /// A rule referenced a term the variable does not define.
    #[error("variable `{0}` does not define the referenced term")]
    UnknownTerm(String),
}

/// Outcome taxonomy for a single inference run.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No rule fired with positive strength for the output variable, so the
    /// aggregated fuzzy set has zero area and the centroid is undefined.
    /// Recoverable: the caller chooses the fallback policy; the engine never
    /// substitutes a number of its own.
    #[error("no rule fired for output `{variable}`; the result is undefined")]
    Undefined { variable: String },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
