//! Mamdani fuzzy inference core for the Claridian psychosis risk score.
//!
//! Six clinical metrics (each scaled 0–10) are fuzzified against triangular
//! membership functions, combined by a fixed fifteen-rule base with Zadeh
//! AND/OR, clipped and aggregated per output variable, and defuzzified by
//! centroid of area into a 0–100 score with a coarse Low/Moderate/High band.
//!
//! The crate splits into a generic engine — [`Variables`], [`Rules`],
//! [`MamdaniEngine`] — and the clinical configuration in [`risk`]. All
//! configuration is built once and read-only afterwards; each call to
//! [`RiskModel::assess`] owns its run state, so concurrent assessments need
//! no locking. Transport concerns (HTTP, JSON validation, range clamping,
//! fallback policy for an undefined result) live outside this crate.
//!
//! ```
//! use claridian_core::{RiskInputs, RiskModel};
//!
//! let model = RiskModel::new().unwrap();
//! let assessment = model.assess(&RiskInputs::default()).unwrap();
//!
//! assert!(assessment.score >= 0.0 && assessment.score <= 100.0);
//! ```

pub mod defuzz;
mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod membership;
mod outputs;
pub mod risk;
mod rules;
mod terms;
mod truth;
mod variable;

pub use dsl::{Consequence, Expr};
pub use error::{ConfigError, EngineError, Result};
pub use inference::MamdaniEngine;
pub use inputs::Inputs;
pub use membership::Triangular;
pub use outputs::Outputs;
pub use risk::{Assessment, RiskBand, RiskInputs, RiskModel};
pub use rules::Rules;
pub use terms::{Key, Term, Terms};
pub use truth::Truth;
pub use variable::{Role, Variable, VariableKey, Variables};
