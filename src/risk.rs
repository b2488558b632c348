//! The Claridian clinical risk model: six clinical metrics, fifteen rules,
//! one risk score.
//!
//! Everything here is configuration for the generic engine: the linguistic
//! variables with their hand-authored triangular sets, the rule base, and a
//! thin facade that maps named crisp inputs to an [`Assessment`]. The model
//! is built once at startup and is immutable afterwards; `assess` can be
//! called concurrently from any number of threads.

use crate::error::{ConfigError, EngineError};
use crate::inference::MamdaniEngine;
use crate::inputs::Inputs;
use crate::membership::Triangular;
use crate::rules::Rules;
use crate::terms::{Key, Terms};
use crate::variable::{Variable, Variables};

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum Suspiciousness {
    Low,
    Moderate,
    SubClinical,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum Coherence {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum Sleep {
    Poor,
    Average,
    Good,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum SocialWithdrawal {
    Low,
    Moderate,
    High,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum Attention {
    Intact,
    Impaired,
    Severe,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum Functioning {
    Intact,
    Decline,
    SevereDecline,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Key, PartialEq)]
pub enum Risk {
    Low,
    Medium,
    High,
}

/// The unified term space of the risk model.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ClinicalTerm {
    Suspiciousness(Suspiciousness),
    Coherence(Coherence),
    Sleep(Sleep),
    SocialWithdrawal(SocialWithdrawal),
    Attention(Attention),
    Functioning(Functioning),
    Risk(Risk),
}

impl From<Suspiciousness> for ClinicalTerm {
    fn from(t: Suspiciousness) -> Self {
        Self::Suspiciousness(t)
    }
}

impl From<Coherence> for ClinicalTerm {
    fn from(t: Coherence) -> Self {
        Self::Coherence(t)
    }
}

impl From<Sleep> for ClinicalTerm {
    fn from(t: Sleep) -> Self {
        Self::Sleep(t)
    }
}

impl From<SocialWithdrawal> for ClinicalTerm {
    fn from(t: SocialWithdrawal) -> Self {
        Self::SocialWithdrawal(t)
    }
}

impl From<Attention> for ClinicalTerm {
    fn from(t: Attention) -> Self {
        Self::Attention(t)
    }
}

impl From<Functioning> for ClinicalTerm {
    fn from(t: Functioning) -> Self {
        Self::Functioning(t)
    }
}

impl From<Risk> for ClinicalTerm {
    fn from(t: Risk) -> Self {
        Self::Risk(t)
    }
}

/// The six crisp inputs of one assessment, each expected in `[0, 10]`.
///
/// Range clamping is the transport layer's responsibility; the engine
/// assumes pre-validated values. The default is the mid-range 5.0 for every
/// metric.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskInputs {
    pub suspiciousness: f64,
    pub coherence: f64,
    pub sleep: f64,
    pub social_withdrawal: f64,
    pub attention: f64,
    pub functioning: f64,
}

impl Default for RiskInputs {
    fn default() -> Self {
        RiskInputs {
            suspiciousness: 5.0,
            coherence: 5.0,
            sleep: 5.0,
            social_withdrawal: 5.0,
            attention: 5.0,
            functioning: 5.0,
        }
    }
}

/// Coarse three-bucket interpretation of a score. A presentation convention
/// applied after defuzzification, not part of the fuzzy computation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 65.0 {
            RiskBand::High
        } else if score >= 35.0 {
            RiskBand::Moderate
        } else {
            RiskBand::Low
        }
    }
}

/// One successful risk assessment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    /// Centroid of the aggregated risk set, in `[0, 100]`. No rounding is
    /// applied; rounding for display is the caller's concern.
    pub score: f64,
    pub band: RiskBand,
}

/// The fully assembled risk model: variables, rule base, and engine.
pub struct RiskModel {
    vars: Variables<ClinicalTerm>,
    rules: Rules<ClinicalTerm>,
    engine: MamdaniEngine,
    suspiciousness: Variable<Suspiciousness>,
    coherence: Variable<Coherence>,
    sleep: Variable<Sleep>,
    social_withdrawal: Variable<SocialWithdrawal>,
    attention: Variable<Attention>,
    functioning: Variable<Functioning>,
    risk: Variable<Risk>,
}

impl RiskModel {
    pub fn new() -> Result<Self, ConfigError> {
        let mut suspiciousness_terms = Terms::new();
        let mut coherence_terms = Terms::new();
        let mut sleep_terms = Terms::new();
        let mut social_withdrawal_terms = Terms::new();
        let mut attention_terms = Terms::new();
        let mut functioning_terms = Terms::new();
        let mut risk_terms = Terms::new();

        suspiciousness_terms.insert(Suspiciousness::Low, Triangular::new(0., 0., 4.)?);
        suspiciousness_terms.insert(Suspiciousness::Moderate, Triangular::new(2., 5., 8.)?);
        suspiciousness_terms.insert(Suspiciousness::SubClinical, Triangular::new(6., 10., 10.)?);

        coherence_terms.insert(Coherence::Low, Triangular::new(0., 0., 5.)?);
        coherence_terms.insert(Coherence::Medium, Triangular::new(3., 6., 8.)?);
        coherence_terms.insert(Coherence::High, Triangular::new(6., 10., 10.)?);

        sleep_terms.insert(Sleep::Poor, Triangular::new(0., 0., 4.)?);
        sleep_terms.insert(Sleep::Average, Triangular::new(3., 5., 8.)?);
        sleep_terms.insert(Sleep::Good, Triangular::new(6., 10., 10.)?);

        social_withdrawal_terms.insert(SocialWithdrawal::Low, Triangular::new(0., 0., 4.)?);
        social_withdrawal_terms.insert(SocialWithdrawal::Moderate, Triangular::new(2., 5., 8.)?);
        social_withdrawal_terms.insert(SocialWithdrawal::High, Triangular::new(6., 10., 10.)?);

        attention_terms.insert(Attention::Intact, Triangular::new(0., 0., 4.)?);
        attention_terms.insert(Attention::Impaired, Triangular::new(3., 6., 8.)?);
        attention_terms.insert(Attention::Severe, Triangular::new(6., 10., 10.)?);

        // Lower threshold for "good" functioning
        functioning_terms.insert(Functioning::Intact, Triangular::new(0., 0., 3.)?);
        functioning_terms.insert(Functioning::Decline, Triangular::new(2., 5., 8.)?);
        functioning_terms.insert(Functioning::SevereDecline, Triangular::new(7., 10., 10.)?);

        risk_terms.insert(Risk::Low, Triangular::new(0., 0., 35.)?);
        risk_terms.insert(Risk::Medium, Triangular::new(20., 50., 80.)?);
        risk_terms.insert(Risk::High, Triangular::new(65., 100., 100.)?);

        let mut vars = Variables::new();
        let suspiciousness = vars.antecedent("Suspiciousness", 0. ..=10., suspiciousness_terms, Some(1.));
        let coherence = vars.antecedent("AcousticCoherence", 0. ..=10., coherence_terms, Some(1.));
        let sleep = vars.antecedent("SleepQuality", 0. ..=10., sleep_terms, Some(1.));
        let social_withdrawal =
            vars.antecedent("SocialWithdrawal", 0. ..=10., social_withdrawal_terms, Some(1.));
        let attention = vars.antecedent("Attention", 0. ..=10., attention_terms, Some(1.));
        let functioning = vars.antecedent("RoleFunctioning", 0. ..=10., functioning_terms, Some(1.));
        let risk = vars.consequent("RiskScore", 0. ..=100., risk_terms, Some(1.));

        let mut rules = Rules::with_capacity(15);

        // High risk: positive/disorganization symptoms plus functional or
        // social decline
        rules.add(
            suspiciousness
                .is(Suspiciousness::SubClinical)
                .and(coherence.is(Coherence::Low)),
            risk.becomes(Risk::High),
        );
        rules.add(
            social_withdrawal
                .is(SocialWithdrawal::High)
                .and(functioning.is(Functioning::SevereDecline)),
            risk.becomes(Risk::High),
        );
        rules.add(
            suspiciousness
                .is(Suspiciousness::SubClinical)
                .or(functioning.is(Functioning::SevereDecline)),
            risk.becomes(Risk::High),
        );
        rules.add(
            suspiciousness
                .is(Suspiciousness::SubClinical)
                .and2(sleep.is(Sleep::Poor), attention.is(Attention::Severe)),
            risk.becomes(Risk::High),
        );
        rules.add(
            coherence
                .is(Coherence::Low)
                .and(functioning.is(Functioning::SevereDecline)),
            risk.becomes(Risk::High),
        );

        // Medium risk: moderate symptoms or erosion of protective factors
        rules.add(
            suspiciousness
                .is(Suspiciousness::Moderate)
                .and(social_withdrawal.is(SocialWithdrawal::Moderate)),
            risk.becomes(Risk::Medium),
        );
        rules.add(
            coherence
                .is(Coherence::Medium)
                .and(attention.is(Attention::Impaired)),
            risk.becomes(Risk::Medium),
        );
        rules.add(
            sleep.is(Sleep::Poor).and(attention.is(Attention::Impaired)),
            risk.becomes(Risk::Medium),
        );
        rules.add(
            functioning
                .is(Functioning::Decline)
                .and(suspiciousness.is(Suspiciousness::Low)),
            risk.becomes(Risk::Medium),
        );
        rules.add(
            social_withdrawal.is(SocialWithdrawal::Moderate).and2(
                attention.is(Attention::Impaired),
                functioning.is(Functioning::Decline),
            ),
            risk.becomes(Risk::Medium),
        );
        rules.add(
            suspiciousness
                .is(Suspiciousness::Moderate)
                .and2(coherence.is(Coherence::Medium), sleep.is(Sleep::Average)),
            risk.becomes(Risk::Medium),
        );

        // Low risk: protective factors
        rules.add(
            suspiciousness
                .is(Suspiciousness::Low)
                .and(social_withdrawal.is(SocialWithdrawal::Low)),
            risk.becomes(Risk::Low),
        );
        rules.add(
            sleep.is(Sleep::Good).and(attention.is(Attention::Intact)),
            risk.becomes(Risk::Low),
        );
        rules.add(
            functioning
                .is(Functioning::Intact)
                .and(coherence.is(Coherence::High)),
            risk.becomes(Risk::Low),
        );
        rules.add(
            functioning
                .is(Functioning::Intact)
                .and(sleep.is(Sleep::Good)),
            risk.becomes(Risk::Low),
        );

        Ok(RiskModel {
            vars,
            rules,
            engine: MamdaniEngine::new(),
            suspiciousness,
            coherence,
            sleep,
            social_withdrawal,
            attention,
            functioning,
            risk,
        })
    }

    /// Runs one inference over the six crisp inputs.
    ///
    /// Returns [`EngineError::Undefined`] when no rule fires with positive
    /// strength; whether to substitute a default score in that case is the
    /// caller's policy, not the engine's.
    pub fn assess(&self, inputs: &RiskInputs) -> Result<Assessment, EngineError> {
        let mut crisp = Inputs::new();

        crisp.add(self.suspiciousness, inputs.suspiciousness);
        crisp.add(self.coherence, inputs.coherence);
        crisp.add(self.sleep, inputs.sleep);
        crisp.add(self.social_withdrawal, inputs.social_withdrawal);
        crisp.add(self.attention, inputs.attention);
        crisp.add(self.functioning, inputs.functioning);

        let outputs = self.engine.eval(&self.vars, &self.rules, &crisp)?;
        let score = outputs
            .crisp(self.risk)
            .expect("risk score is defuzzified whenever eval succeeds");

        Ok(Assessment {
            score,
            band: RiskBand::from_score(score),
        })
    }
}

#[test]
fn test_band_thresholds() {
    assert_eq!(RiskBand::from_score(0.0), RiskBand::Low);
    assert_eq!(RiskBand::from_score(34.9), RiskBand::Low);
    assert_eq!(RiskBand::from_score(35.0), RiskBand::Moderate);
    assert_eq!(RiskBand::from_score(64.9), RiskBand::Moderate);
    assert_eq!(RiskBand::from_score(65.0), RiskBand::High);
    assert_eq!(RiskBand::from_score(100.0), RiskBand::High);
}

#[test]
fn test_mid_range_profile_is_moderate() {
    let model = RiskModel::new().unwrap();
    let assessment = model.assess(&RiskInputs::default()).unwrap();

    assert!(assessment.score >= 35.0 && assessment.score < 65.0);
    assert_eq!(assessment.band, RiskBand::Moderate);
}

#[test]
fn test_acute_profile_is_high() {
    let model = RiskModel::new().unwrap();
    let inputs = RiskInputs {
        suspiciousness: 10.0,
        coherence: 0.0,
        sleep: 0.0,
        social_withdrawal: 10.0,
        attention: 10.0,
        functioning: 10.0,
    };
    let assessment = model.assess(&inputs).unwrap();

    assert!(assessment.score >= 65.0);
    assert_eq!(assessment.band, RiskBand::High);
}

#[test]
fn test_subclinical_suspiciousness_with_low_coherence_is_high() {
    let model = RiskModel::new().unwrap();
    // Only the two driving metrics are extreme; the rest stay mid-range.
    // The fully-fired high-risk rule must still outweigh the partially
    // fired medium rules and keep the score at or above the High edge.
    let inputs = RiskInputs {
        suspiciousness: 10.0,
        coherence: 0.0,
        ..RiskInputs::default()
    };
    let assessment = model.assess(&inputs).unwrap();

    assert!(assessment.score >= 65.0);
    assert_eq!(assessment.band, RiskBand::High);
}

#[test]
fn test_protective_profile_is_low() {
    let model = RiskModel::new().unwrap();
    let inputs = RiskInputs {
        suspiciousness: 0.0,
        coherence: 10.0,
        sleep: 10.0,
        social_withdrawal: 0.0,
        attention: 0.0,
        functioning: 0.0,
    };
    let assessment = model.assess(&inputs).unwrap();

    assert!(assessment.score < 35.0);
    assert_eq!(assessment.band, RiskBand::Low);
}

#[test]
fn test_unmapped_profile_is_undefined() {
    let model = RiskModel::new().unwrap();
    // Every rule premise evaluates to zero here: each conjunction pairs a
    // positive term with one that is zero at these inputs (e.g. moderate
    // suspiciousness with high, not moderate, withdrawal), and the one
    // disjunctive rule has both sides at zero.
    let inputs = RiskInputs {
        suspiciousness: 5.0,
        coherence: 1.5,
        sleep: 5.0,
        social_withdrawal: 10.0,
        attention: 5.0,
        functioning: 5.0,
    };

    assert_eq!(
        model.assess(&inputs).unwrap_err(),
        EngineError::Undefined {
            variable: "RiskScore".into()
        }
    );
}

#[test]
fn test_assessment_is_idempotent() {
    let model = RiskModel::new().unwrap();
    let inputs = RiskInputs {
        suspiciousness: 7.3,
        coherence: 2.6,
        sleep: 4.1,
        social_withdrawal: 6.9,
        attention: 5.5,
        functioning: 8.2,
    };
    let first = model.assess(&inputs).unwrap();
    let second = model.assess(&inputs).unwrap();

    assert_eq!(first.score, second.score);
    assert_eq!(first.band, second.band);
}

#[test]
fn test_scores_stay_in_range() {
    let model = RiskModel::new().unwrap();
    let grid = [0.0, 2.5, 5.0, 7.5, 10.0];

    for &suspiciousness in &grid {
        for &coherence in &grid {
            for &sleep in &grid {
                for &social_withdrawal in &grid {
                    for &attention in &grid {
                        for &functioning in &grid {
                            let inputs = RiskInputs {
                                suspiciousness,
                                coherence,
                                sleep,
                                social_withdrawal,
                                attention,
                                functioning,
                            };

                            match model.assess(&inputs) {
                                Ok(assessment) => {
                                    assert!(
                                        (0.0..=100.0).contains(&assessment.score),
                                        "score {} out of range for {:?}",
                                        assessment.score,
                                        inputs,
                                    );
                                },
                                Err(EngineError::Undefined { .. }) => {},
                                Err(err) => panic!("unexpected error: {err}"),
                            }
                        }
                    }
                }
            }
        }
    }
}
