//! Bayesian evaluation of mutually exclusive hypotheses.
//!
//! A [`Hypothesis`] pairs a prior with the outcome distribution that would
//! hold if the hypothesis were true, plus the boolean variable states it
//! expects. A [`Hypotheses`] collection normalizes per-hypothesis evidence
//! scores into posterior weights and mixes the outcome distributions
//! accordingly.
//!
//! Structural invariants (consistent variable sets, priors summing to 1)
//! are checked once via [`Hypotheses::validate`], not on every evaluation.
//! Evidence completeness can only be checked per evaluation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use pd_math::normalize_log_probs;

use crate::distribution::{is_probability, Distribution, DistributionError, TOLERANCE};
use crate::mixture::{mixture, MixtureComponent, MixtureError};

/// Errors raised while validating or evaluating hypotheses.
#[derive(Debug, Error)]
pub enum HypothesisError {
    #[error("hypothesis name is blank")]
    BlankName,
    #[error("invalid prior probability: {prior}")]
    InvalidPrior { prior: f64 },
    #[error("incorrect variables in hypothesis: expected={expected:?}, actual={actual:?}")]
    VariableMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
    #[error(transparent)]
    InvalidDistribution(#[from] DistributionError),
    #[error("variable {name} is missing from the evidence")]
    MissingVariable { name: String },
    #[error("no hypotheses")]
    NoHypotheses,
    #[error("hypothesis {name} is inconsistent with the others")]
    InconsistentHypothesis {
        name: String,
        #[source]
        source: Box<HypothesisError>,
    },
    #[error("hypothesis priors do not sum to 1: total={total}")]
    PriorsDoNotSumToOne { total: f64 },
    #[error("all hypothesis scores are zero under the evidence")]
    AllScoresZero,
    #[error(transparent)]
    Mixture(#[from] MixtureError),
}

/// A named, prior-weighted explanation that predicts an outcome
/// distribution if true.
///
/// Never mutated after construction; validated once against the variable
/// set shared by its [`Hypotheses`] collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hypothesis {
    /// Identifies the hypothesis in diagnostics.
    pub name: String,
    /// Expected boolean state per variable.
    pub situation: HashMap<String, bool>,
    /// Prior probability of the hypothesis, in [0, 1].
    pub prior: f64,
    /// Outcome distribution conditional on the hypothesis being true.
    pub distribution: Distribution,
}

impl Hypothesis {
    /// Variables referenced by the hypothesis, sorted for order-independent
    /// comparison.
    fn variables(&self) -> Vec<String> {
        let mut names: Vec<String> = self.situation.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Check the hypothesis against the variable set shared by its
    /// collection.
    pub fn validate(&self, expected_variables: &[String]) -> Result<(), HypothesisError> {
        if self.name.is_empty() {
            return Err(HypothesisError::BlankName);
        }

        if !is_probability(self.prior) {
            return Err(HypothesisError::InvalidPrior { prior: self.prior });
        }

        let mut expected = expected_variables.to_vec();
        expected.sort_unstable();
        let actual = self.variables();
        if expected != actual {
            return Err(HypothesisError::VariableMismatch { expected, actual });
        }

        self.distribution.validate()?;
        Ok(())
    }

    /// Unnormalized log score: `ln(prior) + Σ ln(p)` over configured
    /// variables, where `p` is the evidence probability when the expected
    /// state is true and its complement otherwise.
    fn log_score(&self, evidence: &HashMap<String, f64>) -> Result<f64, HypothesisError> {
        let mut total = self.prior.ln();

        for (name, &expected_state) in &self.situation {
            let prob = evidence
                .get(name)
                .copied()
                .ok_or_else(|| HypothesisError::MissingVariable { name: name.clone() })?;

            if expected_state {
                total += prob.ln();
            } else {
                total += (1.0 - prob).ln();
            }
        }

        Ok(total)
    }

    /// Unnormalized score `prior * Π p(variable)` given the evidence.
    ///
    /// Accumulated in log space and exponentiated at the end. The result is
    /// a score, not a probability; [`Hypotheses::evaluate`] normalizes
    /// scores across the collection.
    pub fn evaluate(&self, evidence: &HashMap<String, f64>) -> Result<f64, HypothesisError> {
        Ok(self.log_score(evidence)?.exp())
    }
}

/// An ordered collection of mutually exclusive hypotheses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hypotheses {
    pub hypotheses: Vec<Hypothesis>,
}

impl Hypotheses {
    pub fn new(hypotheses: Vec<Hypothesis>) -> Self {
        Self { hypotheses }
    }

    /// One-time structural validation: the collection is non-empty, every
    /// member is valid against the first member's variable set, and priors
    /// sum to 1 within [`TOLERANCE`].
    pub fn validate(&self) -> Result<(), HypothesisError> {
        let first = self.hypotheses.first().ok_or(HypothesisError::NoHypotheses)?;
        let variable_names = first.variables();

        let mut total_prior = 0.0;
        for hypothesis in &self.hypotheses {
            hypothesis.validate(&variable_names).map_err(|err| {
                HypothesisError::InconsistentHypothesis {
                    name: hypothesis.name.clone(),
                    source: Box::new(err),
                }
            })?;
            total_prior += hypothesis.prior;
        }

        if (total_prior - 1.0).abs() > TOLERANCE {
            return Err(HypothesisError::PriorsDoNotSumToOne { total: total_prior });
        }

        Ok(())
    }

    /// Posterior weight per hypothesis: log scores normalized in log space.
    fn posterior_weights(&self, evidence: &HashMap<String, f64>) -> Result<Vec<f64>, HypothesisError> {
        let mut log_scores = Vec::with_capacity(self.hypotheses.len());
        for hypothesis in &self.hypotheses {
            log_scores.push(hypothesis.log_score(evidence)?);
        }

        let weights = normalize_log_probs(&log_scores);
        if weights.is_empty() {
            // Every score underflowed to exactly zero; there is no posterior.
            return Err(HypothesisError::AllScoresZero);
        }

        Ok(weights)
    }

    /// Evaluate the hypotheses against the evidence, returning the
    /// posterior-weighted marginal outcome distribution.
    pub fn evaluate(&self, evidence: &HashMap<String, f64>) -> Result<Distribution, HypothesisError> {
        let weights = self.posterior_weights(evidence)?;
        debug!(?weights, "posterior weights over hypotheses");

        let components: Vec<MixtureComponent> = self
            .hypotheses
            .iter()
            .zip(weights)
            .map(|(hypothesis, probability)| MixtureComponent {
                probability,
                distribution: hypothesis.distribution.clone(),
            })
            .collect();

        Ok(mixture(&components)?)
    }
}
