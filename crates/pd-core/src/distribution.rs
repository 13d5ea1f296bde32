//! Sparse discrete probability distributions.
//!
//! A [`Distribution`] maps integer outcomes to probability mass. Zero-mass
//! entries are semantically absent; combinators that can produce them prune
//! with [`Distribution::without_zeros`]. Equality is tolerance-based
//! ([`Distribution::approx_eq`]), never bitwise.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance used for unit-sum checks and distribution equality.
pub const TOLERANCE: f64 = 1e-6;

/// Errors raised when validating a distribution.
#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("distribution is empty")]
    Empty,
    #[error("invalid probability {prob} for outcome {value}")]
    InvalidProbability { value: i64, prob: f64 },
    #[error("distribution does not sum to 1: total={total}")]
    DoesNotSumToOne { total: f64 },
}

/// A discrete probability mass function over integer outcomes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    masses: HashMap<i64, f64>,
}

impl Distribution {
    /// An empty distribution with no mass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a distribution from `(outcome, probability)` pairs.
    ///
    /// Pairs with a repeated outcome overwrite earlier ones; no validation
    /// is performed (call [`Distribution::validate`] for that).
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, f64)>,
    {
        Self {
            masses: pairs.into_iter().collect(),
        }
    }

    /// Probability mass at `value`, 0 if the outcome is absent.
    pub fn get(&self, value: i64) -> f64 {
        self.masses.get(&value).copied().unwrap_or(0.0)
    }

    /// Number of outcomes carrying mass.
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Iterate over `(outcome, mass)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.masses.iter().map(|(&v, &p)| (v, p))
    }

    /// Outcomes in ascending order.
    pub fn outcomes_sorted(&self) -> Vec<i64> {
        let mut values: Vec<i64> = self.masses.keys().copied().collect();
        values.sort_unstable();
        values
    }

    /// Check the distribution is well formed: non-empty, every mass in
    /// [0, 1], and total mass 1 within [`TOLERANCE`].
    pub fn validate(&self) -> Result<(), DistributionError> {
        if self.masses.is_empty() {
            return Err(DistributionError::Empty);
        }

        let mut total = 0.0;
        for (&value, &prob) in &self.masses {
            if !is_probability(prob) {
                return Err(DistributionError::InvalidProbability { value, prob });
            }
            total += prob;
        }

        if (total - 1.0).abs() > TOLERANCE {
            return Err(DistributionError::DoesNotSumToOne { total });
        }

        Ok(())
    }

    /// Tolerance equality: identical outcome sets and per-outcome masses
    /// within `tol`.
    pub fn approx_eq(&self, other: &Distribution, tol: f64) -> bool {
        if self.masses.len() != other.masses.len() {
            return false;
        }

        self.masses.iter().all(|(value, prob)| {
            other
                .masses
                .get(value)
                .is_some_and(|p| (prob - p).abs() <= tol)
        })
    }

    /// Cumulative probability P(X <= x).
    pub fn cumulative_probability(&self, x: i64) -> f64 {
        self.masses
            .iter()
            .filter(|(&value, _)| value <= x)
            .map(|(_, &prob)| prob)
            .sum()
    }

    /// A copy with zero (and negative round-off) mass entries removed.
    pub fn without_zeros(&self) -> Distribution {
        Distribution {
            masses: self
                .masses
                .iter()
                .filter(|(_, &prob)| prob > 0.0)
                .map(|(&v, &p)| (v, p))
                .collect(),
        }
    }

    /// Accumulate mass at `value`.
    pub(crate) fn add_mass(&mut self, value: i64, prob: f64) {
        *self.masses.entry(value).or_insert(0.0) += prob;
    }

    /// Accumulate `weight * mass` for every entry of `dist`.
    pub(crate) fn add_scaled(&mut self, weight: f64, dist: &Distribution) {
        for (value, prob) in dist.iter() {
            self.add_mass(value, weight * prob);
        }
    }
}

impl FromIterator<(i64, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl fmt::Display for Distribution {
    /// Deterministic `{outcome:mass, ...}` rendering in ascending outcome
    /// order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let values = self.outcomes_sorted();
        for (idx, value) in values.iter().enumerate() {
            write!(f, "{}:{:.6}", value, self.get(*value))?;
            if idx < values.len() - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "}}")
    }
}

/// Ascending, deduplicated set of outcomes across all distributions.
pub fn unique_values(dists: &[Distribution]) -> Vec<i64> {
    let mut values = BTreeSet::new();
    for dist in dists {
        values.extend(dist.masses.keys().copied());
    }
    values.into_iter().collect()
}

/// True if `p` is a valid probability in [0, 1]. NaN is rejected.
pub(crate) fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}
