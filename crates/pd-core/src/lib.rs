//! Discrete probabilistic combination and Bayesian hypothesis evaluation.
//!
//! The common currency of every module is [`Distribution`], a sparse
//! probability mass function over integer outcomes. On top of it the crate
//! provides:
//!
//! - arithmetic combination of independent distributions ([`combine()`]),
//! - the max-of-independents combinator ([`noisy_max()`]),
//! - weighted mixtures ([`mixture()`]),
//! - Bayesian evaluation of mutually exclusive hypotheses against observed
//!   evidence ([`Hypotheses::evaluate`]),
//! - marginalization over all 2^N activation patterns of independent noisy
//!   sources ([`noisy_max_mixture_recursive`] / [`noisy_max_mixture_iterative`]),
//! - defensive renormalization of approximately valid distributions
//!   ([`correct()`]).
//!
//! All functions are pure: they allocate and return new distributions rather
//! than mutating their inputs. Probability products are accumulated in log
//! space throughout to avoid underflow.

pub mod correct;
pub mod distribution;
pub mod hypothesis;
pub mod mixture;
pub mod noisy_max;
pub mod noisy_max_mixture;
pub mod ops;

pub use correct::{correct, CorrectionError};
pub use distribution::{unique_values, Distribution, DistributionError, TOLERANCE};
pub use hypothesis::{Hypotheses, Hypothesis, HypothesisError};
pub use mixture::{mixture, MixtureComponent, MixtureError};
pub use noisy_max::noisy_max;
pub use noisy_max_mixture::{noisy_max_mixture_iterative, noisy_max_mixture_recursive};
pub use ops::{combine, BinaryOp};
