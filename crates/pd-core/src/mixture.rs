//! Weighted mixtures of discrete distributions.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distribution::{Distribution, DistributionError, TOLERANCE};

/// A mixture component: a weight paired with its outcome distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixtureComponent {
    pub probability: f64,
    pub distribution: Distribution,
}

impl fmt::Display for MixtureComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MixtureComponent(p={:.6}, dist={})",
            self.probability, self.distribution
        )
    }
}

/// Errors raised by [`mixture`].
///
/// The precondition failure (bad input weights) is reported distinctly from
/// the postcondition failure (numerically inconsistent output) so callers
/// can tell input faults from arithmetic faults.
#[derive(Debug, Error)]
pub enum MixtureError {
    #[error("mixture weights do not sum to 1: total={total}")]
    WeightsDoNotSumToOne { total: f64 },
    #[error("mixture output failed validation")]
    InvalidOutput(#[source] DistributionError),
}

/// Convex combination of the component distributions.
///
/// Accumulates `weight * mass` per outcome. Component weights must sum to 1
/// within [`TOLERANCE`]; a violation is an error, never a silent
/// renormalization. The combined output is validated before being returned.
pub fn mixture(components: &[MixtureComponent]) -> Result<Distribution, MixtureError> {
    let mut result = Distribution::new();
    let mut weight_total = 0.0;

    for component in components {
        weight_total += component.probability;
        result.add_scaled(component.probability, &component.distribution);
    }

    if (weight_total - 1.0).abs() > TOLERANCE {
        return Err(MixtureError::WeightsDoNotSumToOne {
            total: weight_total,
        });
    }

    result.validate().map_err(MixtureError::InvalidOutput)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(pairs: &[(i64, f64)]) -> Distribution {
        Distribution::from_pairs(pairs.iter().copied())
    }

    fn component(probability: f64, pairs: &[(i64, f64)]) -> MixtureComponent {
        MixtureComponent {
            probability,
            distribution: dist(pairs),
        }
    }

    #[test]
    fn single_full_weight_component_is_identity() {
        let actual = mixture(&[component(1.0, &[(0, 1.0)])]).unwrap();
        assert!(actual.approx_eq(&dist(&[(0, 1.0)]), TOLERANCE));
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let err = mixture(&[component(0.6, &[(0, 1.0)]), component(0.7, &[(0, 1.0)])]).unwrap_err();
        assert!(matches!(err, MixtureError::WeightsDoNotSumToOne { .. }));
    }

    #[test]
    fn point_masses_spread_by_weight() {
        let actual = mixture(&[component(0.3, &[(2, 1.0)]), component(0.7, &[(4, 1.0)])]).unwrap();
        assert!(actual.approx_eq(&dist(&[(2, 0.3), (4, 0.7)]), TOLERANCE));
    }

    #[test]
    fn overlapping_supports_accumulate() {
        let actual = mixture(&[
            component(0.3, &[(2, 0.8), (3, 0.2)]),
            component(0.7, &[(2, 0.7), (4, 0.3)]),
        ])
        .unwrap();
        let expected = dist(&[
            (2, 0.3 * 0.8 + 0.7 * 0.7),
            (3, 0.3 * 0.2),
            (4, 0.7 * 0.3),
        ]);
        assert!(actual.approx_eq(&expected, TOLERANCE));
    }

    #[test]
    fn invalid_component_distribution_surfaces_as_output_error() {
        // Weights are fine but the component's masses exceed 1 in total.
        let err = mixture(&[component(1.0, &[(0, 0.8), (1, 0.8)])]).unwrap_err();
        assert!(matches!(err, MixtureError::InvalidOutput(_)));
    }

    #[test]
    fn component_display_is_stable() {
        let c = component(0.25, &[(1, 1.0)]);
        assert_eq!(c.to_string(), "MixtureComponent(p=0.250000, dist={1:1.000000})");
    }
}
