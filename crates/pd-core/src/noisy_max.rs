//! Max-of-independents combinator.

use crate::distribution::{unique_values, Distribution};

/// Distribution of `max(X1, ..., Xn)` for independent `Xi ~ dists[i]`.
///
/// Walks the ascending deduplicated outcome set and computes the joint CDF
/// at each candidate as the product of the per-source CDFs, summed in log
/// space. The mass at a candidate is the difference between consecutive
/// joint CDF values, which is why ascending order is mandatory. A source
/// with zero cumulative mass at a candidate contributes `ln(0) = -inf`, and
/// the joint CDF there exponentiates cleanly to 0.
///
/// Zero-mass entries are pruned from the output. Callers are expected to
/// pass at least one distribution; an empty slice yields the empty
/// distribution.
pub fn noisy_max(dists: &[Distribution]) -> Distribution {
    let mut result = Distribution::new();
    let mut previous_prob = 0.0;

    for x in unique_values(dists) {
        let log_cdf: f64 = dists
            .iter()
            .map(|dist| dist.cumulative_probability(x).ln())
            .sum();
        let current_prob = log_cdf.exp();

        result.add_mass(x, current_prob - previous_prob);
        previous_prob = current_prob;
    }

    result.without_zeros()
}
