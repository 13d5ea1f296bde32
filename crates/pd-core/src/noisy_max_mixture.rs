//! Marginalization over activation patterns of independent noisy sources.
//!
//! Each of N sources is active with probability `probs[i]`; when active it
//! contributes outcomes drawn from `dists[i]`, when silent it contributes
//! nothing (the degenerate always-0 distribution). The marginal outcome
//! distribution is the noisy-max combination of the active sources, summed
//! over all 2^N activation patterns weighted by pattern probability.
//!
//! The enumeration is exponential in N by design and must not be
//! approximated; the engine targets small source counts. Two independently
//! written traversals of the pattern space are kept as a cross-check: their
//! agreement is asserted in the test suite.

use tracing::debug;

use crate::distribution::Distribution;
use crate::noisy_max::noisy_max;

/// The distribution contributed by a silent source.
fn degenerate_zero() -> Distribution {
    Distribution::from_pairs([(0, 1.0)])
}

/// Depth-first enumeration of activation patterns.
///
/// Carries the running log pattern probability and a running noisy-max fold
/// of the active sources, seeded with the degenerate always-0 distribution.
/// At depth N the folded distribution is weight-accumulated into the output
/// by the exponentiated pattern probability.
///
/// # Panics
///
/// Panics if `probs` and `dists` differ in length.
pub fn noisy_max_mixture_recursive(probs: &[f64], dists: &[Distribution]) -> Distribution {
    assert_eq!(
        probs.len(),
        dists.len(),
        "inconsistent number of probabilities and distributions"
    );

    fn generate(
        i: usize,
        sum_log_prob: f64,
        dist: Distribution,
        probs: &[f64],
        dists: &[Distribution],
        result: &mut Distribution,
    ) {
        if i == probs.len() {
            result.add_scaled(sum_log_prob.exp(), &dist);
        } else {
            // Source i silent.
            generate(
                i + 1,
                sum_log_prob + (1.0 - probs[i]).ln(),
                dist.clone(),
                probs,
                dists,
                result,
            );

            // Source i active: fold its distribution into the combination.
            generate(
                i + 1,
                sum_log_prob + probs[i].ln(),
                noisy_max(&[dist, dists[i].clone()]),
                probs,
                dists,
                result,
            );
        }
    }

    let mut result = Distribution::new();
    generate(0, 0.0, degenerate_zero(), probs, dists, &mut result);
    result
}

/// Bit-pattern enumeration of activation patterns.
///
/// Integers `1..2^N` select which sources are active per pattern; silent
/// sources contribute the degenerate always-0 distribution. The all-silent
/// pattern is pre-seeded as mass at outcome 0 before the loop. Must agree
/// with [`noisy_max_mixture_recursive`] within tolerance on every outcome.
///
/// # Panics
///
/// Panics if `probs` and `dists` differ in length.
pub fn noisy_max_mixture_iterative(probs: &[f64], dists: &[Distribution]) -> Distribution {
    assert_eq!(
        probs.len(),
        dists.len(),
        "inconsistent number of probabilities and distributions"
    );

    let n = probs.len();

    // All sources silent: every contribution is outcome 0.
    let log_p_all_silent: f64 = probs.iter().map(|p| (1.0 - p).ln()).sum();
    let mut result = Distribution::from_pairs([(0, log_p_all_silent.exp())]);

    let patterns = 1u64 << n;
    debug!(sources = n, patterns, "enumerating activation patterns");

    for pattern in 1..patterns {
        let mut row = Vec::with_capacity(n);
        let mut log_p = 0.0;

        for (j, (prob, dist)) in probs.iter().zip(dists.iter()).enumerate() {
            if pattern & (1 << j) != 0 {
                row.push(dist.clone());
                log_p += prob.ln();
            } else {
                row.push(degenerate_zero());
                log_p += (1.0 - prob).ln();
            }
        }

        result.add_scaled(log_p.exp(), &noisy_max(&row));
    }

    result
}
