//! Cross-validation of the two activation-pattern enumerations.
//!
//! The recursive and iterative noisy-max mixture implementations traverse
//! the same combinatorial space in different orders; they must agree within
//! tolerance on every outcome for randomized inputs.

use pd_core::{noisy_max_mixture_iterative, noisy_max_mixture_recursive, Distribution, TOLERANCE};
use rand::seq::SliceRandom;
use rand::Rng;

/// `n` distinct random outcomes in [min, max].
fn distinct_random_outcomes(rng: &mut impl Rng, n: usize, min: i64, max: i64) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    while values.len() < n {
        let x = rng.random_range(min..=max);
        if !values.contains(&x) {
            values.push(x);
        }
    }
    values
}

/// A random distribution over a non-empty subset of `values`, normalized to
/// sum to 1.
fn random_distribution(rng: &mut impl Rng, values: &mut [i64]) -> Distribution {
    let num_non_zero = rng.random_range(1..=values.len());

    let mut masses: Vec<f64> = (0..num_non_zero).map(|_| rng.random::<f64>()).collect();
    let total: f64 = masses.iter().sum();
    for mass in &mut masses {
        *mass /= total;
    }

    values.shuffle(rng);

    values.iter().copied().zip(masses).collect()
}

#[test]
fn recursive_and_iterative_agree_on_random_inputs() {
    let mut rng = rand::rng();

    for round in 0..100 {
        let num_sources = rng.random_range(1..=3);

        let num_values = rng.random_range(1..=5);
        let mut values = distinct_random_outcomes(&mut rng, num_values, 1, 10);

        let dists: Vec<Distribution> = (0..num_sources)
            .map(|_| random_distribution(&mut rng, &mut values))
            .collect();
        let probs: Vec<f64> = (0..num_sources).map(|_| rng.random()).collect();

        let recursive = noisy_max_mixture_recursive(&probs, &dists);
        let iterative = noisy_max_mixture_iterative(&probs, &dists);

        assert!(
            recursive.approx_eq(&iterative, TOLERANCE),
            "round {round}: recursive {recursive} != iterative {iterative} \
             (probs={probs:?})"
        );
    }
}

#[test]
fn both_variants_produce_valid_distributions() {
    let mut rng = rand::rng();

    for _ in 0..50 {
        let num_sources = rng.random_range(1..=4);
        let mut values = distinct_random_outcomes(&mut rng, 4, 1, 10);

        let dists: Vec<Distribution> = (0..num_sources)
            .map(|_| random_distribution(&mut rng, &mut values))
            .collect();
        // Keep pattern probabilities away from 0 and 1 so no zero-mass
        // entries survive to distort the key-set comparison in validate.
        let probs: Vec<f64> = (0..num_sources)
            .map(|_| rng.random_range(0.05..0.95))
            .collect();

        assert!(noisy_max_mixture_recursive(&probs, &dists).validate().is_ok());
        assert!(noisy_max_mixture_iterative(&probs, &dists).validate().is_ok());
    }
}
