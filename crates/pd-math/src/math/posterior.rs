//! Normalization of unnormalized log-domain scores into posteriors.

use super::stable::log_sum_exp;

/// Normalize unnormalized log scores into probabilities that sum to 1.
///
/// Works entirely in log space: each output is `exp(score - log_sum_exp(scores))`,
/// so ratios between scores are preserved without intermediate underflow.
/// An input of `-inf` maps to probability 0. If every score is `-inf` (or the
/// slice is empty) there is no mass to normalize and an empty vector is
/// returned.
pub fn normalize_log_probs(log_scores: &[f64]) -> Vec<f64> {
    let log_total = log_sum_exp(log_scores);
    if log_total == f64::NEG_INFINITY {
        return Vec::new();
    }
    log_scores.iter().map(|s| (s - log_total).exp()).collect()
}
