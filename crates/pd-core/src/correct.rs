//! Defensive renormalization of approximately valid distributions.
//!
//! This is the only place where negative round-off mass is repaired by
//! absolute value; everywhere else an out-of-range probability is a hard
//! error.

use thiserror::Error;

use crate::distribution::Distribution;

/// Errors raised by [`correct`].
#[derive(Debug, Error)]
pub enum CorrectionError {
    #[error("distribution is empty")]
    Empty,
    #[error("invalid maximum error: {0}")]
    InvalidMaxError(f64),
    #[error("total probability outside of permitted range: {total}")]
    TotalOutOfRange { total: f64 },
    #[error("probability {mass} for outcome {value} outside permitted range")]
    MassOutOfRange { value: i64, mass: f64 },
}

/// Sum of absolute masses.
fn total_probability(dist: &Distribution) -> f64 {
    dist.iter().map(|(_, prob)| prob.abs()).sum()
}

/// Renormalize a distribution whose raw masses may be slightly negative or
/// not quite sum to 1, or reject it.
///
/// The raw total of absolute masses must lie within `max_error * len` of 1,
/// each raw mass must lie in `[-max_error, 1 + max_error]`, and the
/// renormalized total is re-verified against the same band. Each corrected
/// mass is `|mass| / total`.
pub fn correct(dist: &Distribution, max_error: f64) -> Result<Distribution, CorrectionError> {
    if dist.is_empty() {
        return Err(CorrectionError::Empty);
    }

    if max_error < 0.0 || max_error.is_nan() {
        return Err(CorrectionError::InvalidMaxError(max_error));
    }

    let band = max_error * dist.len() as f64;

    let total = total_probability(dist);
    if (total - 1.0).abs() > band {
        return Err(CorrectionError::TotalOutOfRange { total });
    }

    let mut corrected = Distribution::new();
    for (value, mass) in dist.iter() {
        if mass < -max_error || mass > 1.0 + max_error {
            return Err(CorrectionError::MassOutOfRange { value, mass });
        }

        if mass < 0.0 {
            tracing::warn!(value, mass, "repairing negative probability mass");
        }

        corrected.add_mass(value, mass.abs() / total);
    }

    // Guard against drift introduced by the renormalization itself.
    let total = total_probability(&corrected);
    if (total - 1.0).abs() > band {
        return Err(CorrectionError::TotalOutOfRange { total });
    }

    Ok(corrected)
}
