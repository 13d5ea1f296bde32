//! Arithmetic combination of independent distributions.

use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;

/// Integer binary operator applied to outcome values.
///
/// `Div` truncates toward zero, as integer division does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    fn apply(self, v1: i64, v2: i64) -> i64 {
        match self {
            BinaryOp::Add => v1 + v2,
            BinaryOp::Sub => v1 - v2,
            BinaryOp::Mul => v1 * v2,
            BinaryOp::Div => v1 / v2,
        }
    }
}

/// Distribution of `op(X1, X2)` for independent `X1 ~ dist1`, `X2 ~ dist2`.
///
/// For every outcome pair the product mass is accumulated at
/// `op(v1, v2)`. The output is not pruned of zero-mass entries; only
/// [`crate::noisy_max()`] prunes.
///
/// # Panics
///
/// [`BinaryOp::Div`] panics when `dist2` carries mass at outcome 0. This is
/// inherited from truncating integer division and deliberately not caught.
pub fn combine(dist1: &Distribution, dist2: &Distribution, op: BinaryOp) -> Distribution {
    let mut result = Distribution::new();

    for (value1, prob1) in dist1.iter() {
        for (value2, prob2) in dist2.iter() {
            result.add_mass(op.apply(value1, value2), prob1 * prob2);
        }
    }

    result
}
