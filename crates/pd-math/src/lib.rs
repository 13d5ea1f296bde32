//! Log-domain math utilities for the discrete combination engine.

pub mod math;

pub use math::posterior::*;
pub use math::stable::*;
