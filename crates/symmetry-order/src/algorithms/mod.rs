//! Layer 3: Algorithms
//!
//! This layer implements local weighted regression, robustness reweighting
//! and peak counting. It is orchestrated by the engine and detector layers.

// Local weighted regression.
pub mod regression;

// Robustness weight updates for outlier downweighting.
pub mod robustness;

// Local maximum counting.
pub mod peaks;
