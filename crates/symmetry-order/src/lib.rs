//! # symmetry-order: rotational symmetry order detection for Rust
//!
//! Estimates the rotational symmetry order (C1, C2, C3, …) of a structure
//! superposition about a known symmetry axis.
//!
//! ## How it works
//!
//! 1. **Sample**: one half of the aligned structure is rotated about the axis
//!    in fixed angular steps over a full revolution, and its deviation from
//!    the reference half is recorded at every step.
//! 2. **Smooth**: the deviation-vs-angle signal is denoised with robust LOESS
//!    (locally weighted linear regression with tricube kernel weights and
//!    bisquare robustness iterations).
//! 3. **Count**: the number of local maxima of the smoothed curve is reported
//!    as the order.
//!
//! The rotation axis and the structural alignment are computed elsewhere and
//! arrive as plain coordinates.
//!
//! ## Quick Start
//!
//! ```rust
//! use symmetry_order::prelude::*;
//!
//! // Three atoms on a ring around an axis parallel to z.
//! let center = Point3D::new(1.0, 2.0, 3.0);
//! let axis = RotationAxis::new(center, Point3D::new(0.0, 0.0, 1.0))?;
//! let coords_a: CoordinateSet = (0..3)
//!     .map(|k| {
//!         let phi = (120.0 * k as f64).to_radians();
//!         center.add(&Point3D::new(5.0 * phi.cos(), 5.0 * phi.sin(), 0.0))
//!     })
//!     .collect();
//!
//! // The aligned half is the reference rotated by 120 degrees.
//! let coords_b = axis.rotate(&coords_a, 120f64.to_radians());
//!
//! let config = DetectorConfig::builder()
//!     .degree_sampling(1.0)        // Sample every degree
//!     .bandwidth(0.1)              // 10% of the samples per local fit
//!     .robustness_iterations(0)    // Noise-free input: no reweighting
//!     .build()?;
//!
//! let order = calculate_order(&coords_a, &coords_b, &axis, &config)?;
//! assert_eq!(order, 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Detection returns `Result<usize, OrderDetectionFailedError>`. The error
//! wraps the failing stage (a [`GeometryError`](prelude::GeometryError) from
//! sampling or a [`SmoothingError`](prelude::SmoothingError) from smoothing),
//! which is available through `std::error::Error::source`.
//!
//! Configuration errors are raised by `build()`, never during detection.
//!
//! ## Known limitations
//!
//! * The smoothed curve is scanned as an open interval. A maximum at the
//!   0/2π boundary is not counted.
//! * On noise-free signals the robustness iterations downweight the samples
//!   with the largest smoothing bias (the tops of peaks and the cusps between
//!   them), which can split one peak into several. Synthetic input is best
//!   detected with `robustness_iterations(0)`.
//! * `epsilon` and `max_order` are carried by the configuration but do not
//!   affect the result.
//!
//! ## Logging
//!
//! Progress is reported through the `log` facade. The library never installs
//! a logger.
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 2: Geometry - points, axes and deviation metrics.
mod geometry;

// Layer 3: Algorithms - regression, robustness and peak counting.
mod algorithms;

// Layer 4: Engine - sampling, smoothing and validation.
mod engine;

// Layer 5: Detector - order detection strategies.
mod detector;

// Layer 6: API - detector configuration.
mod api;

// Layer 7: Census - tabulation of detected orders.
mod census;

// Standard prelude.
pub mod prelude {
    pub use crate::algorithms::peaks::count_peaks;
    pub use crate::api::{DetectorConfig, DetectorConfigBuilder};
    pub use crate::census::report::ReportFormat;
    pub use crate::census::summary::{OrderCensus, OrderSummary};
    pub use crate::census::{CensusEntry, Classification, ExampleLevel};
    pub use crate::detector::{
        DetectionStrategy, OrderDetector, PeakCountingDetector, calculate_order,
    };
    pub use crate::engine::sampler::sample;
    pub use crate::engine::smoother::{LoessSmoother, smooth};
    pub use crate::geometry::axis::RotationAxis;
    pub use crate::geometry::metric::{DeviationMetric, Metric, NearestNeighbor, Rmsd};
    pub use crate::geometry::point::{CoordinateSet, Point3D};
    pub use crate::primitives::errors::{
        ConfigurationError, DetectionFailure, GeometryError, OrderDetectionFailedError,
        SmoothingError,
    };
    pub use crate::primitives::buffer::SmoothingBuffer;
    pub use crate::primitives::series::{SampleSeries, SmoothedSeries};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod geometry {
        pub use crate::geometry::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
}
