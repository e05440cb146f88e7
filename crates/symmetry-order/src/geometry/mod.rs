//! Layer 2: Geometry
//!
//! # Purpose
//!
//! Minimal 3D geometry needed to sample a deviation signal: points and
//! coordinate sets, rotation about an arbitrary axis, and deviation metrics
//! between two sets. The structural alignment and the axis itself are
//! computed elsewhere and arrive here as plain coordinates.

/// Points and coordinate sets.
pub mod point;

/// Rotation axis.
pub mod axis;

/// Deviation metrics.
pub mod metric;
