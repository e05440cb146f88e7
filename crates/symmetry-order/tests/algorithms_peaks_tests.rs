//! Tests for peak counting.
//!
//! ## Test Organization
//!
//! 1. **Basic Counting** - Single and multiple peaks, monotone input
//! 2. **Edge Cases** - Empty, single value, plateaus, boundary maxima
//! 3. **Sinusoids** - Clean periodic curves

use core::f64::consts::PI;

use symmetry_order::prelude::*;

fn degrees() -> Vec<f64> {
    (0..=360).map(|k| (k as f64).to_radians()).collect()
}

// ============================================================================
// Basic Counting Tests
// ============================================================================

/// Test single and multiple peaks.
#[test]
fn test_count_peaks_basic() {
    assert_eq!(count_peaks(&[0.0, 1.0, 0.0], 0.0), 1);
    assert_eq!(count_peaks(&[0.0, 1.0, 0.0, 1.0, 0.0], 0.0), 2);
    assert_eq!(count_peaks(&[0.0, 2.0, 1.0, 3.0, 2.0, 4.0, 0.0], 0.0), 3);
}

/// Test monotone sequences have no peaks.
#[test]
fn test_count_peaks_monotone() {
    assert_eq!(count_peaks(&[1.0, 2.0, 3.0, 4.0], 0.0), 0);
    assert_eq!(count_peaks(&[4.0, 3.0, 2.0, 1.0], 0.0), 0);
    assert_eq!(count_peaks(&[1.0, 0.0, 1.0], 0.0), 0, "A valley is not a peak");
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test empty and single-value input.
#[test]
fn test_count_peaks_short_input() {
    let empty: [f64; 0] = [];
    assert_eq!(count_peaks(&empty, 0.0), 0);
    assert_eq!(count_peaks(&[1.0], 0.0), 0);
    assert_eq!(count_peaks(&[1.0, 1.0, 1.0], 0.0), 0, "Flat input");
}

/// Test a plateau breaks an increase.
///
/// Verifies that equal consecutive values reset the increase flag, so a
/// flat-topped maximum is not counted.
#[test]
fn test_count_peaks_plateau() {
    assert_eq!(count_peaks(&[0.0, 1.0, 1.0, 0.0], 0.0), 0);
    assert_eq!(count_peaks(&[0.0, 1.0, 1.0, 2.0, 0.0], 0.0), 1);
}

/// Test epsilon does not gate tiny differences.
#[test]
fn test_count_peaks_epsilon_ignored() {
    let tiny = [0.0, 1e-12, 0.0];
    assert_eq!(count_peaks(&tiny, 0.0), 1);
    assert_eq!(count_peaks(&tiny, 1.0), 1, "Epsilon does not filter peaks");
}

/// Test maxima on the sequence ends are never counted.
#[test]
fn test_count_peaks_boundary_maxima() {
    assert_eq!(count_peaks(&[3.0, 1.0, 2.0, 1.0, 3.0], 0.0), 1);
}

// ============================================================================
// Sinusoid Tests
// ============================================================================

/// Test cos(3θ) over one revolution.
///
/// The maximum at 0 and 2π sits on the series ends and is not counted, so a
/// curve with three maxima reports 2.
#[test]
fn test_count_peaks_cos3_boundary_undercount() {
    let values: Vec<f64> = degrees().iter().map(|a| (3.0 * a).cos()).collect();
    assert_eq!(count_peaks(&values, 1e-6), 2);
}

/// Test sin(3θ) over one revolution.
///
/// With every maximum in the interior all three are counted.
#[test]
fn test_count_peaks_sin3() {
    let values: Vec<f64> = degrees().iter().map(|a| (3.0 * a).sin()).collect();
    assert_eq!(count_peaks(&values, 1e-6), 3);
}

/// Test cos(2θ + π/2) (maxima at 135° and 315°).
#[test]
fn test_count_peaks_phase_shifted_c2() {
    let values: Vec<f64> = degrees()
        .iter()
        .map(|a| (2.0 * a + PI / 2.0).cos())
        .collect();
    assert_eq!(count_peaks(&values, 0.0), 2);
}
