#![cfg(feature = "dev")]
//! Tests for nearest-neighbour window management.
//!
//! These tests verify the window logic used by every local fit:
//! - Window initialization with various sizes and positions
//! - Recentering on the nearest neighbours of a point
//! - Window size derived from the bandwidth
//!
//! ## Test Organization
//!
//! 1. **Window Initialization** - Basic centering, clamping, full range
//! 2. **Window Recentering** - Sliding, ties, irregular spacing
//! 3. **Span From Bandwidth** - Rounding and capping

use approx::assert_relative_eq;

use symmetry_order::internals::primitives::window::Window;

// ============================================================================
// Window Initialization Tests
// ============================================================================

/// Test basic window initialization with centering.
///
/// Verifies that the window is centered around the target index.
#[test]
fn test_initialize_window_basic() {
    let n = 10;
    let window_size = 5;
    let idx = 5;
    let win = Window::initialize(idx, window_size, n);

    assert_eq!(win.len(), window_size, "Window should have correct size");
    assert!(
        win.left <= idx && idx <= win.right,
        "Index should be within window"
    );
    assert!(win.right < n, "Window should be within bounds");
}

/// Test window initialization clamps near the end.
#[test]
fn test_initialize_window_near_end() {
    let n = 5;
    let window_size = 3;
    let win = Window::initialize(4, window_size, n);

    assert_eq!(win.right, n - 1, "Right should be at last index");
    assert_eq!(win.left, n - window_size, "Left should keep the size");
}

/// Test window initialization at the first point.
///
/// Verifies that the smoother's starting window sits at the left edge.
#[test]
fn test_initialize_window_at_start() {
    let win = Window::initialize(0, 4, 20);
    assert_eq!((win.left, win.right), (0, 3), "Window should start at 0");
}

/// Test window initialization with full range.
///
/// Verifies that when window_size >= n, the entire range is used.
#[test]
fn test_initialize_window_full_range() {
    let n = 4;
    let win = Window::initialize(0, 10, n);
    assert_eq!((win.left, win.right), (0, n - 1), "Should use full range");
}

// ============================================================================
// Window Recentering Tests
// ============================================================================

/// Test recentering slides the window to the nearest neighbours.
///
/// Verifies:
/// - The window follows the point being fitted
/// - The window size never changes
#[test]
fn test_recenter_slides_to_neighbours() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let mut win = Window::initialize(0, 3, x.len());

    win.recenter(&x, 5);
    assert_eq!((win.left, win.right), (4, 6), "Window should surround 5");

    win.recenter(&x, 9);
    assert_eq!((win.left, win.right), (7, 9), "Window should clamp at end");
    assert_eq!(win.len(), 3, "Size should be preserved");
}

/// Test recentering keeps the left neighbour on ties.
#[test]
fn test_recenter_tie_prefers_left() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let mut win = Window::initialize(0, 2, x.len());

    win.recenter(&x, 1);
    assert_eq!(
        (win.left, win.right),
        (0, 1),
        "Equidistant neighbours should keep the left one"
    );
}

/// Test recentering on irregular spacing.
///
/// Verifies that distances, not indices, decide the window.
#[test]
fn test_recenter_irregular_spacing() {
    let x = vec![0.0, 0.1, 0.2, 5.0, 5.1, 5.2];
    let mut win = Window::initialize(0, 3, x.len());

    win.recenter(&x, 3);
    assert_eq!((win.left, win.right), (3, 5), "Far left points excluded");

    win.recenter(&x, 2);
    assert_eq!((win.left, win.right), (0, 2), "Window should slide back");
}

/// Test the farthest-neighbour distance.
#[test]
fn test_max_distance() {
    let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let win = Window { left: 1, right: 3 };

    assert_relative_eq!(win.max_distance(&x, 1.0), 2.0);
    assert_relative_eq!(win.max_distance(&x, 2.0), 1.0);
}

// ============================================================================
// Span From Bandwidth Tests
// ============================================================================

/// Test window size rounding.
///
/// Verifies:
/// - The size is rounded up
/// - Exact products are not bumped by round-off
/// - The size is capped at n
#[test]
fn test_span_from_bandwidth() {
    assert_eq!(Window::span_from_bandwidth(361, 0.1), 37, "ceil(36.1)");
    assert_eq!(Window::span_from_bandwidth(100, 0.3), 30, "0.3 * 100 is 30");
    assert_eq!(Window::span_from_bandwidth(10, 1.0), 10, "Full bandwidth");
    assert_eq!(Window::span_from_bandwidth(361, 0.005), 2, "ceil(1.805)");
    assert_eq!(Window::span_from_bandwidth(5, 0.01), 1, "Tiny bandwidth");
}
