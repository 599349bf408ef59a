//! Centralized temperature threshold configuration.
//!
//! All thresholds are compile-time constants with validation assertions.
//! This keeps the target band used by the graph's emphasized lines and the
//! status LED in one place, and the display-range clamps next to them.
//!
//! # Compile-Time Validation
//!
//! Each threshold group includes `const` assertions that verify threshold
//! ordering at compile time. If thresholds are configured incorrectly
//! (e.g. an inverted band), compilation will fail with a clear error.

// =============================================================================
// Target Band Thresholds
// =============================================================================

/// Lower edge of the target brew band (below this = too cold, LED blue).
pub const BREW_BAND_MIN_C: f32 = 95.0;

/// Upper edge of the target brew band (above this = too hot, LED red).
pub const BREW_BAND_MAX_C: f32 = 120.0;

const _: () = assert!(BREW_BAND_MIN_C < BREW_BAND_MAX_C);

// =============================================================================
// Display Range Bounds
// =============================================================================

/// Padding added around the recorded extrema when deriving the visible range.
pub const RANGE_MARGIN_C: f32 = 5.0;

/// Absolute lower bound the visible range floor is clamped against.
/// Note the clamp uses `max`, so the floor never drops below this even when
/// recorded values do; readings under it fall off the bottom of the plot.
pub const RANGE_FLOOR_C: f32 = 45.0;

/// Absolute upper bound the visible range ceiling is clamped against.
pub const RANGE_CEILING_C: f32 = 110.0;

const _: () = assert!(RANGE_FLOOR_C < RANGE_CEILING_C);
const _: () = assert!(RANGE_FLOOR_C < BREW_BAND_MIN_C);
const _: () = assert!(RANGE_MARGIN_C > 0.0);

// =============================================================================
// Unit Tests
// =============================================================================
