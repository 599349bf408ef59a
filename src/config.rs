//! Application configuration constants.
//!
//! Everything here is fixed at compile time: the display geometry, the sample
//! buffer capacities, and the timing of the polling loop. Derived values
//! (`HISTORY_CAPACITY`) are computed as `const` so the buffer always matches
//! the screen width without per-frame arithmetic.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1327 class 128x128 grayscale OLED).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 128;

/// Horizontal spacing between vertical gridlines, in pixels.
pub const GRID_SPACING_X: i32 = 40;

/// Vertical spacing between horizontal gridlines, in degrees Celsius.
pub const GRID_SPACING_Y: f32 = 10.0;

// =============================================================================
// Sampling Configuration
// =============================================================================

/// Minimum time between burst starts, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 125;

/// Minimum time between individual probe reads inside a burst, in milliseconds.
pub const READ_INTERVAL_MS: u32 = 10;

/// Number of raw probe reads averaged into one smoothed sample.
pub const BURST_ITERATIONS: u32 = 3;

/// Capacity of the short-window smoothing buffer.
pub const SMOOTHING_CAPACITY: usize = 16;

/// Number of bursts between fresh history commits. Between commits the newest
/// history slot is refined in place with the improving smoothed average.
pub const COMMIT_INTERVAL: u32 = 16;

/// Capacity of the long-window history buffer. One sample per pixel column.
pub const HISTORY_CAPACITY: usize = SCREEN_WIDTH as usize;

/// Sentinel reported by the probe when the sensor is faulted. Values at or
/// below this are treated as a hardware fault, not a temperature.
pub const FAULT_TEMP_C: f32 = -100.0;

// =============================================================================
// Status LED Configuration
// =============================================================================

/// Lower bound of the idle brightness pulse (0-255).
pub const PULSE_MIN: u8 = 10;

/// Upper bound of the idle brightness pulse (0-255).
pub const PULSE_MAX: u8 = 32;

// Compile-time validation
const _: () = assert!(HISTORY_CAPACITY > 0);
const _: () = assert!(SMOOTHING_CAPACITY > 0);
const _: () = assert!(BURST_ITERATIONS > 0);
const _: () = assert!(READ_INTERVAL_MS < POLL_INTERVAL_MS);
const _: () = assert!(PULSE_MIN < PULSE_MAX);

// =============================================================================
// Unit Tests
// =============================================================================
