//! Temperature-to-pixel coordinate mapping.
//!
//! The vertical axis is derived from the history buffer's extrema on every
//! render pass, so the visible range keeps rescaling as old samples scroll
//! off. The horizontal axis anchors the newest sample near the right edge
//! (minus the readout margin) and shifts one pixel per logical step.

#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::{GRID_SPACING_X, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sample_buffer::SampleBuffer;
use crate::thresholds::{RANGE_CEILING_C, RANGE_FLOOR_C, RANGE_MARGIN_C};

/// Visible temperature range of the plot, recomputed per render pass.
///
/// Both bounds clamp with `max` against the absolute limits. That gives the
/// axis headroom even when recorded values sit near the hard lower bound,
/// and it also means the floor rises above the absolute bound whenever all
/// samples are high. The asymmetry is intentional and load-bearing: the
/// standby check (`last > floor`) relies on an empty buffer producing the
/// default `[45, 110]` range.
pub struct DisplayRange {
    pub floor: f32,
    pub ceiling: f32,
}

impl DisplayRange {
    /// Derive the range from recorded extrema, margin-padded and clamped.
    pub fn from_extrema(min: f32, max: f32) -> Self {
        Self {
            floor: (min - RANGE_MARGIN_C).max(RANGE_FLOOR_C),
            ceiling: (max + RANGE_MARGIN_C).max(RANGE_CEILING_C),
        }
    }

    /// Derive the range from a buffer's current contents.
    pub fn from_buffer<const N: usize>(buffer: &SampleBuffer<N>) -> Self {
        Self::from_extrema(buffer.min(), buffer.max())
    }

    /// Map a temperature to a vertical pixel coordinate.
    ///
    /// Linear and inverted: the ceiling maps to y = 0, the floor to the
    /// bottom of the screen. Values outside the range map off-screen and are
    /// clipped by the display.
    pub fn y_for(&self, temp: f32) -> i32 {
        let span = self.ceiling - self.floor;
        (((self.ceiling - temp) / span) * SCREEN_HEIGHT as f32).round() as i32
    }
}

/// Right edge of the plot area. `offset` is negative: the readout label
/// margin reserved at the screen's right edge.
#[inline]
pub const fn plot_right_edge(offset: i32) -> i32 { SCREEN_WIDTH as i32 + offset }

/// Map a logical sample index to its x coordinate.
///
/// The newest of `count` samples lands one pixel left of the plot edge; each
/// older sample sits one pixel further left.
#[inline]
pub fn x_for_sample(offset: i32, count: usize, index: usize) -> i32 {
    plot_right_edge(offset) - count as i32 - 1 + index as i32
}

/// Horizontal phase of the vertical gridlines.
///
/// While the buffer fills, each new sample shifts the data left, so the
/// phase follows the count. Once the ring is full the count stops moving and
/// the ring's start index carries the scroll position instead; without the
/// switch the gridlines would freeze while the data kept sliding.
pub fn grid_phase(count: usize, start_index: usize, capacity: usize) -> i32 {
    let index = if count >= capacity { start_index } else { count };
    index as i32 % GRID_SPACING_X
}

// =============================================================================
// Unit Tests
// =============================================================================
