//! Poll-driven sampling pipeline.
//!
//! A single cooperative loop owns all sampling state; there is no concurrent
//! mutation anywhere, so no locking. Two nested interval timers are checked
//! against a caller-supplied monotonic millisecond clock: a coarse poll timer
//! gates burst starts, a fine read timer spaces the raw reads inside a burst.
//!
//! Each completed burst is averaged into the short smoothing window, and the
//! smoothing window's running average then either opens a fresh slot in the
//! long history window (a commit, every [`COMMIT_INTERVAL`] bursts) or
//! refines the newest slot in place. Readings are processed strictly in
//! arrival order, and every burst yields exactly one [`SampleEvent`] so the
//! caller runs exactly one render and one indicator update per burst.

use crate::config::{
    BURST_ITERATIONS,
    COMMIT_INTERVAL,
    HISTORY_CAPACITY,
    POLL_INTERVAL_MS,
    READ_INTERVAL_MS,
    SMOOTHING_CAPACITY,
};
use crate::sample_buffer::SampleBuffer;

/// A temperature source. May report [`FAULT_TEMP_C`](crate::config::FAULT_TEMP_C)
/// when the hardware is faulted; a faulted read is not retried, it simply
/// contributes one fault sample to its burst slot.
pub trait TemperatureProbe {
    fn read_celsius(&mut self) -> f32;
}

/// What a completed burst did to the history buffer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SampleEvent {
    /// A fresh history slot was opened with the current smoothed average.
    Committed,
    /// The newest history slot was refined in place.
    Refined,
}

/// Owns the two sample windows and all polling state.
pub struct SamplingLoop {
    smoothing: SampleBuffer<SMOOTHING_CAPACITY>,
    history: SampleBuffer<HISTORY_CAPACITY>,
    last_poll_ms: u32,
    last_read_ms: u32,
    reads_in_burst: u32,
    burst_sum: f32,
    bursts_since_commit: u32,
}

impl SamplingLoop {
    pub const fn new() -> Self {
        Self {
            smoothing: SampleBuffer::new(),
            history: SampleBuffer::new(),
            last_poll_ms: 0,
            last_read_ms: 0,
            reads_in_burst: 0,
            burst_sum: 0.0,
            bursts_since_commit: 0,
        }
    }

    /// The long-window history backing the graph.
    pub fn history(&self) -> &SampleBuffer<HISTORY_CAPACITY> { &self.history }

    /// The current short-window smoothed value.
    pub fn smoothed(&self) -> f32 { self.smoothing.average() }

    /// Run one scheduling tick.
    ///
    /// Takes at most one probe read per call. Returns `Some` only when a
    /// burst completes, i.e. when the display and indicator should update.
    pub fn poll<P: TemperatureProbe>(&mut self, now_ms: u32, probe: &mut P) -> Option<SampleEvent> {
        if now_ms.wrapping_sub(self.last_poll_ms) <= POLL_INTERVAL_MS {
            return None;
        }
        if now_ms.wrapping_sub(self.last_read_ms) <= READ_INTERVAL_MS {
            return None;
        }

        self.burst_sum += probe.read_celsius();
        self.reads_in_burst += 1;
        self.last_read_ms = now_ms;

        if self.reads_in_burst < BURST_ITERATIONS {
            return None;
        }

        // Burst complete: fold it into the smoothing window and restart the
        // coarse timer.
        self.last_poll_ms = now_ms;
        let burst_average = self.burst_sum / BURST_ITERATIONS as f32;
        self.burst_sum = 0.0;
        self.reads_in_burst = 0;
        self.smoothing.add(burst_average);

        let smoothed = self.smoothing.average();
        self.bursts_since_commit += 1;
        if self.bursts_since_commit >= COMMIT_INTERVAL {
            self.history.add(smoothed);
            self.bursts_since_commit = 0;
            Some(SampleEvent::Committed)
        } else {
            self.history.update_last(smoothed);
            Some(SampleEvent::Refined)
        }
    }
}

impl Default for SamplingLoop {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
