//! Status LED logic.
//!
//! One RGB LED encodes where the latest reading sits relative to the target
//! band: red above, blue below, green inside, with a slow sine brightness
//! pulse so a healthy idle unit is visibly alive. A faulted sensor forces
//! solid red at full brightness; with no real reading yet the LED stays dark.

#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::{FAULT_TEMP_C, PULSE_MAX, PULSE_MIN};
use crate::mapper::DisplayRange;
use crate::thresholds::{BREW_BAND_MAX_C, BREW_BAND_MIN_C};

/// A single RGB status LED (DotStar class). The implementation owns the wire
/// protocol; this module only decides color and brightness.
pub trait StatusIndicator {
    fn set_color(&mut self, r: u8, g: u8, b: u8);
    fn set_brightness(&mut self, value: u8);
    fn show(&mut self);
}

/// Reading above the target band.
pub const COLOR_ABOVE_BAND: (u8, u8, u8) = (255, 0, 0);

/// Reading below the target band.
pub const COLOR_BELOW_BAND: (u8, u8, u8) = (0, 0, 255);

/// Reading inside the target band.
pub const COLOR_IN_BAND: (u8, u8, u8) = (0, 255, 0);

/// Sensor fault alert.
pub const COLOR_ALERT: (u8, u8, u8) = (255, 0, 0);

/// Pulse period divisor: one full brightness cycle per ~6.3 s.
const PULSE_PERIOD_MS: f32 = 1000.0;

/// Brightness of the idle pulse at a given instant, always within
/// `[PULSE_MIN, PULSE_MAX]`.
pub fn pulse_brightness(now_ms: u32) -> u8 {
    let pulse = ((now_ms as f32 / PULSE_PERIOD_MS).sin() + 1.0) / 2.0;
    PULSE_MIN + (pulse * f32::from(PULSE_MAX - PULSE_MIN)) as u8
}

/// Refresh the LED from the latest committed/refined reading.
///
/// `last` above the visible floor is a live temperature and gets the band
/// encoding; at or below the fault sentinel it is a hardware fault; anything
/// else means no real reading yet, so the LED goes dark.
pub fn update_indicator<I: StatusIndicator>(
    indicator: &mut I,
    last: f32,
    range: &DisplayRange,
    now_ms: u32,
) {
    if last > range.floor {
        let (r, g, b) = if last > BREW_BAND_MAX_C {
            COLOR_ABOVE_BAND
        } else if last < BREW_BAND_MIN_C {
            COLOR_BELOW_BAND
        } else {
            COLOR_IN_BAND
        };
        indicator.set_color(r, g, b);
        indicator.set_brightness(pulse_brightness(now_ms));
    } else if last <= FAULT_TEMP_C {
        let (r, g, b) = COLOR_ALERT;
        indicator.set_color(r, g, b);
        indicator.set_brightness(255);
    } else {
        indicator.set_brightness(0);
    }
    indicator.show();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingLed {
        color: Option<(u8, u8, u8)>,
        brightness: Option<u8>,
        shows: u32,
    }

    impl RecordingLed {
        fn new() -> Self {
            Self {
                color: None,
                brightness: None,
                shows: 0,
            }
        }
    }

    impl StatusIndicator for RecordingLed {
        fn set_color(&mut self, r: u8, g: u8, b: u8) {
            self.color = Some((r, g, b));
        }

        fn set_brightness(&mut self, value: u8) {
            self.brightness = Some(value);
        }

        fn show(&mut self) {
            self.shows += 1;
        }
    }

    fn default_range() -> DisplayRange {
        DisplayRange::from_extrema(0.0, 0.0)
    }

    #[test]
    fn test_pulse_brightness_stays_within_bounds() {
        for ms in (0..20_000).step_by(37) {
            let b = pulse_brightness(ms);
            assert!(b >= PULSE_MIN, "pulse fell below floor at {ms} ms");
            assert!(b <= PULSE_MAX, "pulse exceeded ceiling at {ms} ms");
        }
    }

    #[test]
    fn test_in_band_reading_is_green_and_pulsing() {
        let mut led = RecordingLed::new();
        update_indicator(&mut led, 100.0, &default_range(), 500);
        assert_eq!(led.color, Some(COLOR_IN_BAND));
        let brightness = led.brightness.unwrap();
        assert!((PULSE_MIN..=PULSE_MAX).contains(&brightness));
        assert_eq!(led.shows, 1);
    }

    #[test]
    fn test_reading_above_band_is_red() {
        let mut led = RecordingLed::new();
        update_indicator(&mut led, 125.0, &default_range(), 0);
        assert_eq!(led.color, Some(COLOR_ABOVE_BAND));
    }

    #[test]
    fn test_reading_below_band_is_blue() {
        let mut led = RecordingLed::new();
        update_indicator(&mut led, 80.0, &default_range(), 0);
        assert_eq!(led.color, Some(COLOR_BELOW_BAND));
    }

    #[test]
    fn test_band_edges_count_as_in_band() {
        let mut led = RecordingLed::new();
        update_indicator(&mut led, BREW_BAND_MIN_C, &default_range(), 0);
        assert_eq!(led.color, Some(COLOR_IN_BAND));
        update_indicator(&mut led, BREW_BAND_MAX_C, &default_range(), 0);
        assert_eq!(led.color, Some(COLOR_IN_BAND));
    }

    #[test]
    fn test_fault_sentinel_forces_alert_at_full_brightness() {
        use crate::config::FAULT_TEMP_C;

        let mut led = RecordingLed::new();
        update_indicator(&mut led, FAULT_TEMP_C, &default_range(), 0);
        assert_eq!(led.color, Some(COLOR_ALERT));
        assert_eq!(led.brightness, Some(255));
        assert_eq!(led.shows, 1);
    }

    #[test]
    fn test_no_reading_keeps_led_dark() {
        let mut led = RecordingLed::new();
        update_indicator(&mut led, 0.0, &default_range(), 0);
        assert_eq!(led.color, None, "standby must not recolor the LED");
        assert_eq!(led.brightness, Some(0));
        assert_eq!(led.shows, 1);
    }
}
