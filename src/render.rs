//! Graph screen rendering.
//!
//! Translates the history buffer and the live smoothed value into drawing
//! primitives against any [`DrawTarget`]: gridlines first, then the data
//! polyline, then the numeric overlay. Each pass is a pure function of the
//! current buffer state; nothing persists between frames.
//!
//! While the newest reading sits above the visible floor the screen shows
//! the scrolling graph with a small readout pinned to the trace. Below the
//! floor there is nothing meaningful to plot (cold start or sensor fault),
//! so a large drifting numeral takes over as a liveness indicator - and a
//! fixed "ERROR" label when the reading is the fault sentinel.

use core::fmt::Write;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use heapless::String;
#[cfg(not(test))]
use micromath::F32Ext;

use crate::colors::{GRID, GRID_LINE, GRID_MAJOR, TRACE};
use crate::config::{FAULT_TEMP_C, GRID_SPACING_X, GRID_SPACING_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::mapper::{DisplayRange, grid_phase, plot_right_edge, x_for_sample};
use crate::sample_buffer::SampleBuffer;
use crate::styles::{GRID_LABEL_STYLE, LABEL_FONT, READOUT_STYLE, TOP_LEFT, VALUE_FONT, VALUE_FONT_MEDIUM};
use crate::thresholds::{BREW_BAND_MAX_C, BREW_BAND_MIN_C};

/// Standby drift periods, in milliseconds. Two unrelated periods keep the
/// overlay path from repeating visibly.
const DRIFT_PERIOD_X_MS: f32 = 10_000.0;
const DRIFT_PERIOD_Y_MS: f32 = 9_100.0;

/// Render one full frame onto a cleared display.
///
/// `live` is the current short-window smoothed value; the trace is extended
/// to it with a short terminal segment so the graph reaches the latest
/// reading before it is committed to the history buffer.
pub fn draw_screen<D, const N: usize>(
    display: &mut D,
    history: &SampleBuffer<N>,
    live: f32,
    now_ms: u32,
) where
    D: DrawTarget<Color = Gray4>,
{
    let range = DisplayRange::from_buffer(history);
    let last = history.last();

    if last > range.floor {
        let mut readout: String<12> = String::new();
        let _ = write!(readout, "{}", last.round() as i32);
        // Reserve the readout's label width at the right edge of the plot
        let offset = -(text_width(&readout, LABEL_FONT)) - 2;

        draw_gridlines(display, offset, history, &range);
        draw_series(display, offset, history, live, &range);
        draw_readout(display, &readout, &range, last);
    } else {
        draw_standby_overlay(display, last, &range, now_ms);
    }
}

/// Pixel width of a string in the given monospace font.
fn text_width(text: &str, font: &MonoFont<'_>) -> i32 {
    text.len() as i32 * font.character_size.width as i32
}

/// Gridline pass: dotted verticals, labeled horizontals, band lines, edge.
fn draw_gridlines<D, const N: usize>(
    display: &mut D,
    offset: i32,
    history: &SampleBuffer<N>,
    range: &DisplayRange,
) where
    D: DrawTarget<Color = Gray4>,
{
    // Vertical gridlines, phase-locked to the scroll position
    let mut x = plot_right_edge(offset) - grid_phase(history.len(), history.start_index(), N);
    let mut failsafe = SCREEN_WIDTH as i32;
    while x >= 0 && failsafe > 0 {
        draw_dotted_vline(display, x);
        x -= GRID_SPACING_X;
        failsafe -= 1;
    }

    // Horizontal gridlines with integer labels, top of range downward
    let line_style = PrimitiveStyle::with_stroke(GRID_LINE, 1);
    let mut temp = (range.ceiling / GRID_SPACING_Y).floor() * GRID_SPACING_Y;
    let mut y = range.y_for(temp);
    let mut failsafe = SCREEN_HEIGHT as i32;
    while y < SCREEN_HEIGHT as i32 + 10 && failsafe > 0 {
        Line::new(Point::new(0, y), Point::new(SCREEN_WIDTH as i32, y))
            .into_styled(line_style)
            .draw(display)
            .ok();

        let mut label: String<12> = String::new();
        let _ = write!(label, "{}", temp as i32);
        Text::with_text_style(&label, Point::new(0, y - 8), GRID_LABEL_STYLE, TOP_LEFT)
            .draw(display)
            .ok();

        temp -= GRID_SPACING_Y;
        y = range.y_for(temp);
        failsafe -= 1;
    }

    // Emphasized target-band lines, drawn wherever the range puts them
    let band_style = PrimitiveStyle::with_stroke(GRID_MAJOR, 1);
    for band in [BREW_BAND_MAX_C, BREW_BAND_MIN_C] {
        let y = range.y_for(band);
        Line::new(Point::new(0, y), Point::new(plot_right_edge(offset), y))
            .into_styled(band_style)
            .draw(display)
            .ok();
    }

    // Separator between the plot area and the readout margin
    let edge_x = plot_right_edge(offset);
    Line::new(Point::new(edge_x, 0), Point::new(edge_x, SCREEN_HEIGHT as i32))
        .into_styled(line_style)
        .draw(display)
        .ok();
}

/// Dotted vertical line: every other pixel lit, full screen height.
fn draw_dotted_vline<D>(display: &mut D, x: i32)
where
    D: DrawTarget<Color = Gray4>,
{
    display
        .draw_iter(
            (0..SCREEN_HEIGHT as i32)
                .step_by(2)
                .skip(1)
                .map(|y| Pixel(Point::new(x, y), GRID)),
        )
        .ok();
}

/// Series pass: polyline over the history plus a terminal segment to the
/// live smoothed value.
fn draw_series<D, const N: usize>(
    display: &mut D,
    offset: i32,
    history: &SampleBuffer<N>,
    live: f32,
    range: &DisplayRange,
) where
    D: DrawTarget<Color = Gray4>,
{
    let count = history.len();
    if count == 0 {
        return;
    }

    let trace_style = PrimitiveStyle::with_stroke(TRACE, 1);
    let mut prev_y = range.y_for(history.get(0));
    for i in 1..count {
        let y = range.y_for(history.get(i));
        Line::new(
            Point::new(x_for_sample(offset, count, i - 1), prev_y),
            Point::new(x_for_sample(offset, count, i), y),
        )
        .into_styled(trace_style)
        .draw(display)
        .ok();
        prev_y = y;
    }

    let tail_x = x_for_sample(offset, count, count);
    Line::new(Point::new(tail_x, prev_y), Point::new(tail_x + 1, range.y_for(live)))
        .into_styled(trace_style)
        .draw(display)
        .ok();
}

/// Overlay pass, normal mode: small readout pinned next to the trace's
/// newest point, clamped to the screen.
fn draw_readout<D>(display: &mut D, text: &str, range: &DisplayRange, last: f32)
where
    D: DrawTarget<Color = Gray4>,
{
    let width = text_width(text, LABEL_FONT);
    let char_h = LABEL_FONT.character_size.height as i32;
    let y = (range.y_for(last) - 4).clamp(0, SCREEN_HEIGHT as i32 - char_h);
    Text::with_text_style(text, Point::new(SCREEN_WIDTH as i32 - width, y), READOUT_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}

/// Label and font for the standby overlay.
fn standby_label(last: f32) -> (String<12>, &'static MonoFont<'static>) {
    let mut text: String<12> = String::new();
    if last <= FAULT_TEMP_C {
        let _ = text.push_str("ERROR");
        (text, VALUE_FONT_MEDIUM)
    } else {
        let _ = write!(text, "{}", last.round() as i32);
        (text, VALUE_FONT)
    }
}

/// Overlay pass, standby mode: large numeral (or "ERROR") drifting on two
/// bounded sinusoids so a frozen frame is visibly distinguishable from a
/// live one.
fn draw_standby_overlay<D>(display: &mut D, last: f32, range: &DisplayRange, now_ms: u32)
where
    D: DrawTarget<Color = Gray4>,
{
    let (text, font) = standby_label(last);
    let width = text_width(&text, font);
    let char_h = font.character_size.height as i32;

    // Drift amplitude is whatever screen margin the text leaves over
    let x_amplitude = (SCREEN_WIDTH as i32 - width) / 2;
    let y_amplitude = (SCREEN_HEIGHT as i32 - char_h) / 2;
    let x_drift = x_amplitude as f32 + (now_ms as f32 / DRIFT_PERIOD_X_MS).sin() * x_amplitude as f32;
    let y_drift = y_amplitude as f32 + (now_ms as f32 / DRIFT_PERIOD_Y_MS).sin() * y_amplitude as f32;

    let base_y = (range.y_for(last) - 4).clamp(0, SCREEN_HEIGHT as i32 - char_h);
    let position = Point::new(
        SCREEN_WIDTH as i32 - width - x_drift as i32,
        base_y - y_drift as i32,
    );

    Text::with_text_style(&text, position, MonoTextStyle::new(font, TRACE), TOP_LEFT)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::config::HISTORY_CAPACITY;

    /// Minimal recording draw target: keeps every emitted pixel with its
    /// color so tests can assert on the primitive stream.
    struct PixelCapture {
        pixels: Vec<(Point, Gray4)>,
    }

    impl PixelCapture {
        fn new() -> Self {
            Self { pixels: Vec::new() }
        }

        fn has_pixel(&self, x: i32, y: i32, color: Gray4) -> bool {
            self.pixels.iter().any(|(p, c)| p.x == x && p.y == y && *c == color)
        }

        fn count_with_color(&self, color: Gray4) -> usize {
            self.pixels.iter().filter(|(_, c)| *c == color).count()
        }
    }

    impl DrawTarget for PixelCapture {
        type Color = Gray4;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Gray4>>,
        {
            self.pixels.extend(pixels.into_iter().map(|Pixel(p, c)| (p, c)));
            Ok(())
        }
    }

    impl OriginDimensions for PixelCapture {
        fn size(&self) -> Size {
            Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
        }
    }

    fn warm_history() -> SampleBuffer<HISTORY_CAPACITY> {
        let mut history = SampleBuffer::new();
        for v in [98.0, 101.0, 97.0] {
            history.add(v);
        }
        history
    }

    #[test]
    fn test_band_lines_drawn_at_mapped_thresholds() {
        let history = warm_history();
        let mut capture = PixelCapture::new();
        draw_screen(&mut capture, &history, 97.0, 0);
        // Range [92, 110]: the lower band edge lands at y = 107 across the
        // plot area; the upper one maps off-screen (and is clipped there).
        assert!(capture.has_pixel(0, 107, GRID_MAJOR));
        assert!(capture.has_pixel(40, 107, GRID_MAJOR));
        assert!(capture.has_pixel(0, -71, GRID_MAJOR));
    }

    #[test]
    fn test_trace_is_drawn_in_normal_mode() {
        let history = warm_history();
        let mut capture = PixelCapture::new();
        draw_screen(&mut capture, &history, 97.0, 0);
        assert!(capture.count_with_color(TRACE) > 0);
    }

    #[test]
    fn test_gridlines_phase_locked_when_ring_full() {
        let mut history: SampleBuffer<HISTORY_CAPACITY> = SampleBuffer::new();
        for _ in 0..(HISTORY_CAPACITY + 2) {
            history.add(100.0);
        }
        // start_index = 2, readout "100" reserves 3 * 6 + 2 = 20 px, so the
        // first vertical gridline sits at 128 - 20 - 2 = 106.
        let mut capture = PixelCapture::new();
        draw_screen(&mut capture, &history, 100.0, 0);
        assert!(capture.has_pixel(106, 2, GRID));
        assert!(capture.has_pixel(66, 2, GRID));
        assert!(capture.has_pixel(26, 2, GRID));
        assert!(!capture.has_pixel(105, 2, GRID));
    }

    #[test]
    fn test_empty_history_renders_standby_overlay() {
        let history: SampleBuffer<HISTORY_CAPACITY> = SampleBuffer::new();
        let mut capture = PixelCapture::new();
        draw_screen(&mut capture, &history, 0.0, 1234);
        // No gridlines, no band lines - just the drifting numeral
        assert_eq!(capture.count_with_color(GRID), 0);
        assert_eq!(capture.count_with_color(GRID_MAJOR), 0);
        assert!(capture.count_with_color(TRACE) > 0);
    }

    #[test]
    fn test_standby_label_selects_numeral() {
        let (text, font) = standby_label(22.4);
        assert_eq!(text.as_str(), "22");
        assert_eq!(font.character_size, VALUE_FONT.character_size);
    }

    #[test]
    fn test_fault_sentinel_selects_error_label() {
        let (text, font) = standby_label(FAULT_TEMP_C);
        assert_eq!(text.as_str(), "ERROR");
        assert_eq!(font.character_size, VALUE_FONT_MEDIUM.character_size);
    }

    #[test]
    fn test_value_above_floor_is_never_error() {
        let (text, _) = standby_label(46.0);
        assert_eq!(text.as_str(), "46");
    }

    #[test]
    fn test_standby_overlay_stays_on_screen_over_time() {
        let history: SampleBuffer<HISTORY_CAPACITY> = SampleBuffer::new();
        for ms in (0..60_000).step_by(700) {
            let mut capture = PixelCapture::new();
            draw_screen(&mut capture, &history, 0.0, ms);
            assert!(
                capture
                    .pixels
                    .iter()
                    .any(|(p, _)| p.x >= 0 && p.x < SCREEN_WIDTH as i32 && p.y >= 0 && p.y < SCREEN_HEIGHT as i32),
                "overlay left the screen at {ms} ms"
            );
        }
    }
}
