//! Grayscale color constants for the OLED.
//!
//! The SSD1327 class display is 4-bit grayscale, so "colors" here are luma
//! levels. Gridlines sit near black so the data trace stays readable on top
//! of them; the emphasized band lines sit just below full white.

use embedded_graphics::pixelcolor::{Gray4, GrayColor};

/// Background black. Used to clear the frame before each render pass.
pub const BLACK: Gray4 = Gray4::BLACK;

/// Full white. Brightest level the panel can show.
pub const WHITE: Gray4 = Gray4::WHITE;

/// Faint dotted vertical gridlines.
pub const GRID: Gray4 = Gray4::new(0x1);

/// Horizontal gridlines and the plot-edge separator. One step above `GRID`.
pub const GRID_LINE: Gray4 = Gray4::new(0x2);

/// Gridline temperature labels.
pub const GRID_LABEL: Gray4 = Gray4::new(0x3);

/// Emphasized target-band threshold lines. Bright but short of full white so
/// the trace still stands out where it crosses the band.
pub const GRID_MAJOR: Gray4 = Gray4::new(0xA);

/// The temperature trace polyline.
pub const TRACE: Gray4 = WHITE;

/// The numeric readout text.
pub const READOUT: Gray4 = WHITE;
