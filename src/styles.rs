//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` are defined as `const` so the compiler can
//! place them in read-only data instead of rebuilding them every frame. Fonts
//! with dynamic colors are created at the call site from the exposed font
//! references.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{GRID_LABEL, READOUT};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Left-aligned text anchored at its top-left corner. Used for gridline
/// labels and the pinned readout, which are positioned by explicit geometry.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font (6x10 pixels). Gridline labels and the live readout.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Large value font (`ProFont` 24pt). The drifting standby numeral.
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Medium value font (`ProFont` 18pt). The "ERROR" overlay, which is longer
/// than a numeral and would clip the screen edge at 24pt.
pub const VALUE_FONT_MEDIUM: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Dim small text for gridline temperature labels.
pub const GRID_LABEL_STYLE: MonoTextStyle<'static, Gray4> = MonoTextStyle::new(LABEL_FONT, GRID_LABEL);

/// Bright small text for the live readout pinned at the right edge.
pub const READOUT_STYLE: MonoTextStyle<'static, Gray4> = MonoTextStyle::new(LABEL_FONT, READOUT);
