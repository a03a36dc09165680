//! Diagram layout — the fixed geometry of the neck.
//!
//! Everything is derived in closed form from three values: the number of
//! strings, the number of frets drawn and the cell size. The layout is also
//! the configuration object hosts pass in (it deserializes from the optional
//! `layout` key of a chord document).

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::error::ChordError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramLayout {
    /// Number of strings (6 for guitar, 4 for bass)
    pub string_count: usize,
    /// Number of frets drawn below the nut
    pub fret_count: usize,
    /// Base unit every other dimension is scaled from
    pub cell_size: f64,
}

impl Default for DiagramLayout {
    fn default() -> Self {
        Self {
            string_count: DEFAULT_STRING_COUNT,
            fret_count: DEFAULT_FRET_COUNT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl DiagramLayout {
    pub fn new(string_count: usize, fret_count: usize, cell_size: f64) -> Self {
        Self {
            string_count,
            fret_count,
            cell_size,
        }
    }

    /// Four-string bass layout.
    pub fn bass() -> Self {
        Self {
            string_count: BASS_STRING_COUNT,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ChordError> {
        if !(MIN_STRING_COUNT..=MAX_STRING_COUNT).contains(&self.string_count) {
            return Err(ChordError::InvalidLayout(format!(
                "string count {} is outside {MIN_STRING_COUNT}..={MAX_STRING_COUNT}",
                self.string_count
            )));
        }
        if !(MIN_FRET_COUNT..=MAX_FRET_COUNT).contains(&self.fret_count) {
            return Err(ChordError::InvalidLayout(format!(
                "fret count {} is outside {MIN_FRET_COUNT}..={MAX_FRET_COUNT}",
                self.fret_count
            )));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ChordError::InvalidLayout(format!(
                "cell size {} must be a positive number",
                self.cell_size
            )));
        }
        Ok(())
    }

    // ── Base dimensions ─────────────────────────────────────────────

    pub fn string_separation(&self) -> f64 {
        self.cell_size
    }

    pub fn fret_depth(&self) -> f64 {
        self.cell_size * FRET_DEPTH_RATIO
    }

    pub fn nut_depth(&self) -> f64 {
        self.cell_size * NUT_DEPTH_RATIO
    }

    /// Stroke width of a fret line.
    pub fn fret_width(&self) -> f64 {
        self.cell_size * FRET_WIDTH_RATIO + FRET_WIDTH_BASE
    }

    /// Stroke width of a string line.
    pub fn string_width(&self) -> f64 {
        self.cell_size * STRING_WIDTH_RATIO
    }

    pub fn title_depth(&self) -> f64 {
        self.cell_size * TITLE_DEPTH_RATIO
    }

    /// Left edge of the neck (x of string 0).
    pub fn nut_offset_x(&self) -> f64 {
        self.cell_size * NUT_OFFSET_X_RATIO
    }

    /// Top edge of the nut; the row above it holds open/silent markers.
    pub fn nut_offset_y(&self) -> f64 {
        self.title_depth() + self.cell_size
    }

    pub fn neck_width(&self) -> f64 {
        self.string_separation() * self.string_count.saturating_sub(1) as f64
    }

    pub fn string_length(&self) -> f64 {
        self.nut_depth() + self.fret_depth() * self.fret_count as f64
    }

    // ── Canvas ──────────────────────────────────────────────────────

    pub fn canvas_width(&self) -> f64 {
        2.0 * self.nut_offset_x() + self.neck_width()
    }

    pub fn canvas_height(&self) -> f64 {
        self.nut_offset_y() + self.string_length() + self.cell_size / 2.0
    }

    /// `(width, height)` of the drawing surface.
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width(), self.canvas_height())
    }

    // ── Positions ───────────────────────────────────────────────────

    pub fn string_x(&self, string_number: usize) -> f64 {
        self.nut_offset_x() + string_number as f64 * self.string_separation()
    }

    /// Bottom edge of the nut, where fret cell 1 begins.
    pub fn nut_bottom(&self) -> f64 {
        self.nut_offset_y() + self.nut_depth()
    }

    /// y of fret line `fret` (0 is the bottom of the nut).
    pub fn fret_y(&self, fret: usize) -> f64 {
        self.nut_bottom() + fret as f64 * self.fret_depth()
    }

    /// Vertical centre of fret cell `fret` (1-based), where dots sit.
    pub fn fret_center_y(&self, fret: u32) -> f64 {
        self.nut_bottom() + (fret as f64 - 0.5) * self.fret_depth()
    }

    /// Vertical centre of the open/silent marker row above the nut.
    pub fn marker_row_y(&self) -> f64 {
        self.nut_offset_y() - self.cell_size / 2.0
    }

    pub(super) fn dot_radius(&self) -> f64 {
        self.cell_size * DOT_RADIUS_RATIO
    }

    pub(super) fn ring_radius(&self) -> f64 {
        self.cell_size * RING_RADIUS_RATIO
    }

    pub(super) fn cross_half(&self) -> f64 {
        self.cell_size * CROSS_HALF_RATIO
    }

    pub(super) fn title_font_size(&self) -> f64 {
        self.cell_size * TITLE_FONT_RATIO
    }

    pub(super) fn label_font_size(&self) -> f64 {
        self.cell_size * LABEL_FONT_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn default_guitar_dimensions() {
        let layout = DiagramLayout::default();
        assert!(approx_eq!(f64, layout.fret_depth(), 25.0));
        assert!(approx_eq!(f64, layout.nut_depth(), 5.0));
        assert!(approx_eq!(f64, layout.fret_width(), 1.5));
        assert!(approx_eq!(f64, layout.string_width(), 1.0));
        assert!(approx_eq!(f64, layout.nut_offset_x(), 30.0));
        assert!(approx_eq!(f64, layout.nut_offset_y(), 50.0));
        assert!(approx_eq!(f64, layout.neck_width(), 100.0));
        assert!(approx_eq!(f64, layout.string_length(), 130.0));
        assert_eq!(layout.canvas_size(), (160.0, 190.0));
    }

    #[test]
    fn bass_is_narrower() {
        let bass = DiagramLayout::bass();
        assert_eq!(bass.string_count, 4);
        assert!(approx_eq!(f64, bass.canvas_width(), 120.0));
        assert!(approx_eq!(f64, bass.canvas_height(), 190.0));
    }

    #[test]
    fn fret_positions() {
        let layout = DiagramLayout::default();
        assert!(approx_eq!(f64, layout.fret_y(0), 55.0));
        assert!(approx_eq!(f64, layout.fret_y(5), 180.0));
        assert!(approx_eq!(f64, layout.fret_center_y(1), 67.5));
        assert!(approx_eq!(f64, layout.string_x(5), 130.0));
    }

    #[test]
    fn validate_ranges() {
        assert!(DiagramLayout::default().validate().is_ok());
        assert!(DiagramLayout::new(1, 5, 20.0).validate().is_err());
        assert!(DiagramLayout::new(13, 5, 20.0).validate().is_err());
        assert!(DiagramLayout::new(6, 0, 20.0).validate().is_err());
        assert!(DiagramLayout::new(6, 25, 20.0).validate().is_err());
        assert!(DiagramLayout::new(6, 5, 0.0).validate().is_err());
        assert!(DiagramLayout::new(6, 5, f64::NAN).validate().is_err());
    }
}
