//! Shared constants for the diagram renderer (all in SVG user units).

// ── Default instrument ──────────────────────────────────────────────
pub(super) const DEFAULT_STRING_COUNT: usize = 6;
pub(super) const BASS_STRING_COUNT: usize = 4;
pub(super) const DEFAULT_FRET_COUNT: usize = 5;
pub(super) const DEFAULT_CELL_SIZE: f64 = 20.0;

// ── Accepted layout ranges ──────────────────────────────────────────
pub(super) const MIN_STRING_COUNT: usize = 2;
pub(super) const MAX_STRING_COUNT: usize = 12;
pub(super) const MIN_FRET_COUNT: usize = 1;
pub(super) const MAX_FRET_COUNT: usize = 24;

// ── Proportions of the cell size ────────────────────────────────────
pub(super) const FRET_DEPTH_RATIO: f64 = 1.25;
pub(super) const NUT_DEPTH_RATIO: f64 = 0.25;
pub(super) const TITLE_DEPTH_RATIO: f64 = 1.5;
pub(super) const NUT_OFFSET_X_RATIO: f64 = 1.5;
pub(super) const DOT_RADIUS_RATIO: f64 = 0.35;
pub(super) const RING_RADIUS_RATIO: f64 = 0.3;
pub(super) const CROSS_HALF_RATIO: f64 = 0.25;
pub(super) const TITLE_FONT_RATIO: f64 = 0.9;
pub(super) const LABEL_FONT_RATIO: f64 = 0.7;
pub(super) const FRET_WIDTH_RATIO: f64 = 0.0625;
pub(super) const FRET_WIDTH_BASE: f64 = 0.25; // added to the scaled fret stroke
pub(super) const STRING_WIDTH_RATIO: f64 = 0.05;
// Baseline lift above the bottom of the title area.
pub(super) const TITLE_BASELINE_RATIO: f64 = 0.3;
pub(super) const LABEL_GAP_RATIO: f64 = 0.4; // offset label distance left of the neck
pub(super) const LABEL_BASELINE_RATIO: f64 = 0.35; // of the label font size

// ── Text ────────────────────────────────────────────────────────────
pub(super) const NAME_MAX_CHARS: usize = 9;
pub(super) const CHAR_WIDTH_RATIO: f64 = 0.6; // estimated glyph advance per font size
pub(super) const OFFSET_LABEL_LIMIT: i32 = 10; // labels shown for 1..10

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BACKGROUND_COLOR: &str = "white";
pub(super) const NECK_COLOR: &str = "#1a1a1a";
pub(super) const STRING_COLOR: &str = "#555555";
pub(super) const MARKER_COLOR: &str = "#1a1a1a";
pub(super) const TITLE_COLOR: &str = "#1a1a1a";
pub(super) const LABEL_COLOR: &str = "#555555";
