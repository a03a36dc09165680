//! Data model for chord-fingering diagrams.
//!
//! These structures capture what a diagram needs to know about a chord:
//! which fret each string is pressed at, an optional barré, the chord name
//! and where on the neck the diagram starts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::renderer::DiagramLayout;

/// Where a single string is played.
///
/// On the wire (JSON, FFI) this is a plain integer: negative for a silent
/// string, `0` for an open string, positive for a fret number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum FingerPosition {
    /// The string is muted and not played.
    Silent,
    /// The string is played without being fretted.
    #[default]
    Open,
    /// The string is pressed at the given fret (1-based).
    Fret(u32),
}

impl From<i32> for FingerPosition {
    fn from(value: i32) -> Self {
        match value {
            v if v < 0 => FingerPosition::Silent,
            0 => FingerPosition::Open,
            v => FingerPosition::Fret(v.unsigned_abs()),
        }
    }
}

impl From<FingerPosition> for i32 {
    fn from(position: FingerPosition) -> Self {
        match position {
            FingerPosition::Silent => -1,
            FingerPosition::Open => 0,
            FingerPosition::Fret(n) => i32::try_from(n).unwrap_or(i32::MAX),
        }
    }
}

/// One position per string; index 0 is the leftmost string of the diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingering(Vec<FingerPosition>);

impl Fingering {
    pub fn new(positions: Vec<FingerPosition>) -> Self {
        Self(positions)
    }

    /// A fingering with every string open.
    pub fn open(string_count: usize) -> Self {
        Self(vec![FingerPosition::Open; string_count])
    }

    pub fn positions(&self) -> &[FingerPosition] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, string_number: usize) -> Option<FingerPosition> {
        self.0.get(string_number).copied()
    }

    /// Set the position of a string, growing the fingering with open
    /// strings when it is too short. A string number with no representable
    /// length (`usize::MAX`) is ignored.
    pub fn set(&mut self, string_number: usize, position: FingerPosition) {
        if string_number >= self.0.len() {
            let Some(len) = string_number.checked_add(1) else {
                return;
            };
            self.0.resize(len, FingerPosition::Open);
        }
        self.0[string_number] = position;
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, FingerPosition)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl From<Vec<i32>> for Fingering {
    fn from(values: Vec<i32>) -> Self {
        Self(values.into_iter().map(FingerPosition::from).collect())
    }
}

impl fmt::Display for Fingering {
    /// Compact notation (`x32010`), or space separated when any fret has
    /// two digits (`x 10 12 12 11 x`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = self
            .0
            .iter()
            .any(|p| matches!(p, FingerPosition::Fret(n) if *n >= 10));
        for (i, position) in self.0.iter().enumerate() {
            if wide && i > 0 {
                f.write_str(" ")?;
            }
            match position {
                FingerPosition::Silent => f.write_str("x")?,
                FingerPosition::Open => f.write_str("0")?,
                FingerPosition::Fret(n) => write!(f, "{n}")?,
            }
        }
        Ok(())
    }
}

/// A string pressed at a fret; the anchor of a barré, or the result of
/// mapping a click back onto the neck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FingeredString {
    pub string_number: usize,
    pub fret_number: u32,
}

impl FingeredString {
    pub fn new(string_number: usize, fret_number: u32) -> Self {
        Self {
            string_number,
            fret_number,
        }
    }
}

/// Per-diagram parameters besides the fingering itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramParameters {
    /// Chord name shown as the title (truncated when drawn)
    pub name: String,
    /// Fret number of the first drawn fret; labelled when in `1..10`
    #[serde(default)]
    pub first_fret_offset: i32,
    /// Barré spanning from this string to the last string
    #[serde(default)]
    pub barre: Option<FingeredString>,
}

impl DiagramParameters {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first_fret_offset: 0,
            barre: None,
        }
    }

    pub fn with_offset(mut self, first_fret_offset: i32) -> Self {
        self.first_fret_offset = first_fret_offset;
        self
    }

    pub fn with_barre(mut self, barre: FingeredString) -> Self {
        self.barre = Some(barre);
        self
    }
}

/// Pixel coordinates relative to the canvas origin (top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MouseCoordinates {
    pub x: f64,
    pub y: f64,
}

impl MouseCoordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A complete chord document as exchanged with hosts in JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChordDiagram {
    #[serde(flatten)]
    pub parameters: DiagramParameters,
    pub fingering: Fingering,
    #[serde(default)]
    pub layout: DiagramLayout,
}

impl ChordDiagram {
    pub fn new(parameters: DiagramParameters, fingering: Fingering) -> Self {
        Self {
            parameters,
            fingering,
            layout: DiagramLayout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finger_position_from_integer() {
        assert_eq!(FingerPosition::from(-3), FingerPosition::Silent);
        assert_eq!(FingerPosition::from(-1), FingerPosition::Silent);
        assert_eq!(FingerPosition::from(0), FingerPosition::Open);
        assert_eq!(FingerPosition::from(7), FingerPosition::Fret(7));
        assert_eq!(i32::from(FingerPosition::Silent), -1);
    }

    #[test]
    fn fingering_serializes_as_integers() {
        let fingering = Fingering::from(vec![-1, 3, 2, 0, 1, 0]);
        let json = serde_json::to_string(&fingering).unwrap();
        assert_eq!(json, "[-1,3,2,0,1,0]");
    }

    #[test]
    fn display_compact_and_wide() {
        assert_eq!(Fingering::from(vec![-1, 3, 2, 0, 1, 0]).to_string(), "x32010");
        assert_eq!(
            Fingering::from(vec![-1, 10, 12, 12, 11, -1]).to_string(),
            "x 10 12 12 11 x"
        );
    }

    #[test]
    fn set_grows_with_open_strings() {
        let mut fingering = Fingering::from(vec![1]);
        fingering.set(3, FingerPosition::Fret(2));
        assert_eq!(
            fingering.positions(),
            &[
                FingerPosition::Fret(1),
                FingerPosition::Open,
                FingerPosition::Open,
                FingerPosition::Fret(2)
            ]
        );
    }

    #[test]
    fn set_ignores_unrepresentable_string() {
        let mut fingering = Fingering::open(6);
        fingering.set(usize::MAX, FingerPosition::Fret(1));
        assert_eq!(fingering, Fingering::open(6));
    }
}
