//! Coordinate inversion — maps a click on the canvas back to a string and
//! fret, so hosts can edit a fingering by clicking the diagram.

use log::trace;

use crate::model::{FingeredString, MouseCoordinates};
use crate::renderer::DiagramLayout;

/// The string nearest to the click and the fret cell it falls into.
///
/// Clicks above the bottom of the nut give fret 0 (the open/silent row).
/// Results are clamped to `0..string_count` and `0..=fret_count`.
pub fn locate(layout: &DiagramLayout, coords: MouseCoordinates) -> FingeredString {
    let position = FingeredString {
        string_number: string_at(layout, coords.x),
        fret_number: fret_at(layout, coords.y),
    };
    trace!(
        "Click ({:.1}, {:.1}) -> string {} fret {}",
        coords.x,
        coords.y,
        position.string_number,
        position.fret_number
    );
    position
}

fn string_at(layout: &DiagramLayout, x: f64) -> usize {
    let last = layout.string_count.saturating_sub(1);
    let raw = ((x - layout.nut_offset_x()) / layout.string_separation()).round();
    // `as` saturates: negatives and NaN become 0.
    (raw as usize).min(last)
}

fn fret_at(layout: &DiagramLayout, y: f64) -> u32 {
    let below_nut = y - layout.nut_bottom();
    if below_nut.is_nan() || below_nut < 0.0 {
        return 0;
    }
    let fret = ((below_nut / layout.fret_depth()).floor() as usize).saturating_add(1);
    fret.min(layout.fret_count) as u32
}
