//! Title and first-fret label rendering.

use super::constants::*;
use super::layout::DiagramLayout;
use super::scene::{Element, Part, Shape, TextAnchor};

/// Chord name cut to the characters that fit above the neck. Control
/// characters are dropped; they have no glyph and are not valid in SVG text.
pub fn truncate_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !c.is_control())
        .take(NAME_MAX_CHARS)
        .collect()
}

/// Left edge of a title centred over the neck, never left of the canvas.
pub(super) fn title_x(layout: &DiagramLayout, title: &str) -> f64 {
    let text_width = title.chars().count() as f64 * layout.title_font_size() * CHAR_WIDTH_RATIO;
    let centred = layout.nut_offset_x() + (layout.neck_width() - text_width) / 2.0;
    centred.max(0.0)
}

pub(super) fn render_title(layout: &DiagramLayout, name: &str) -> Option<Element> {
    let title = truncate_name(name);
    if title.is_empty() {
        return None;
    }
    Some(Element {
        part: Part::Title,
        shape: Shape::Text {
            x: title_x(layout, &title),
            y: layout.title_depth() - layout.cell_size * TITLE_BASELINE_RATIO,
            content: title,
            size: layout.title_font_size(),
            weight: "bold",
            fill: TITLE_COLOR,
            anchor: TextAnchor::Start,
        },
    })
}

/// Fret number beside the first fret cell, shown for offsets `1..10`.
pub(super) fn render_fret_offset(
    layout: &DiagramLayout,
    first_fret_offset: i32,
) -> Option<Element> {
    if !(1..OFFSET_LABEL_LIMIT).contains(&first_fret_offset) {
        return None;
    }
    let size = layout.label_font_size();
    Some(Element {
        part: Part::FretOffset,
        shape: Shape::Text {
            x: layout.nut_offset_x() - layout.cell_size * LABEL_GAP_RATIO,
            // Baseline nudged down so the digit is centred on the cell.
            y: layout.fret_center_y(1) + size * LABEL_BASELINE_RATIO,
            content: first_fret_offset.to_string(),
            size,
            weight: "normal",
            fill: LABEL_COLOR,
            anchor: TextAnchor::End,
        },
    })
}
