//! Neck rendering — nut, fret lines and strings. Depends on the layout only.

use super::constants::*;
use super::layout::DiagramLayout;
use super::scene::{Element, Part, Shape};

pub(super) fn render_neck(layout: &DiagramLayout) -> Vec<Element> {
    let mut elements = Vec::with_capacity(1 + layout.fret_count + layout.string_count);
    elements.push(render_nut(layout));

    let left = layout.string_x(0);
    let right = left + layout.neck_width();
    for fret in 1..=layout.fret_count {
        let y = layout.fret_y(fret);
        elements.push(Element {
            part: Part::Fret,
            shape: Shape::Line {
                x1: left,
                y1: y,
                x2: right,
                y2: y,
                stroke: NECK_COLOR,
                width: layout.fret_width(),
            },
        });
    }

    let top = layout.nut_offset_y();
    let bottom = top + layout.string_length();
    for string_number in 0..layout.string_count {
        let x = layout.string_x(string_number);
        elements.push(Element {
            part: Part::String,
            shape: Shape::Line {
                x1: x,
                y1: top,
                x2: x,
                y2: bottom,
                stroke: STRING_COLOR,
                width: layout.string_width(),
            },
        });
    }

    elements
}

fn render_nut(layout: &DiagramLayout) -> Element {
    // Widened by a string width so the outer strings end flush with the nut.
    let overhang = layout.string_width() / 2.0;
    Element {
        part: Part::Nut,
        shape: Shape::Rect {
            x: layout.nut_offset_x() - overhang,
            y: layout.nut_offset_y(),
            width: layout.neck_width() + 2.0 * overhang,
            height: layout.nut_depth(),
            corner_radius: 0.0,
            fill: NECK_COLOR,
        },
    }
}
