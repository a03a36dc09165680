//! Fingering rendering — fret dots, open/silent markers and the barré.

use log::debug;

use crate::model::*;
use super::constants::*;
use super::layout::DiagramLayout;
use super::scene::{Element, Part, Shape};

/// The barré, if it lies on the drawn neck. A barré on fret 0, past the
/// last fret or on a missing string is ignored.
pub(super) fn active_barre(
    layout: &DiagramLayout,
    barre: Option<FingeredString>,
) -> Option<FingeredString> {
    barre.filter(|b| {
        b.string_number < layout.string_count
            && b.fret_number >= 1
            && b.fret_number as usize <= layout.fret_count
    })
}

/// Marker for one string. Empty when the string or fret is off the neck.
pub fn render_finger(
    layout: &DiagramLayout,
    string_number: usize,
    position: FingerPosition,
) -> Vec<Element> {
    if string_number >= layout.string_count {
        return Vec::new();
    }
    let x = layout.string_x(string_number);

    match position {
        FingerPosition::Open => vec![Element {
            part: Part::OpenString,
            shape: Shape::Ring {
                cx: x,
                cy: layout.marker_row_y(),
                r: layout.ring_radius(),
                stroke: MARKER_COLOR,
                width: layout.fret_width(),
            },
        }],
        FingerPosition::Silent => vec![Element {
            part: Part::SilentString,
            shape: Shape::Cross {
                cx: x,
                cy: layout.marker_row_y(),
                half: layout.cross_half(),
                stroke: MARKER_COLOR,
                width: layout.fret_width(),
            },
        }],
        FingerPosition::Fret(fret) if fret >= 1 && fret as usize <= layout.fret_count => {
            vec![Element {
                part: Part::Dot,
                shape: Shape::Circle {
                    cx: x,
                    cy: layout.fret_center_y(fret),
                    r: layout.dot_radius(),
                    fill: MARKER_COLOR,
                },
            }]
        }
        FingerPosition::Fret(_) => Vec::new(),
    }
}

/// Rounded bar from the barré string to the last string. Empty when the
/// barré is not on the drawn neck.
pub fn render_barre(layout: &DiagramLayout, barre: FingeredString) -> Vec<Element> {
    let Some(barre) = active_barre(layout, Some(barre)) else {
        return Vec::new();
    };
    let r = layout.dot_radius();
    let left = layout.string_x(barre.string_number) - r;
    let right = layout.string_x(layout.string_count - 1) + r;
    vec![Element {
        part: Part::Barre,
        shape: Shape::Rect {
            x: left,
            y: layout.fret_center_y(barre.fret_number) - r,
            width: right - left,
            height: 2.0 * r,
            corner_radius: r,
            fill: MARKER_COLOR,
        },
    }]
}

/// All fingering markers. Open and silent markers on strings covered by an
/// active barré are left out.
pub(super) fn render_fingering(
    layout: &DiagramLayout,
    params: &DiagramParameters,
    fingering: &Fingering,
) -> Vec<Element> {
    if fingering.len() != layout.string_count {
        debug!(
            expected = layout.string_count,
            found = fingering.len();
            "Fingering length does not match string count"
        );
    }

    let barre = active_barre(layout, params.barre);
    let mut elements = match barre {
        Some(b) => render_barre(layout, b),
        None => Vec::new(),
    };

    for (string_number, position) in fingering.iter() {
        let under_barre = barre.is_some_and(|b| string_number >= b.string_number);
        if under_barre && matches!(position, FingerPosition::Open | FingerPosition::Silent) {
            continue;
        }
        elements.extend(render_finger(layout, string_number, position));
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn parts(elements: &[Element]) -> Vec<Part> {
        elements.iter().map(|e| e.part).collect()
    }

    #[test]
    fn each_position_kind() {
        let layout = DiagramLayout::default();
        let kind = |string_number, position| {
            parts(&render_finger(&layout, string_number, position))
        };
        assert_eq!(kind(0, FingerPosition::Open), vec![Part::OpenString]);
        assert_eq!(kind(1, FingerPosition::Silent), vec![Part::SilentString]);
        assert_eq!(kind(2, FingerPosition::Fret(5)), vec![Part::Dot]);
    }

    #[test]
    fn out_of_range_is_empty() {
        let layout = DiagramLayout::default();
        assert!(render_finger(&layout, 6, FingerPosition::Fret(1)).is_empty());
        assert!(render_finger(&layout, 6, FingerPosition::Open).is_empty());
        assert!(render_finger(&layout, 0, FingerPosition::Fret(6)).is_empty());
        assert!(render_barre(&layout, FingeredString::new(6, 1)).is_empty());
        assert!(render_barre(&layout, FingeredString::new(0, 0)).is_empty());
        assert!(render_barre(&layout, FingeredString::new(0, 6)).is_empty());
    }

    #[test]
    fn dot_sits_in_fret_cell() {
        let layout = DiagramLayout::default();
        let dot = render_finger(&layout, 3, FingerPosition::Fret(2));
        match dot[0].shape {
            Shape::Circle { cx, cy, r, .. } => {
                assert!(approx_eq!(f64, cx, 90.0));
                assert!(approx_eq!(f64, cy, 92.5));
                assert!(approx_eq!(f64, r, 7.0, epsilon = 1e-9));
            }
            ref other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn barre_spans_to_last_string_and_hides_open_markers() {
        let layout = DiagramLayout::default();
        let params = DiagramParameters::new("F#m").with_barre(FingeredString::new(2, 2));
        let fingering = Fingering::from(vec![-1, 0, 0, -1, 2, 0]);
        let elements = render_fingering(&layout, &params, &fingering);

        assert_eq!(
            parts(&elements),
            vec![Part::Barre, Part::SilentString, Part::OpenString, Part::Dot]
        );
        match elements[0].shape {
            Shape::Rect { x, width, .. } => {
                assert!(approx_eq!(f64, x, 63.0, epsilon = 1e-9));
                assert!(approx_eq!(f64, x + width, 137.0, epsilon = 1e-9));
            }
            ref other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn inactive_barre_hides_nothing() {
        let layout = DiagramLayout::default();
        let params = DiagramParameters::new("E").with_barre(FingeredString::new(0, 9));
        let fingering = Fingering::from(vec![0, 2, 2, 1, 0, 0]);
        let elements = render_fingering(&layout, &params, &fingering);
        assert_eq!(elements.len(), 6);
        assert!(!parts(&elements).contains(&Part::Barre));
    }
}
