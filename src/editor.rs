//! Interactive fingering edits driven by clicks on the diagram.
//!
//! The host maps a mouse event to a [`FingeredString`] with
//! [`locate`](crate::locate::locate) and applies it here.

use crate::model::*;
use crate::renderer::DiagramLayout;

/// Apply a click to a fingering.
///
/// - fret 0 toggles the string between open and silent;
/// - the fret the string is already pressed at releases it to open;
/// - any other fret presses the string there.
///
/// Clicks on strings the layout does not have are ignored.
pub fn apply_click(layout: &DiagramLayout, fingering: &mut Fingering, clicked: FingeredString) {
    if clicked.string_number >= layout.string_count {
        return;
    }
    let current = fingering.get(clicked.string_number).unwrap_or_default();
    let next = match (clicked.fret_number, current) {
        (0, FingerPosition::Open) => FingerPosition::Silent,
        (0, _) => FingerPosition::Open,
        (fret, FingerPosition::Fret(held)) if held == fret => FingerPosition::Open,
        (fret, _) => FingerPosition::Fret(fret),
    };
    fingering.set(clicked.string_number, next);
}

/// Place a barré at the clicked position, or remove it when the click hits
/// the current barré or the open/silent row.
pub fn toggle_barre(params: &mut DiagramParameters, clicked: FingeredString) {
    params.barre = if clicked.fret_number == 0 || params.barre == Some(clicked) {
        None
    } else {
        Some(clicked)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_row_toggles_open_and_silent() {
        let layout = DiagramLayout::default();
        let mut fingering = Fingering::open(6);
        apply_click(&layout, &mut fingering, FingeredString::new(0, 0));
        assert_eq!(fingering.get(0), Some(FingerPosition::Silent));
        apply_click(&layout, &mut fingering, FingeredString::new(0, 0));
        assert_eq!(fingering.get(0), Some(FingerPosition::Open));

        fingering.set(1, FingerPosition::Fret(3));
        apply_click(&layout, &mut fingering, FingeredString::new(1, 0));
        assert_eq!(fingering.get(1), Some(FingerPosition::Open));
    }

    #[test]
    fn fret_click_presses_and_releases() {
        let layout = DiagramLayout::default();
        let mut fingering: Fingering = "x32010".parse().unwrap();
        apply_click(&layout, &mut fingering, FingeredString::new(5, 3));
        assert_eq!(fingering.to_string(), "x32013");
        apply_click(&layout, &mut fingering, FingeredString::new(5, 3));
        assert_eq!(fingering.to_string(), "x32010");
        apply_click(&layout, &mut fingering, FingeredString::new(0, 1));
        assert_eq!(fingering.to_string(), "132010");
    }

    #[test]
    fn short_fingering_grows_and_foreign_strings_are_ignored() {
        let layout = DiagramLayout::default();
        let mut fingering = Fingering::default();
        apply_click(&layout, &mut fingering, FingeredString::new(2, 2));
        assert_eq!(fingering.to_string(), "002");
        apply_click(&layout, &mut fingering, FingeredString::new(6, 2));
        assert_eq!(fingering.len(), 3);
    }

    #[test]
    fn barre_toggles() {
        let mut params = DiagramParameters::new("F");
        toggle_barre(&mut params, FingeredString::new(0, 1));
        assert_eq!(params.barre, Some(FingeredString::new(0, 1)));
        toggle_barre(&mut params, FingeredString::new(1, 1));
        assert_eq!(params.barre, Some(FingeredString::new(1, 1)));
        toggle_barre(&mut params, FingeredString::new(1, 1));
        assert_eq!(params.barre, None);
        toggle_barre(&mut params, FingeredString::new(2, 3));
        toggle_barre(&mut params, FingeredString::new(2, 0));
        assert_eq!(params.barre, None);
    }
}
