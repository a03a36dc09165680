//! Diagram renderer — converts chord parameters and a fingering into a
//! scene graph, and the scene into SVG.
//!
//! Rendering is a pure function of its inputs. Values that fall off the
//! drawn neck are skipped rather than reported.

mod constants;
mod fingering;
mod layout;
mod neck;
mod scene;
mod svg_builder;
mod title;

use log::debug;

use crate::model::*;
use neck::render_neck;
use svg_builder::scene_to_svg;

pub use fingering::{render_barre, render_finger};
pub use layout::DiagramLayout;
pub use scene::{Element, Part, Scene, Shape, TextAnchor};
pub use title::truncate_name;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// `(width, height)` of the canvas a diagram with this layout needs.
pub fn canvas_size(layout: &DiagramLayout) -> (f64, f64) {
    layout.canvas_size()
}

/// Build the full scene: neck, fingering markers, title and fret label.
pub fn render_diagram(
    layout: &DiagramLayout,
    params: &DiagramParameters,
    fingering: &Fingering,
) -> Scene {
    let (width, height) = layout.canvas_size();
    let mut scene = Scene::new(width, height);

    scene.extend(render_neck(layout));
    scene.extend(fingering::render_fingering(layout, params, fingering));
    scene.extend(title::render_title(layout, &params.name));
    scene.extend(title::render_fret_offset(layout, params.first_fret_offset));

    debug!(
        strings = layout.string_count,
        frets = layout.fret_count,
        markers = scene.marker_count();
        "Rendered chord diagram '{}' ({width}x{height})",
        params.name
    );
    scene
}

/// Render a chord document into a complete SVG string.
pub fn render_chord_to_svg(chord: &ChordDiagram) -> String {
    let scene = render_diagram(&chord.layout, &chord.parameters, &chord.fingering);
    scene_to_svg(&scene)
}

/// Serialize an already built scene as SVG.
pub fn render_scene_to_svg(scene: &Scene) -> String {
    scene_to_svg(scene)
}
