//! chordlib — chord-fingering diagram geometry and rendering for guitar and bass.
//!
//! Computes the neck (nut, frets, strings), fingering markers, title and
//! first-fret label of a chord diagram as a scene graph or SVG, and maps
//! clicks on the diagram back to a string and fret.
//!
//! # Example
//! ```
//! use chordlib::{render_diagram, DiagramLayout, DiagramParameters, Fingering, Part};
//!
//! let fingering: Fingering = "xx0232".parse().unwrap();
//! let scene = render_diagram(&DiagramLayout::default(), &DiagramParameters::new("D"), &fingering);
//! assert_eq!(scene.count(Part::Dot), 3);
//! ```

pub mod editor;
pub mod error;
pub mod locate;
pub mod model;
pub mod parser;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use editor::{apply_click, toggle_barre};
pub use error::ChordError;
pub use locate::locate;
pub use model::*;
pub use parser::{parse_chord_json, parse_fingering};
pub use renderer::{
    canvas_size, render_barre, render_chord_to_svg, render_diagram, render_finger,
    render_scene_to_svg, truncate_name, DiagramLayout, Element, Part, Scene, Shape, TextAnchor,
};

/// Parse a JSON chord document and render it to SVG.
pub fn render_json_to_svg(json: &str) -> Result<String, ChordError> {
    let chord = parse_chord_json(json)?;
    Ok(render_chord_to_svg(&chord))
}

/// Parse a JSON chord document and return its scene graph as JSON.
pub fn render_json_to_scene_json(json: &str) -> Result<String, ChordError> {
    let chord = parse_chord_json(json)?;
    let scene = render_diagram(&chord.layout, &chord.parameters, &chord.fingering);
    Ok(serde_json::to_string(&scene)?)
}

/// Locate a click and return the position as JSON.
///
/// `layout_json` may be `None` for the default guitar layout.
pub fn locate_to_json(layout_json: Option<&str>, x: f64, y: f64) -> Result<String, ChordError> {
    let layout = match layout_json {
        Some(json) => {
            let layout: DiagramLayout = serde_json::from_str(json)?;
            layout.validate()?;
            layout
        }
        None => DiagramLayout::default(),
    };
    let position = locate(&layout, MouseCoordinates::new(x, y));
    Ok(serde_json::to_string(&position)?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a JSON chord document to SVG and return it as a C string.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// Returns null when the input is null, not UTF-8, not a valid chord
/// document, or when the output cannot be represented as a C string.
///
/// # Safety
/// `json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_json(json: *const c_char) -> *mut c_char {
    if json.is_null() {
        return std::ptr::null_mut();
    }
    let json = match unsafe { CStr::from_ptr(json) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match render_json_to_svg(json) {
        Ok(svg) => CString::new(svg).map_or(std::ptr::null_mut(), CString::into_raw),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Map a click to `{"string_number":..,"fret_number":..}` JSON.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// `layout_json` may be null for the default guitar layout.
///
/// # Safety
/// `layout_json` must be null or a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_locate(
    layout_json: *const c_char,
    x: f64,
    y: f64,
) -> *mut c_char {
    let layout_json = if layout_json.is_null() {
        None
    } else {
        match unsafe { CStr::from_ptr(layout_json) }.to_str() {
            Ok(s) => Some(s),
            Err(_) => return std::ptr::null_mut(),
        }
    };

    match locate_to_json(layout_json, x, y) {
        Ok(json) => CString::new(json).map_or(std::ptr::null_mut(), CString::into_raw),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by chordlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
