//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{locate_to_json, render_json_to_svg};

/// Render a JSON chord document to SVG.
///
/// Called from Kotlin as:
///   external fun renderJson(json: String): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_ChordLib_renderJson(
    mut env: JNIEnv,
    _class: JClass,
    json: JString,
) -> jstring {
    let json: String = match env.get_string(&json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match render_json_to_svg(&json) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Map a tap on a default-layout diagram to a string and fret (JSON).
///
/// Called from Kotlin as:
///   external fun locate(x: Float, y: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_chordlib_ChordLib_locate(
    mut env: JNIEnv,
    _class: JClass,
    x: jfloat,
    y: jfloat,
) -> jstring {
    match locate_to_json(None, x as f64, y as f64) {
        Ok(json) => match env.new_string(&json) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}
