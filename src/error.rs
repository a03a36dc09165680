//! Errors raised while decoding chord input.
//!
//! Geometry never fails: out-of-range values are clamped or drawn as
//! nothing. Only the text and JSON decoding surface reports errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChordError {
    #[error("JSON chord document error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid fingering token '{token}'")]
    InvalidFingering { token: String },

    #[error("Fingering contains no positions")]
    EmptyFingering,

    #[error("Invalid diagram layout: {0}")]
    InvalidLayout(String),
}
