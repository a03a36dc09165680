//! Scene graph — the drawable output of the renderer.
//!
//! A scene is a canvas size plus an ordered list of primitives, painted in
//! order. Hosts either walk it themselves (canvas, native views) or hand it
//! to the SVG builder.

use serde::Serialize;

/// What a primitive depicts on the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    Nut,
    Fret,
    String,
    Dot,
    OpenString,
    SilentString,
    Barre,
    Title,
    FretOffset,
}

impl Part {
    /// Whether the part is a fingering marker rather than neck or text.
    pub fn is_marker(self) -> bool {
        matches!(
            self,
            Part::Dot | Part::OpenString | Part::SilentString | Part::Barre
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    End,
}

impl TextAnchor {
    pub(super) fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &'static str,
        width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
        fill: &'static str,
    },
    /// Filled disc.
    Circle { cx: f64, cy: f64, r: f64, fill: &'static str },
    /// Stroked, unfilled circle.
    Ring {
        cx: f64,
        cy: f64,
        r: f64,
        stroke: &'static str,
        width: f64,
    },
    /// Diagonal cross centred on `(cx, cy)`, `half` from centre to tip.
    Cross {
        cx: f64,
        cy: f64,
        half: f64,
        stroke: &'static str,
        width: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        weight: &'static str,
        fill: &'static str,
        anchor: TextAnchor,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub part: Part,
    pub shape: Shape,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    pub fn parts(&self, part: Part) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter().filter(move |e| e.part == part)
    }

    pub fn count(&self, part: Part) -> usize {
        self.parts(part).count()
    }

    pub fn marker_count(&self) -> usize {
        self.elements.iter().filter(|e| e.part.is_marker()).count()
    }

    /// Content of the first text element of the given part.
    pub fn text(&self, part: Part) -> Option<&str> {
        self.parts(part).find_map(|e| match &e.shape {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}
