//! SVG builder — accumulates SVG elements and produces the final string.

use super::constants::*;
use super::scene::{Scene, Shape};

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: 'Helvetica', 'Arial', sans-serif;">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, rx: f64, fill: &str) {
        if rx > 0.0 {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" fill="{}"/>"#,
                x, y, w, h, rx, fill
            ));
        } else {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                x, y, w, h, fill
            ));
        }
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            cx, cy, r, fill
        ));
    }

    pub(super) fn ring(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, width: f64) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
            cx, cy, r, stroke, width
        ));
    }

    pub(super) fn cross(&mut self, cx: f64, cy: f64, half: f64, stroke: &str, width: f64) {
        self.line(cx - half, cy - half, cx + half, cy + half, stroke, width);
        self.line(cx - half, cy + half, cx + half, cy - half, stroke, width);
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        weight: &str,
        fill: &str,
        anchor: &str,
    ) {
        let escaped = content
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
            x, y, size, weight, fill, anchor, escaped
        ));
    }

    pub(super) fn shape(&mut self, shape: &Shape) {
        match shape {
            Shape::Line { x1, y1, x2, y2, stroke, width } => {
                self.line(*x1, *y1, *x2, *y2, stroke, *width)
            }
            Shape::Rect { x, y, width, height, corner_radius, fill } => {
                self.rect(*x, *y, *width, *height, *corner_radius, fill)
            }
            Shape::Circle { cx, cy, r, fill } => self.circle(*cx, *cy, *r, fill),
            Shape::Ring { cx, cy, r, stroke, width } => self.ring(*cx, *cy, *r, stroke, *width),
            Shape::Cross { cx, cy, half, stroke, width } => {
                self.cross(*cx, *cy, *half, stroke, *width)
            }
            Shape::Text { x, y, content, size, weight, fill, anchor } => {
                self.text(*x, *y, content, *size, weight, fill, anchor.as_str())
            }
        }
    }
}

/// Serialize a scene as a standalone SVG document on a white background.
pub(super) fn scene_to_svg(scene: &Scene) -> String {
    let mut svg = SvgBuilder::new(scene.width, scene.height);
    svg.rect(0.0, 0.0, scene.width, scene.height, 0.0, BACKGROUND_COLOR);
    for element in &scene.elements {
        svg.shape(&element.shape);
    }
    svg.build()
}
