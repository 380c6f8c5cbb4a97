//! SVG preview — accumulates SVG elements for a plan and produces the
//! final string.
//!
//! Host applications bring their own drawing surface; this one exists
//! for visual inspection and tests.

use crate::model::BarcodePlan;

const BACKGROUND_COLOR: &str = "#ffffff";
const INK_COLOR: &str = "#000000";

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: 'OCR-B', monospace;">"#,
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

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            x, y, w, h, fill
        ));
    }

    fn text(&mut self, x: f64, y: f64, ch: char, size: f64) {
        let escaped = match ch {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            c => c.to_string(),
        };
        self.elements.push(format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="{:.1}" fill="{}">{}</text>"#,
            x, y, size, INK_COLOR, escaped
        ));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Plan rendering
// ═══════════════════════════════════════════════════════════════════════

/// Render a plan into a complete SVG document string.
///
/// Plan bars carry their horizontal *center* in `x`; the rectangles
/// here hang half the ink width to each side of it.
pub fn plan_to_svg(plan: &BarcodePlan) -> String {
    let mut svg = SvgBuilder::new(plan.width, plan.height);
    svg.rect(0.0, 0.0, plan.width, plan.height, BACKGROUND_COLOR);
    for bar in &plan.bars {
        svg.rect(
            bar.x - bar.width / 2.0,
            bar.y,
            bar.width,
            bar.height,
            INK_COLOR,
        );
    }
    for glyph in &plan.chars {
        svg.text(glyph.x, glyph.y, glyph.ch, glyph.font_size);
    }
    svg.build()
}
