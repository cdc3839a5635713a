//! Card layout: a flat list of draw ops computed top to bottom.
//!
//! Fixed chrome (accent bars, brand header, footer) is always emitted. Everything
//! between the header and the footer is flow content placed by a cursor; the first
//! flow element that would cross the footer top is dropped along with all later ones.

use chrono::NaiveDate;

use crate::catalog::ProductConcept;
use crate::config::Variant;
use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::render::text::wrap_columns;
use crate::render::theme::{Background, CardTemplate, FontRole, TextStyle};

pub const BRAND_LABEL: &str = "ONE SPARK";
pub const CLASSIC_FOOTER: &str = "Generated by One Spark • Your daily dose of product innovation";
const PRO_FOOTER_PREFIX: &str = "Generated by One Spark";

/// Everything the card shows.
#[derive(Clone, Copy, Debug)]
pub struct CardContent<'a> {
    pub concept: &'a ProductConcept,
    pub category: &'a str,
    /// Text under "THE PROBLEM".
    pub problem: &'a str,
    /// Shown in the pro footer.
    pub generated_on: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgba8,
    },
    StrokeRect {
        rect: Rect,
        color: Rgba8,
        width: f64,
    },
    /// `origin` is the top-left of the line box.
    Text {
        origin: Point,
        text: String,
        role: FontRole,
        size: f32,
        color: Rgba8,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    pub canvas: Canvas,
    pub background: Background,
    pub ops: Vec<DrawOp>,
    /// Flow content was dropped to keep the footer clear.
    pub overflowed: bool,
    /// Text lines lost to overflow.
    pub dropped_lines: usize,
}

impl CardLayout {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

struct LayoutBuilder {
    ops: Vec<DrawOp>,
    y: f64,
    flow_limit: f64,
    overflowed: bool,
    dropped_lines: usize,
}

impl LayoutBuilder {
    fn new(start_y: f64, flow_limit: f64) -> Self {
        Self {
            ops: Vec::new(),
            y: start_y,
            flow_limit,
            overflowed: false,
            dropped_lines: 0,
        }
    }

    fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    fn fixed(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Place a flow element spanning down to `bottom`, or drop it.
    fn flow(&mut self, bottom: f64, ops: Vec<DrawOp>) {
        if !self.overflowed && bottom > self.flow_limit {
            self.overflowed = true;
        }
        if self.overflowed {
            self.dropped_lines += ops
                .iter()
                .filter(|op| matches!(op, DrawOp::Text { .. }))
                .count();
            return;
        }
        self.ops.extend(ops);
    }

    fn flow_text(&mut self, x: f64, text: &str, style: TextStyle, color: Rgba8) {
        let bottom = self.y + style.line_height();
        let op = text_op(x, self.y, text, style, color);
        self.flow(bottom, vec![op]);
    }

    fn finish(self, template: &CardTemplate) -> CardLayout {
        CardLayout {
            canvas: template.canvas,
            background: template.background,
            ops: self.ops,
            overflowed: self.overflowed,
            dropped_lines: self.dropped_lines,
        }
    }
}

fn text_op(x: f64, y: f64, text: &str, style: TextStyle, color: Rgba8) -> DrawOp {
    DrawOp::Text {
        origin: Point::new(x, y),
        text: text.to_string(),
        role: style.role,
        size: style.size,
        color,
    }
}

fn hline(x0: f64, x1: f64, y: f64, width: f64, color: Rgba8) -> DrawOp {
    DrawOp::FillRect {
        rect: Rect::new(x0, y - width / 2.0, x1, y + width / 2.0),
        color,
    }
}

fn subtitle(category: &str) -> String {
    format!("Daily Product Idea • {}", category.to_uppercase())
}

/// Lay out `content` with `template`.
pub fn layout_card(template: &CardTemplate, content: &CardContent<'_>) -> CardLayout {
    match template.variant {
        Variant::Classic => layout_classic(template, content),
        Variant::Pro => layout_pro(template, content),
    }
}

fn layout_classic(t: &CardTemplate, c: &CardContent<'_>) -> CardLayout {
    let p = &t.palette;
    let ts = &t.type_scale;
    let (w, h) = (t.canvas.w(), t.canvas.h());
    let margin = 60.0;
    let footer_top = h - 60.0;
    let mut b = LayoutBuilder::new(140.0, footer_top);

    b.fixed(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, w, 8.0),
        color: p.accent,
    });
    b.fixed(text_op(margin, 40.0, BRAND_LABEL, ts.brand, p.accent));
    b.fixed(text_op(margin, 60.0, &subtitle(c.category), ts.subtitle, p.text_muted));

    b.flow_text(margin, &c.concept.name, ts.title, p.text);
    b.advance(80.0);
    b.flow_text(margin, &c.concept.tagline, ts.tagline, p.highlight);
    b.advance(60.0);
    let y = b.y;
    b.flow(y + 1.0, vec![hline(margin, w - margin, y, 2.0, p.divider)]);

    b.advance(30.0);
    b.flow_text(margin, "THE PROBLEM", ts.section, p.accent);
    b.advance(30.0);
    for line in wrap_columns(c.problem, t.wrap_width) {
        b.flow_text(margin, &line, ts.body, p.text_muted);
        b.advance(32.0);
    }

    b.advance(20.0);
    b.flow_text(margin, "THE SOLUTION", ts.section, p.accent);
    b.advance(30.0);
    let desc = wrap_columns(&c.concept.description, t.wrap_width);
    let cap = t.description_max_lines.unwrap_or(desc.len());
    for line in desc.iter().take(cap) {
        b.flow_text(margin, line, ts.body, p.text);
        b.advance(32.0);
    }

    b.advance(30.0);
    b.flow_text(margin, "KEY FEATURES", ts.section, p.accent);
    b.advance(30.0);
    for feature in c.concept.features.iter().take(t.max_features) {
        b.flow_text(margin, &format!("→ {feature}"), ts.small, p.text);
        b.advance(28.0);
    }

    b.advance(30.0);
    let box_y = b.y;
    let panel = Rect::new(margin, box_y, w - margin, box_y + 100.0);
    let mut boxed = vec![
        DrawOp::FillRect {
            rect: panel,
            color: p.panel,
        },
        DrawOp::StrokeRect {
            rect: panel,
            color: p.divider,
            width: 1.0,
        },
        text_op(80.0, box_y + 15.0, "PRICE POINT", ts.section, p.text_muted),
        text_op(80.0, box_y + 40.0, &c.concept.price_point, ts.price, p.highlight),
        text_op(400.0, box_y + 15.0, "VIBE", ts.section, p.text_muted),
    ];
    let mut vibe_y = box_y + 40.0;
    for line in wrap_columns(&c.concept.vibe, 30).iter().take(2) {
        boxed.push(text_op(400.0, vibe_y, line, ts.small, p.text));
        vibe_y += 24.0;
    }
    b.flow(panel.y1, boxed);

    b.fixed(DrawOp::FillRect {
        rect: Rect::new(0.0, footer_top, w, h),
        color: p.panel,
    });
    b.fixed(text_op(margin, h - 42.0, CLASSIC_FOOTER, ts.small, p.text_muted));
    b.finish(t)
}

fn layout_pro(t: &CardTemplate, c: &CardContent<'_>) -> CardLayout {
    let p = &t.palette;
    let ts = &t.type_scale;
    let (w, h) = (t.canvas.w(), t.canvas.h());
    let margin = 60.0;
    let footer_top = h - 100.0;
    let mut b = LayoutBuilder::new(80.0, footer_top);

    b.fixed(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, w, 6.0),
        color: p.accent,
    });
    b.fixed(text_op(margin, 80.0, BRAND_LABEL, ts.brand, p.accent));
    b.fixed(text_op(margin, 115.0, &subtitle(c.category), ts.subtitle, p.text_muted));
    b.advance(115.0);

    b.flow_text(margin, &c.concept.name, ts.title, p.text);
    b.advance(100.0);
    b.flow_text(margin, &c.concept.tagline, ts.tagline, p.highlight);
    b.advance(80.0);
    let y = b.y;
    b.flow(y + 1.0, vec![hline(margin, w - margin, y, 2.0, p.divider)]);
    b.advance(50.0);

    b.flow_text(margin, "THE PROBLEM", ts.section, p.accent);
    b.advance(40.0);
    for line in wrap_columns(c.problem, t.wrap_width) {
        b.flow_text(margin, &line, ts.body, p.text_muted);
        b.advance(38.0);
    }
    b.advance(30.0);

    b.flow_text(margin, "THE SOLUTION", ts.section, p.accent_secondary);
    b.advance(40.0);
    let desc = wrap_columns(&c.concept.description, t.wrap_width);
    let cap = t.description_max_lines.unwrap_or(desc.len());
    for line in desc.iter().take(cap) {
        b.flow_text(margin, line, ts.body, p.text);
        b.advance(38.0);
    }
    b.advance(40.0);

    b.flow_text(margin, "KEY FEATURES", ts.section, p.accent);
    b.advance(40.0);
    for feature in c.concept.features.iter().take(t.max_features) {
        b.flow_text(margin, &format!("→  {feature}"), ts.small, p.text);
        b.advance(36.0);
    }
    b.advance(40.0);

    let box_y = b.y;
    let panel = Rect::new(margin, box_y, w - margin, box_y + 180.0);
    let inset = margin + 30.0;
    let mut boxed = vec![
        DrawOp::FillRect {
            rect: panel,
            color: p.panel,
        },
        DrawOp::StrokeRect {
            rect: panel,
            color: p.divider,
            width: 2.0,
        },
        text_op(inset, box_y + 20.0, "PRICE POINT", ts.section, p.text_muted),
        text_op(inset, box_y + 55.0, &c.concept.price_point, ts.price, p.highlight),
        text_op(inset, box_y + 120.0, "VIBE", ts.section, p.text_muted),
    ];
    if let Some(line) = wrap_columns(&c.concept.vibe, 45).first() {
        boxed.push(text_op(inset, box_y + 145.0, line, ts.small, p.text));
    }
    b.flow(panel.y1, boxed);

    b.fixed(DrawOp::FillRect {
        rect: Rect::new(0.0, footer_top, w, h),
        color: p.panel,
    });
    let caption = match c.generated_on {
        Some(date) => format!("{PRO_FOOTER_PREFIX} • {}", date.format("%B %d, %Y")),
        None => PRO_FOOTER_PREFIX.to_string(),
    };
    b.fixed(text_op(margin, footer_top + 35.0, &caption, ts.small, p.text_muted));
    b.fixed(DrawOp::FillRect {
        rect: Rect::new(0.0, h - 6.0, w, h),
        color: p.accent_secondary,
    });
    b.finish(t)
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
