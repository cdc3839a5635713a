use std::sync::Arc;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::SparkResult;
use crate::foundation::math::Fnv1a64;
use crate::render::fonts::{FontFace, FontSet};
use crate::render::layout::{CardLayout, DrawOp};
use crate::render::text::TextLayoutEngine;
use crate::render::theme::Background;

/// Rendered card pixels, row-major RGBA8.
///
/// Every paint on a card is opaque, so the premultiplied buffer produced by the
/// rasterizer is also a valid straight-alpha buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardBitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl CardBitmap {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// FNV-1a over dimensions and pixels.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.data);
        h.finish()
    }
}

/// Paints a [`CardLayout`] with `vello_cpu`, shaping text with Parley.
pub struct CardRasterizer {
    text: TextLayoutEngine,
    fonts: Vec<(Arc<Vec<u8>>, vello_cpu::peniko::FontData)>,
}

impl Default for CardRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRasterizer {
    pub fn new() -> Self {
        Self {
            text: TextLayoutEngine::new(),
            fonts: Vec::new(),
        }
    }

    #[tracing::instrument(skip_all, fields(w = layout.canvas.width, h = layout.canvas.height))]
    pub fn rasterize(&mut self, layout: &CardLayout, fonts: &FontSet) -> SparkResult<CardBitmap> {
        let canvas = Canvas::new(layout.canvas.width, layout.canvas.height)?;
        // Canvas::new guarantees both sides fit in u16.
        let (px_w, px_h) = (canvas.width as u16, canvas.height as u16);

        let mut ctx = vello_cpu::RenderContext::new(px_w, px_h);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        paint_background(&mut ctx, layout);

        let mut skipped = 0usize;
        for op in &layout.ops {
            match op {
                DrawOp::FillRect { rect, color } => {
                    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    set_color(&mut ctx, *color);
                    ctx.fill_rect(&to_cpu_rect(rect.x0, rect.y0, rect.x1, rect.y1));
                }
                DrawOp::StrokeRect { rect, color, width } => {
                    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    set_color(&mut ctx, *color);
                    let w = *width;
                    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);
                    for edge in [
                        to_cpu_rect(x0, y0, x1, y0 + w),
                        to_cpu_rect(x0, y1 - w, x1, y1),
                        to_cpu_rect(x0, y0, x0 + w, y1),
                        to_cpu_rect(x1 - w, y0, x1, y1),
                    ] {
                        ctx.fill_rect(&edge);
                    }
                }
                DrawOp::Text {
                    origin,
                    text,
                    role,
                    size,
                    color,
                } => {
                    let Some(face) = fonts.face(*role) else {
                        skipped += 1;
                        continue;
                    };
                    let shaped = match self.text.layout_line(text, face, *size, (*color).into()) {
                        Ok(l) => l,
                        Err(e) => {
                            tracing::warn!(error = %e, text = %text, "text shaping failed, skipping");
                            skipped += 1;
                            continue;
                        }
                    };
                    let font = self.font_data(face);
                    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
                    for line in shaped.lines() {
                        for item in line.items() {
                            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                                continue;
                            };
                            let brush = run.style().brush;
                            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                                brush.r, brush.g, brush.b, brush.a,
                            ));
                            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                                id: g.id,
                                x: g.x,
                                y: g.y,
                            });
                            ctx.glyph_run(&font)
                                .font_size(run.run().font_size())
                                .fill_glyphs(glyphs);
                        }
                    }
                }
            }
        }
        if skipped > 0 && !fonts.is_empty() {
            tracing::warn!(skipped, "some card text could not be drawn");
        } else if skipped > 0 {
            tracing::debug!(skipped, "no fonts loaded, text skipped");
        }

        let mut pixmap = vello_cpu::Pixmap::new(px_w, px_h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        Ok(CardBitmap {
            width: layout.canvas.width,
            height: layout.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }

    fn font_data(&mut self, face: &FontFace) -> vello_cpu::peniko::FontData {
        if let Some((_, data)) = self
            .fonts
            .iter()
            .find(|(bytes, _)| Arc::ptr_eq(bytes, &face.bytes))
        {
            return data.clone();
        }
        let data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(face.bytes.as_ref().clone()),
            face.index,
        );
        self.fonts.push((Arc::clone(&face.bytes), data.clone()));
        data
    }
}

fn paint_background(ctx: &mut vello_cpu::RenderContext, layout: &CardLayout) {
    let (w, h) = (layout.canvas.w(), layout.canvas.h());
    match layout.background {
        Background::Solid(color) => {
            set_color(ctx, color);
            ctx.fill_rect(&to_cpu_rect(0.0, 0.0, w, h));
        }
        Background::VerticalGradient { top, bottom } => {
            for row in 0..layout.canvas.height {
                let y = f64::from(row);
                set_color(ctx, top.lerp(bottom, y / h));
                ctx.fill_rect(&to_cpu_rect(0.0, y, w, y + 1.0));
            }
        }
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn to_cpu_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(x0, y0, x1, y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
