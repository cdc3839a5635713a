//! Card rendering: fixed-template layout, then CPU rasterization.

pub mod cpu;
pub mod fonts;
pub mod layout;
pub mod text;
pub mod theme;

use crate::foundation::error::SparkResult;

pub use cpu::{CardBitmap, CardRasterizer};
pub use fonts::{FontFace, FontSet, FontSource};
pub use layout::{CardContent, CardLayout, DrawOp, layout_card};
pub use text::wrap_columns;
pub use theme::{CardTemplate, FontRole};

/// Lay out and paint one card.
pub fn render_card(
    template: &CardTemplate,
    content: &CardContent<'_>,
    fonts: &FontSet,
) -> SparkResult<CardBitmap> {
    let layout = layout_card(template, content);
    if layout.overflowed {
        tracing::warn!(
            dropped_lines = layout.dropped_lines,
            variant = %template.variant,
            "card content overflowed, trailing sections dropped"
        );
    }
    CardRasterizer::new().rasterize(&layout, fonts)
}
