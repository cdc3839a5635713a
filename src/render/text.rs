use std::sync::Arc;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{SparkError, SparkResult};
use crate::render::fonts::FontFace;

/// Greedy word wrap on character columns.
///
/// Whitespace runs collapse to one space. Words longer than `width` are split so
/// that no line exceeds `width` characters.
pub fn wrap_columns(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut cur_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if cur_len > 0 && cur_len + 1 + word_len <= width {
            cur.push(' ');
            cur.push_str(word);
            cur_len += 1 + word_len;
            continue;
        }
        if cur_len > 0 {
            lines.push(std::mem::take(&mut cur));
            cur_len = 0;
        }
        if word_len <= width {
            cur.push_str(word);
            cur_len = word_len;
            continue;
        }

        let chars: Vec<char> = word.chars().collect();
        let mut chunks = chars.chunks(width).peekable();
        while let Some(chunk) = chunks.next() {
            let piece: String = chunk.iter().collect();
            if chunks.peek().is_some() {
                lines.push(piece);
            } else {
                cur_len = chunk.len();
                cur = piece;
            }
        }
    }
    if cur_len > 0 {
        lines.push(cur);
    }
    lines
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layouts.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Shapes single lines of card text with Parley.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    families: Vec<(Arc<Vec<u8>>, u32, String)>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: Vec::new(),
        }
    }

    /// Register `face` once and return the name of the family holding its index.
    fn family_for(&mut self, face: &FontFace) -> SparkResult<String> {
        if let Some((_, _, name)) = self
            .families
            .iter()
            .find(|(bytes, index, _)| Arc::ptr_eq(bytes, &face.bytes) && *index == face.index)
        {
            return Ok(name.clone());
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(face.bytes.as_ref().clone()),
            None,
        );
        let family_id = pick_family(&families, face.index)
            .ok_or_else(|| SparkError::render("no font families registered from font bytes"))?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SparkError::render("registered font family has no name"))?
            .to_string();
        self.families
            .push((Arc::clone(&face.bytes), face.index, name.clone()));
        Ok(name)
    }

    /// Lay out one pre-wrapped line without further breaking.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        face: &FontFace,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> SparkResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SparkError::validation("text size_px must be finite and > 0"));
        }
        let family_name = self.family_for(face)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }
}

/// Family containing the face at `index`, else the first one registered.
fn pick_family(
    families: &[(parley::fontique::FamilyId, Vec<parley::fontique::FontInfo>)],
    index: u32,
) -> Option<parley::fontique::FamilyId> {
    families
        .iter()
        .find(|(_, fonts)| fonts.iter().any(|f| f.index() == index))
        .or_else(|| families.first())
        .map(|(id, _)| *id)
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
