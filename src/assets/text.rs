use std::sync::Arc;

use crate::foundation::error::{LobbyError, LobbyResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<[u8; 4]> for TextBrushRgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone)]
/// Custom label font: raw TrueType bytes plus the family name they registered under.
pub struct LobbyFont {
    /// Family alias the template asked for (e.g. `CustomFont`).
    pub family: String,
    /// Family name found inside the font data.
    pub resolved_family: String,
    pub bytes: Arc<Vec<u8>>,
}

impl LobbyFont {
    /// Register `bytes` with a fresh text engine to prove they hold a usable font.
    pub fn from_bytes(family: impl Into<String>, bytes: Vec<u8>) -> LobbyResult<Self> {
        let mut engine = TextLayoutEngine::new();
        let resolved_family = engine.register_font(&bytes)?;
        Ok(Self {
            family: family.into(),
            resolved_family,
            bytes: Arc::new(bytes),
        })
    }
}

impl std::fmt::Debug for LobbyFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LobbyFont")
            .field("family", &self.family)
            .field("resolved_family", &self.resolved_family)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes and return the first family name they provide.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> LobbyResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| LobbyError::validation("no font families registered from font bytes"))?;

        Ok(self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| LobbyError::validation("registered font family has no name"))?
            .to_string())
    }

    /// Shape a single unwrapped line of `text` in `font`.
    pub fn layout_line(
        &mut self,
        text: &str,
        font: &LobbyFont,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> LobbyResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(LobbyError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let family_name = self.register_font(font.bytes.as_slice())?;

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
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
