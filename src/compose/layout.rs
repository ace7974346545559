use crate::{
    foundation::core::{Canvas, Point, Rect},
    template::{LayoutConfig, TextStyle},
};

/// Resolved placement of every layer for one output canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LobbyLayout {
    pub canvas: Canvas,
    /// Frame overlay destination.
    pub frame: Rect,
    /// Avatar destination, centered in the frame.
    pub avatar: Rect,
    /// Horizontal center and baseline of the display name.
    pub label_anchor: Point,
}

impl LobbyLayout {
    pub fn compute(canvas: Canvas, cfg: &LayoutConfig) -> Self {
        let (w, h) = (canvas.width_f64(), canvas.height_f64());

        let center_x = (w - cfg.frame_size) / 2.0;
        let center_y = (h - cfg.frame_size) / 2.0 - cfg.frame_offset_y;
        let inset = (cfg.frame_size - cfg.avatar_size) / 2.0;
        let avatar_x = center_x + inset;
        let avatar_y = center_y + inset - cfg.avatar_nudge_y;

        Self {
            canvas,
            frame: Rect::new(
                center_x,
                center_y,
                center_x + cfg.frame_size,
                center_y + cfg.frame_size,
            ),
            avatar: Rect::new(
                avatar_x,
                avatar_y,
                avatar_x + cfg.avatar_size,
                avatar_y + cfg.avatar_size,
            ),
            label_anchor: Point::new(
                w / 2.0 + cfg.label_nudge_x,
                center_y + cfg.frame_size + cfg.label_gap,
            ),
        }
    }
}

/// Largest centered square inside a `width × height` image.
pub fn centered_square_crop(width: u32, height: u32) -> Rect {
    let (w, h) = (f64::from(width), f64::from(height));
    let side = w.min(h);
    let x = (w - side) / 2.0;
    let y = (h - side) / 2.0;
    Rect::new(x, y, x + side, y + side)
}

/// Trimmed name, or the style's default when nothing is left.
///
/// A byte-order mark counts as whitespace here.
pub fn resolve_display_name(raw: &str, style: &TextStyle) -> String {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        style.default_name.clone()
    } else {
        trimmed.to_string()
    }
}

/// Shrink linearly with the characters past `max_chars`, never below `min_font_size`.
///
/// Length is in UTF-16 code units, so a character outside the BMP counts twice.
pub fn font_size_for(name: &str, style: &TextStyle) -> f32 {
    let len = name.encode_utf16().count();
    if len <= style.max_chars {
        return style.max_font_size;
    }
    let excess = (len - style.max_chars) as f32;
    (style.max_font_size - excess * style.shrink_per_char).max(style.min_font_size)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layout.rs"]
mod tests;
