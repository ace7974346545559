//! Template configuration: where the artwork comes from and how it is calibrated.
//!
//! The defaults reproduce the stock lobby template exactly. The offsets below are tuned to that
//! one background image; a different background needs its own values.

use std::path::Path;

use crate::{
    assets::source::AssetSource,
    foundation::error::{LobbyError, LobbyResult},
};

pub const DEFAULT_BACKGROUND_URL: &str = "https://files.catbox.moe/liplnf.jpg";
pub const DEFAULT_FRAME_URL: &str = "https://files.catbox.moe/2vm2lt.png";
pub const DEFAULT_FONT_URL: &str = "https://cloudkuimages.com/uploads/files/CL8QHRYN.ttf";
pub const DEFAULT_FONT_FAMILY: &str = "CustomFont";
pub const DEFAULT_DISPLAY_NAME: &str = "ML Player";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LobbyTemplate {
    pub sources: TemplateSources,
    pub layout: LayoutConfig,
    pub text: TextStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TemplateSources {
    /// Background artwork (JPEG). Its native size is the output size.
    pub background: AssetSource,
    /// Frame overlay (PNG with a transparent cutout).
    pub frame: AssetSource,
    /// TrueType font for the display name.
    pub font: AssetSource,
    pub font_family: String,
}

impl Default for TemplateSources {
    fn default() -> Self {
        Self {
            background: AssetSource::parse(DEFAULT_BACKGROUND_URL),
            frame: AssetSource::parse(DEFAULT_FRAME_URL),
            font: AssetSource::parse(DEFAULT_FONT_URL),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

/// Pixel geometry in the background's own pixel space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub avatar_size: f64,
    pub frame_size: f64,
    /// Lift of the frame above the canvas' vertical center.
    pub frame_offset_y: f64,
    /// Lift of the avatar inside the frame.
    pub avatar_nudge_y: f64,
    /// Shift of the label from the horizontal canvas center.
    pub label_nudge_x: f64,
    /// Distance from the frame's bottom edge to the label baseline.
    pub label_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            avatar_size: 205.0,
            frame_size: 293.0,
            frame_offset_y: 282.0,
            avatar_nudge_y: 3.0,
            label_nudge_x: 13.0,
            label_gap: 15.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub max_font_size: f32,
    pub min_font_size: f32,
    /// Names longer than this shrink by `shrink_per_char` per extra character.
    pub max_chars: usize,
    pub shrink_per_char: f32,
    pub color_rgba8: [u8; 4],
    /// Substituted for empty or whitespace-only names.
    pub default_name: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            max_font_size: 36.0,
            min_font_size: 24.0,
            max_chars: 11,
            shrink_per_char: 2.0,
            color_rgba8: [255, 255, 255, 255],
            default_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}

impl LobbyTemplate {
    pub fn from_reader(reader: impl std::io::Read) -> LobbyResult<Self> {
        let template: Self = serde_json::from_reader(reader)
            .map_err(|e| LobbyError::validation(format!("parse template json: {e}")))?;
        template.validate()?;
        Ok(template)
    }

    pub fn from_path(path: impl AsRef<Path>) -> LobbyResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            LobbyError::validation(format!("open template '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> LobbyResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LobbyError::validation(format!("serialize template: {e}")))
    }

    pub fn validate(&self) -> LobbyResult<()> {
        let l = &self.layout;
        for (name, v) in [("avatar_size", l.avatar_size), ("frame_size", l.frame_size)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(LobbyError::validation(format!(
                    "layout.{name} must be finite and > 0"
                )));
            }
        }
        for (name, v) in [
            ("frame_offset_y", l.frame_offset_y),
            ("avatar_nudge_y", l.avatar_nudge_y),
            ("label_nudge_x", l.label_nudge_x),
            ("label_gap", l.label_gap),
        ] {
            if !v.is_finite() {
                return Err(LobbyError::validation(format!(
                    "layout.{name} must be finite"
                )));
            }
        }

        let t = &self.text;
        if !t.min_font_size.is_finite() || t.min_font_size <= 0.0 {
            return Err(LobbyError::validation(
                "text.min_font_size must be finite and > 0",
            ));
        }
        if !t.max_font_size.is_finite() || t.max_font_size < t.min_font_size {
            return Err(LobbyError::validation(
                "text.max_font_size must be finite and >= text.min_font_size",
            ));
        }
        if !t.shrink_per_char.is_finite() || t.shrink_per_char < 0.0 {
            return Err(LobbyError::validation(
                "text.shrink_per_char must be finite and >= 0",
            ));
        }
        if t.default_name.trim().is_empty() {
            return Err(LobbyError::validation("text.default_name must be non-empty"));
        }
        if self.sources.font_family.trim().is_empty() {
            return Err(LobbyError::validation(
                "sources.font_family must be non-empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/template/config.rs"]
mod tests;
