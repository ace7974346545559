use std::sync::Arc;

use crate::foundation::{
    core::{Canvas, premultiply_rgba8_in_place},
    error::{LobbyError, LobbyResult},
};

#[derive(Clone, Debug)]
/// Decoded raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Build from straight (non-premultiplied) RGBA8 pixels.
    pub fn from_straight_rgba8(width: u32, height: u32, mut rgba: Vec<u8>) -> LobbyResult<Self> {
        if width == 0 || height == 0 {
            return Err(LobbyError::decode("image has zero width or height"));
        }
        if rgba.len() != width as usize * height as usize * 4 {
            return Err(LobbyError::decode("rgba8 byte length mismatch"));
        }
        premultiply_rgba8_in_place(&mut rgba);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba),
        })
    }

    pub fn canvas(&self) -> LobbyResult<Canvas> {
        Canvas::new(self.width, self.height)
    }
}

pub fn decode_image(bytes: &[u8]) -> LobbyResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| LobbyError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PreparedImage::from_straight_rgba8(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
