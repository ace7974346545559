pub mod cpu;

use crate::foundation::core::{Canvas, unpremultiply_rgba8_in_place};

/// Finished raster surface.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Copy of the pixels with straight (non-premultiplied) alpha.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut straight = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut straight);
        }
        straight
    }
}
