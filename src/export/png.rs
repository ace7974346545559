use std::{
    io::Cursor,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{LobbyError, LobbyResult},
    render::FrameRGBA,
};

pub const PNG_MIME: &str = "image/png";

/// PNG ready to be saved under a timestamped name.
#[derive(Clone, Debug)]
pub struct DownloadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DownloadFile {
    /// Write into `dir` (created if needed) and return the full path.
    pub fn save_into(&self, dir: impl AsRef<Path>) -> LobbyResult<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(path)
    }
}

/// Encode `frame` as PNG. The frame itself is left untouched.
pub fn to_png_bytes(frame: &FrameRGBA) -> LobbyResult<Vec<u8>> {
    let straight = frame.to_straight_rgba8();
    let img = image::RgbaImage::from_raw(frame.width, frame.height, straight)
        .ok_or_else(|| LobbyError::export("invalid rgba buffer size"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| LobbyError::export(format!("encode png: {e}")))?;
    Ok(buf)
}

pub fn download_file_name(unix_millis: u128) -> String {
    format!("ml-lobby-{unix_millis}.png")
}

pub fn to_downloadable_file(frame: &FrameRGBA) -> LobbyResult<DownloadFile> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    Ok(DownloadFile {
        file_name: download_file_name(millis),
        bytes: to_png_bytes(frame)?,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
