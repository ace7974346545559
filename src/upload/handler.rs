use std::path::Path;

use crate::{
    assets::decode::{PreparedImage, decode_image},
    foundation::error::{LobbyError, LobbyResult},
};

pub const INVALID_TYPE_MESSAGE: &str = "Please select a valid image file (JPEG, PNG)";

/// A user-selected file as handed over by the file picker.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub name: String,
    /// MIME type claimed by the picker, e.g. `image/png`.
    pub declared_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, deriving its declared type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> LobbyResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| LobbyError::decode(format!("read '{}': {e}", path.display())))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, declared_type_for_path(path), bytes))
    }

    pub fn is_image(&self) -> bool {
        self.declared_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }
}

/// MIME type for `path` by extension; `application/octet-stream` when unknown.
pub fn declared_type_for_path(path: &Path) -> String {
    image::ImageFormat::from_path(path)
        .map(|f| f.to_mime_type().to_string())
        .unwrap_or_else(|_| "application/octet-stream".to_string())
}

/// Decoded avatar staged for the next generation.
#[derive(Clone, Debug)]
pub struct AvatarImage {
    pub file_name: String,
    pub image: PreparedImage,
}

/// Validate the declared type, then decode.
pub fn accept_file(file: &UploadedFile) -> LobbyResult<AvatarImage> {
    if !file.is_image() {
        return Err(LobbyError::validation(INVALID_TYPE_MESSAGE));
    }
    let image = decode_image(&file.bytes)?;
    tracing::debug!(
        file = %file.name,
        width = image.width,
        height = image.height,
        "avatar accepted"
    );
    Ok(AvatarImage {
        file_name: file.name.clone(),
        image,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/upload/handler.rs"]
mod tests;
