use std::path::PathBuf;

use anyhow::Context as _;

use crate::{
    export::png::{PNG_MIME, to_png_bytes},
    foundation::error::LobbyResult,
    render::FrameRGBA,
};

pub const SHARE_FILE_NAME: &str = "ml-lobby.png";
pub const SHARE_TITLE: &str = "My ML Lobby";
pub const SHARE_TEXT: &str = "Check out my Mobile Legends lobby!";

/// In-memory file handed to a platform share mechanism.
#[derive(Clone, Debug)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user dismissed the share sheet. Not an error.
    Cancelled,
    /// No share mechanism on this platform.
    Unsupported,
}

/// Platform share mechanism. Returning `Cancelled` is a normal outcome; errors are for
/// transport failures.
pub trait ShareTarget {
    fn share(&mut self, payload: &SharePayload) -> LobbyResult<ShareOutcome>;
}

pub fn to_shareable(frame: &FrameRGBA) -> LobbyResult<SharePayload> {
    Ok(SharePayload {
        title: SHARE_TITLE.to_string(),
        text: SHARE_TEXT.to_string(),
        file_name: SHARE_FILE_NAME.to_string(),
        mime: PNG_MIME.to_string(),
        bytes: to_png_bytes(frame)?,
    })
}

/// Drops shared files into a directory (a stand-in for a share sheet on the command line).
#[derive(Clone, Debug)]
pub struct DirShareTarget {
    pub dir: PathBuf,
    pub last_path: Option<PathBuf>,
}

impl DirShareTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_path: None,
        }
    }
}

impl ShareTarget for DirShareTarget {
    fn share(&mut self, payload: &SharePayload) -> LobbyResult<ShareOutcome> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create share dir '{}'", self.dir.display()))?;
        let path = self.dir.join(&payload.file_name);
        std::fs::write(&path, &payload.bytes)
            .with_context(|| format!("write shared file '{}'", path.display()))?;
        tracing::info!(path = %path.display(), title = %payload.title, "shared");
        self.last_path = Some(path);
        Ok(ShareOutcome::Shared)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/share.rs"]
mod tests;
