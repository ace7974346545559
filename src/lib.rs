//! fakelobby renders "fake lobby" screenshots: a user's avatar and display name composited onto
//! a fixed game-lobby template.
//!
//! # Pipeline overview
//!
//! 1. **Load**: background, frame overlay and label font are fetched once ([`AssetLoader`]) into
//!    an immutable [`TemplateAssets`].
//! 2. **Upload**: a user file is validated and decoded into an [`AvatarImage`] ([`accept_file`]).
//! 3. **Compose**: background, center-cropped avatar, frame overlay and the name are drawn in
//!    that order onto a canvas the size of the background ([`compose`]).
//! 4. **Export**: the result is encoded as PNG for download or share.
//!
//! [`LobbySession`] ties the steps together the way an interactive front end drives them and
//! reports every outcome through a pluggable [`Notifier`].
//!
//! Pixels are premultiplied RGBA8 until export.
#![forbid(unsafe_code)]

mod app;
mod assets;
mod compose;
mod export;
mod foundation;
mod render;
mod template;
mod upload;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;

pub use app::notify::{
    ConsoleNotifier, Notice, NoticeLevel, Notifier, RecordingNotifier, TracingNotifier,
};
pub use app::session::{AssetState, LobbySession, WELCOME_MESSAGE};
pub use assets::decode::{PreparedImage, decode_image};
pub use assets::source::AssetSource;
pub use assets::store::{AssetLoader, TemplateAssets};
pub use assets::text::{LobbyFont, TextBrushRgba8, TextLayoutEngine};
pub use compose::compositor::{LobbyRequest, compose};
pub use compose::layout::{LobbyLayout, centered_square_crop, font_size_for, resolve_display_name};
pub use export::png::{
    DownloadFile, PNG_MIME, download_file_name, to_downloadable_file, to_png_bytes,
};
pub use export::share::{
    DirShareTarget, SHARE_FILE_NAME, SHARE_TEXT, SHARE_TITLE, ShareOutcome, SharePayload,
    ShareTarget, to_shareable,
};
pub use foundation::core::{Affine, Canvas, Point, Rect};
pub use foundation::error::{LobbyError, LobbyResult};
pub use render::FrameRGBA;
pub use render::cpu::CpuSurface;
pub use template::{
    DEFAULT_BACKGROUND_URL, DEFAULT_DISPLAY_NAME, DEFAULT_FONT_FAMILY, DEFAULT_FONT_URL,
    DEFAULT_FRAME_URL, LayoutConfig, LobbyTemplate, TemplateSources, TextStyle,
};
pub use upload::handler::{
    AvatarImage, INVALID_TYPE_MESSAGE, UploadedFile, accept_file, declared_type_for_path,
};
