use std::{path::Path, sync::Arc};

use crate::{
    app::notify::{Notice, Notifier},
    assets::store::{AssetLoader, TemplateAssets},
    compose::compositor::{LobbyRequest, compose},
    export::{
        png::{DownloadFile, to_downloadable_file},
        share::{ShareOutcome, ShareTarget, to_shareable},
    },
    foundation::error::{LobbyError, LobbyResult},
    render::FrameRGBA,
    template::LobbyTemplate,
    upload::handler::{AvatarImage, INVALID_TYPE_MESSAGE, UploadedFile, accept_file},
};

pub const WELCOME_MESSAGE: &str =
    "Welcome to Fake ML Lobby Generator! Upload your avatar to begin";

#[derive(Clone, Debug)]
pub enum AssetState {
    Loading,
    Ready(Arc<TemplateAssets>),
    Failed(String),
}

/// State behind the generator UI: template assets, the staged avatar and the last result.
///
/// Every operation reports its outcome through the notifier as well as its return value.
pub struct LobbySession<N: Notifier> {
    template: LobbyTemplate,
    assets: AssetState,
    avatar: Option<AvatarImage>,
    result: Option<FrameRGBA>,
    notifier: N,
}

impl<N: Notifier> LobbySession<N> {
    /// Session whose assets still have to be loaded with [`LobbySession::load_assets`].
    pub fn new(template: LobbyTemplate, notifier: N) -> Self {
        Self {
            template,
            assets: AssetState::Loading,
            avatar: None,
            result: None,
            notifier,
        }
    }

    /// Session over assets the host already loaded.
    pub fn with_assets(assets: Arc<TemplateAssets>, notifier: N) -> Self {
        Self {
            template: assets.template.clone(),
            assets: AssetState::Ready(assets),
            avatar: None,
            result: None,
            notifier,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn template(&self) -> &LobbyTemplate {
        &self.template
    }

    pub fn welcome(&self) {
        self.notifier
            .notify(Notice::info(WELCOME_MESSAGE).for_millis(4000));
    }

    pub fn asset_state(&self) -> &AssetState {
        &self.assets
    }

    pub fn assets(&self) -> Option<&Arc<TemplateAssets>> {
        match &self.assets {
            AssetState::Ready(a) => Some(a),
            _ => None,
        }
    }

    /// Fetch the template assets. Calling it again after a failure retries the whole set.
    pub async fn load_assets(&mut self, loader: &AssetLoader) -> LobbyResult<Arc<TemplateAssets>> {
        self.assets = AssetState::Loading;
        match loader.load_template(&self.template).await {
            Ok(assets) => {
                let assets = Arc::new(assets);
                self.assets = AssetState::Ready(assets.clone());
                self.notifier.notify(
                    Notice::success("All resources loaded successfully!").for_millis(2000),
                );
                Ok(assets)
            }
            Err(e) => {
                tracing::warn!(error = %e, "asset load failed");
                self.assets = AssetState::Failed(e.detail());
                self.notifier.notify(Notice::error(
                    "Failed to load required resources. Please try again later.",
                ));
                Err(e)
            }
        }
    }

    /// Whether the generate trigger is enabled. `generate` borrows the session mutably, so a
    /// second generation cannot start while one runs.
    pub fn can_generate(&self) -> bool {
        matches!(self.assets, AssetState::Ready(_))
    }

    pub fn avatar(&self) -> Option<&AvatarImage> {
        self.avatar.as_ref()
    }

    /// Validate and decode `file`; on success it replaces the staged avatar.
    pub fn stage_avatar(&mut self, file: &UploadedFile) -> LobbyResult<()> {
        match accept_file(file) {
            Ok(avatar) => {
                self.avatar = Some(avatar);
                self.notifier
                    .notify(Notice::success("Avatar uploaded successfully!").for_millis(2000));
                Ok(())
            }
            Err(e) => {
                self.notify_upload_failure(&e);
                Err(e)
            }
        }
    }

    pub async fn stage_avatar_from_path(&mut self, path: impl AsRef<Path>) -> LobbyResult<()> {
        match UploadedFile::from_path(path).await {
            Ok(file) => self.stage_avatar(&file),
            Err(e) => {
                self.notify_upload_failure(&e);
                Err(e)
            }
        }
    }

    fn notify_upload_failure(&self, err: &LobbyError) {
        let msg = match err {
            LobbyError::Validation(_) => INVALID_TYPE_MESSAGE,
            _ => "Failed to read the image file",
        };
        self.notifier.notify(Notice::error(msg));
    }

    /// Composite the staged avatar and `display_name` onto the template.
    ///
    /// Rejected before any drawing when no avatar is staged or assets are not ready; the previous
    /// result is kept in that case and on failure.
    pub fn generate(&mut self, display_name: &str) -> LobbyResult<&FrameRGBA> {
        let Some(avatar) = self.avatar.clone() else {
            self.notifier
                .notify(Notice::warning("Please upload an avatar image first"));
            return Err(LobbyError::validation("no avatar image staged"));
        };
        let AssetState::Ready(assets) = &self.assets else {
            let err = LobbyError::generation("template assets are not loaded");
            self.notifier
                .notify(Notice::error(format!("Generation failed: {}", err.detail())));
            return Err(err);
        };
        let assets = assets.clone();

        let request = LobbyRequest::new(display_name, avatar, &assets.template.text);
        match compose(&assets, &request) {
            Ok(frame) => {
                self.notifier
                    .notify(Notice::success("Lobby generated successfully!").for_millis(3000));
                Ok(&*self.result.insert(frame))
            }
            Err(e) => {
                tracing::warn!(error = %e, "generation failed");
                self.notifier
                    .notify(Notice::error(format!("Generation failed: {}", e.detail())));
                Err(e)
            }
        }
    }

    pub fn result(&self) -> Option<&FrameRGBA> {
        self.result.as_ref()
    }

    pub fn download(&self) -> LobbyResult<DownloadFile> {
        let file = self
            .result
            .as_ref()
            .ok_or_else(|| LobbyError::export("no generated image to download"))
            .and_then(to_downloadable_file);
        match &file {
            Ok(_) => self
                .notifier
                .notify(Notice::success("Image download started!").for_millis(2000)),
            Err(e) => {
                tracing::warn!(error = %e, "download failed");
                self.notifier.notify(Notice::error("Failed to download image"));
            }
        }
        file
    }

    /// Hand the result to `target`. No target means sharing is unsupported here.
    pub fn share(&self, target: Option<&mut dyn ShareTarget>) -> LobbyResult<ShareOutcome> {
        let Some(target) = target else {
            self.notifier.notify(
                Notice::info("For sharing, please download the image first").for_millis(3000),
            );
            return Ok(ShareOutcome::Unsupported);
        };

        let outcome = self
            .result
            .as_ref()
            .ok_or_else(|| LobbyError::export("no generated image to share"))
            .and_then(to_shareable)
            .and_then(|payload| target.share(&payload));
        match &outcome {
            Ok(ShareOutcome::Shared) => self
                .notifier
                .notify(Notice::success("Content shared successfully!").for_millis(2000)),
            Ok(ShareOutcome::Cancelled | ShareOutcome::Unsupported) => {}
            Err(e) => {
                tracing::warn!(error = %e, "share failed");
                self.notifier.notify(Notice::warning("Sharing was cancelled"));
            }
        }
        outcome
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/session.rs"]
mod tests;
