use crate::{
    assets::{
        decode::{PreparedImage, decode_image},
        source::AssetSource,
        text::LobbyFont,
    },
    foundation::error::{LobbyError, LobbyResult},
    template::LobbyTemplate,
};

/// Everything the compositor reads besides the per-request avatar and name.
///
/// Loaded once at startup and shared immutably (usually behind an `Arc`) by every generation.
#[derive(Clone, Debug)]
pub struct TemplateAssets {
    pub template: LobbyTemplate,
    pub background: PreparedImage,
    pub frame: PreparedImage,
    pub font: LobbyFont,
}

/// Fetches and decodes template assets.
#[derive(Clone, Debug)]
pub struct AssetLoader {
    client: reqwest::Client,
}

impl AssetLoader {
    pub fn new() -> LobbyResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fakelobby/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LobbyError::asset_load(format!("build http client: {e}")))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch and decode a raster image. Any failure is an [`LobbyError::AssetLoad`].
    #[tracing::instrument(skip_all, fields(source = %source))]
    pub async fn load_image(&self, source: &AssetSource) -> LobbyResult<PreparedImage> {
        let bytes = source.fetch(&self.client).await?;
        let image = decode_image(&bytes).map_err(|e| {
            LobbyError::asset_load(format!("'{source}' is not a decodable image: {}", e.detail()))
        })?;
        tracing::debug!(width = image.width, height = image.height, "image loaded");
        Ok(image)
    }

    /// Fetch font bytes and check they register under a family name.
    #[tracing::instrument(skip_all, fields(source = %source, family = %family))]
    pub async fn load_font(&self, source: &AssetSource, family: &str) -> LobbyResult<LobbyFont> {
        let bytes = source.fetch(&self.client).await?;
        let font = LobbyFont::from_bytes(family, bytes).map_err(|e| {
            LobbyError::asset_load(format!("'{source}' is not a usable font: {}", e.detail()))
        })?;
        tracing::debug!(resolved_family = %font.resolved_family, "font loaded");
        Ok(font)
    }

    /// Load background, frame and font concurrently; the first failure fails the whole set.
    #[tracing::instrument(skip_all)]
    pub async fn load_template(&self, template: &LobbyTemplate) -> LobbyResult<TemplateAssets> {
        template
            .validate()
            .map_err(|e| LobbyError::asset_load(format!("invalid template: {}", e.detail())))?;

        let src = &template.sources;
        let (background, frame, font) = tokio::try_join!(
            self.load_image(&src.background),
            self.load_image(&src.frame),
            self.load_font(&src.font, &src.font_family),
        )?;

        tracing::info!(
            width = background.width,
            height = background.height,
            "template assets loaded"
        );
        Ok(TemplateAssets {
            template: template.clone(),
            background,
            frame,
            font,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
