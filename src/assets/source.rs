use std::{fmt, path::PathBuf};

use crate::foundation::error::{LobbyError, LobbyResult};

/// Where a template asset is fetched from.
///
/// Serialized as a plain string: `http://` and `https://` prefixes select a remote URL, anything
/// else is a filesystem path.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetSource {
    Url(String),
    Path(PathBuf),
}

impl AssetSource {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::Path(PathBuf::from(raw))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Fetch the raw bytes behind this source.
    ///
    /// Unreachable sources and non-success HTTP statuses surface as [`LobbyError::AssetLoad`].
    pub async fn fetch(&self, client: &reqwest::Client) -> LobbyResult<Vec<u8>> {
        match self {
            Self::Url(url) => {
                let resp = client
                    .get(url)
                    .send()
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(|e| LobbyError::asset_load(format!("fetch '{url}': {e}")))?;
                let bytes = resp
                    .bytes()
                    .await
                    .map_err(|e| LobbyError::asset_load(format!("read body of '{url}': {e}")))?;
                Ok(bytes.to_vec())
            }
            Self::Path(path) => tokio::fs::read(path).await.map_err(|e| {
                LobbyError::asset_load(format!("read '{}': {e}", path.display()))
            }),
        }
    }
}

impl From<String> for AssetSource {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<AssetSource> for String {
    fn from(src: AssetSource) -> Self {
        src.to_string()
    }
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
