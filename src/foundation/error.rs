pub type LobbyResult<T> = Result<T, LobbyError>;

#[derive(thiserror::Error, Debug)]
pub enum LobbyError {
    #[error("asset load error: {0}")]
    AssetLoad(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("generation error: {0}")]
    Generation(String),

    #[error("export error: {0}")]
    Export(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LobbyError {
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// The message without the category prefix, suitable for a user-facing notice.
    pub fn detail(&self) -> String {
        match self {
            Self::AssetLoad(m)
            | Self::Validation(m)
            | Self::Decode(m)
            | Self::Generation(m)
            | Self::Export(m) => m.clone(),
            Self::Other(e) => format!("{e:#}"),
        }
    }

    /// Recoverable failures only need a new user action; asset failures disable generation.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::AssetLoad(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
