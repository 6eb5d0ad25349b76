use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainRagError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChainRagError {
    /// HTTP status this error surfaces as at the API boundary.
    ///
    /// Failures of the three external calls (embedding, vector index,
    /// completion) and raw transport errors are upstream problems and map
    /// to 502; everything else falls back to a generic 500.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Http(_)
            | Self::Embedding(_)
            | Self::Retrieval(_)
            | Self::Completion(_)
            | Self::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChainRagError>;
