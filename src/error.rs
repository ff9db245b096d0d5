use std::path::PathBuf;

pub type QuotecardResult<T> = Result<T, QuotecardError>;

#[derive(thiserror::Error, Debug)]
pub enum QuotecardError {
    #[error("cover filename error: {0}")]
    CoverName(String),

    #[error("Could not read quote file: {}", .0.display())]
    QuoteRead(PathBuf),

    #[error("Could not read cover image: {}", .0.display())]
    CoverRead(PathBuf),

    #[error("font error: {0}")]
    Font(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuotecardError {
    pub fn cover_name(msg: impl Into<String>) -> Self {
        Self::CoverName(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
