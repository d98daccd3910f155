pub type SerenataResult<T> = Result<T, SerenataError>;

#[derive(thiserror::Error, Debug)]
pub enum SerenataError {
    /// A page or constructor invariant was violated.
    #[error("validation error: {0}")]
    Validation(String),

    /// The host refused a playback request, typically blocked autoplay.
    #[error("playback error: {0}")]
    Playback(String),

    /// A page document failed to parse.
    #[error("page JSON error: {0}")]
    PageJson(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SerenataError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }
}
