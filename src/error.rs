pub type BrandResult<T> = Result<T, BrandError>;

#[derive(thiserror::Error, Debug)]
pub enum BrandError {
    /// A candidate font could not be read or parsed. Handled inside the
    /// resolver (try the next candidate); never escapes it.
    #[error("font error: {0}")]
    Font(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrandError {
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
