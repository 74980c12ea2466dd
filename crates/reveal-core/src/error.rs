use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Breakpoints, styles, or carousel settings that can never animate
    /// correctly. Reported when the object is built, never mid-animation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("index {index} out of bounds for {len} items")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}
