use num_complex::Complex64;

/// A mapping could not be evaluated at a point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct MapError {
    pub message: String,
}

impl MapError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<String> for MapError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for MapError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The mapping failed on one point of one curve.
    #[error("mapping failed on curve {curve}, point {index} ({point}): {source}")]
    Map {
        curve: usize,
        index: usize,
        point: Complex64,
        #[source]
        source: MapError,
    },
    #[error("drawing backend: {0}")]
    Backend(String),
    #[error("PNG encode: {0}")]
    Encode(#[from] image::ImageError),
    #[error("config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
