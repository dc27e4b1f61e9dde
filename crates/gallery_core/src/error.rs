use thiserror::Error;

pub type Result<T> = std::result::Result<T, GalleryError>;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode {context} response: {source}")]
    Decode {
        context: &'static str,
        source: serde_json::Error,
    },
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("element is missing its `{0}` attribute")]
    MissingAttribute(&'static str),
    #[error("server returned an empty photo list")]
    EmptyGallery,
    #[error("gallery has not been initialized")]
    NotInitialized,
    #[error("failed to render template: {0}")]
    Template(#[from] askama::Error),
    #[error("slide {index} is out of range for {len} slides")]
    SlideOutOfRange { index: usize, len: usize },
}
