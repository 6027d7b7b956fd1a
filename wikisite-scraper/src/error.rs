use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid selector: {0}")]
    SelectorError(String),

    #[error("No <{tag}> element with text {text:?}")]
    HeaderNotFound { tag: String, text: String },

    #[error("No <{0}> element follows the header")]
    CellNotFound(String),

    #[error("No <{0}> element inside the value cell")]
    LinkNotFound(String),

    #[error("First link has no {0} attribute")]
    LinkWithoutTarget(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
