use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagpieError {
    #[error("Invalid file name: {0:?} (use letters, digits, spaces, '-' or '_')")]
    InvalidFileName(String),

    #[error("Quote text cannot be empty")]
    InvalidQuoteText,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MagpieError>;
