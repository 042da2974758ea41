use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid export: {0}")]
    InvalidExport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
