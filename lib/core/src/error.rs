use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tender not found: {0}")]
    TenderNotFound(String),

    #[error("No vendors available")]
    NoVendors,

    #[error("Scoring failed: {0}")]
    Computation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
