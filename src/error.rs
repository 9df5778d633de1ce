use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Record container is missing a required node. Selector: {selector}")]
    MissingNode { selector: String },
    #[error("Couldn't parse selector: {0}")]
    InvalidSelector(String),

    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: StatusCode },
    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Pagination didn't end within {0} pages, giving up.")]
    PageLimitExceeded(usize),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),
}
