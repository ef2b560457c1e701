// src/error.rs
use std::io;

/// Errors surfaced by the library. A failed page fetch is not one of them
/// at the run level: the crawl driver logs it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid page count {0:?}: expected a whole number >= 1")]
    InvalidPageCount(String),

    #[error("bad selector {query:?}: {reason}")]
    Selector { query: String, reason: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Why a single page could not be fetched.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request for page {page} failed: {source}")]
    Http {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("page {page} answered with HTTP {status}")]
    Status { page: u32, status: u16 },
}

impl FetchError {
    pub fn page(&self) -> u32 {
        match self {
            FetchError::Http { page, .. } | FetchError::Status { page, .. } => *page,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
