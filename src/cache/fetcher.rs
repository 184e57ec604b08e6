use thiserror::Error;

use crate::cache::entry::{Request, StoredResponse};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network unavailable: {0}")]
    Unavailable(String),
}

/// The injected network boundary.
///
/// The serving path registers its fallback before issuing the fetch: any
/// `Err` resolves to the offline path, however long the fetch took to fail.
pub trait ResourceFetcher: Send + Sync {
    fn fetch(&self, request: &Request) -> Result<StoredResponse, FetchError>;
}
