//! Shop Errors

use web_kv::StorageError;

pub type ShopResult<T> = Result<T, ShopError>;

/// Frontend-level errors
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
    #[error("stored basket is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("could not serialize basket: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("invalid site config: {0}")]
    Config(#[source] serde_json::Error),
}
