use async_trait::async_trait;

use crate::common::error::Result;

/// Source of raw registry documents.
///
/// Implementations return the complete body or fail; a partial body is
/// never handed to the decoder.
#[async_trait]
pub trait RegistryFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
