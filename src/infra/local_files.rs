use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::app::ports::RegistryFetcher;
use crate::common::error::{CodegenError, Result};

/// Serves registry documents from a directory of previously downloaded
/// files, keyed by the last path segment of each URL.
pub struct LocalFileFetcher {
    dir: PathBuf,
}

impl LocalFileFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, url: &str) -> Result<PathBuf> {
        let file_name = url
            .split(['?', '#'])
            .next()
            .and_then(|u| u.trim_end_matches('/').rsplit('/').next())
            .filter(|name| !name.is_empty() && !name.contains(':'))
            .ok_or_else(|| CodegenError::Fetch {
                url: url.to_string(),
                message: "URL has no file name".to_string(),
            })?;
        Ok(self.dir.join(file_name))
    }
}

#[async_trait]
impl RegistryFetcher for LocalFileFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let path = self.path_for(url)?;
        info!("Reading {} for {}", path.display(), url);
        let bytes = tokio::fs::read(&path).await.map_err(|e| CodegenError::Fetch {
            url: url.to_string(),
            message: format!("{}: {}", path.display(), e),
        })?;
        debug!("Read {} bytes", bytes.len());
        Ok(bytes)
    }
}
