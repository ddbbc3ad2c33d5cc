use async_trait::async_trait;
use iana_codegen::app::RegistryFetcher;
use iana_codegen::common::{CodegenError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Path of a fixture in the `tests/data/` directory.
pub fn data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

pub fn load_test_file(name: &str) -> Vec<u8> {
    let path = data_dir().join(name);
    fs::read(&path).unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

/// Serves canned bodies by URL; unknown URLs answer 404.
pub struct StaticFetcher {
    bodies: HashMap<String, Vec<u8>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self {
            bodies: HashMap::new(),
        }
    }

    pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.to_string(), body.into());
        self
    }
}

#[async_trait]
impl RegistryFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| CodegenError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}
