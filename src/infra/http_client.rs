use crate::app::ports::RegistryFetcher;
use crate::common::error::{CodegenError, Result};
use crate::config::HttpConfig;
use async_trait::async_trait;
use tracing::{debug, info};

pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let client = client_builder(http).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn client_builder(http: &HttpConfig) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .timeout(http.timeout())
        .user_agent(http.user_agent.as_str())
}

#[async_trait]
impl RegistryFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("Fetching {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CodegenError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        // Reading the body consumes the response and releases the connection.
        let bytes = resp.bytes().await?.to_vec();
        debug!("Received {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }
}
