use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::common::constants::{
    DEFAULT_MODULE, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT, ICMP_PARAMETERS_URL,
    PROTOCOL_NUMBERS_URL,
};
use crate::common::error::{CodegenError, Result};

/// Which registry schema a source document follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Icmpv4Type,
    ProtocolNumber,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Icmpv4Type => f.write_str("icmpv4_type"),
            RecordKind::ProtocolNumber => f.write_str("protocol_number"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrySource {
    pub url: String,
    pub kind: RecordKind,
}

impl RegistrySource {
    pub fn new(url: impl Into<String>, kind: RecordKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the module that wraps every generated declaration
    pub module: String,
    pub http: HttpConfig,
    /// Registries in output order
    pub registries: Vec<RegistrySource>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE.to_string(),
            http: HttpConfig::default(),
            registries: vec![
                RegistrySource::new(ICMP_PARAMETERS_URL, RecordKind::Icmpv4Type),
                RegistrySource::new(PROTOCOL_NUMBERS_URL, RecordKind::ProtocolNumber),
            ],
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            CodegenError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if syn::parse_str::<syn::Ident>(&self.module).is_err() {
            return Err(CodegenError::Config(format!(
                "module name '{}' is not a valid Rust identifier",
                self.module
            )));
        }
        if self.registries.is_empty() {
            return Err(CodegenError::Config("no registries configured".into()));
        }
        Ok(())
    }
}
