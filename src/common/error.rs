use quick_xml::errors::serialize::DeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("got HTTP status code {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("XML decoding failed: {0}")]
    Xml(#[from] DeError),

    #[error("generated source does not parse: {0}")]
    Format(#[from] syn::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("writing to the output buffer failed")]
    Buffer(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
