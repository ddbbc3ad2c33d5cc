// Adapters implementing the application ports

pub mod http_client;
pub mod local_files;

pub use http_client::ReqwestFetcher;
pub use local_files::LocalFileFetcher;
