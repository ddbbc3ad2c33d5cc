pub mod canonical;
pub mod common;
pub mod config;
pub mod emit;
pub mod observability;
pub mod registry;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;
