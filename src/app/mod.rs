pub mod generate_use_case;
pub mod ports;

pub use generate_use_case::GenerateUseCase;
pub use ports::RegistryFetcher;
