//! Application Layer

pub mod config;
pub mod forward;

pub use config::RegistryConfig;
pub use forward::{ForwardInput, ForwardUseCase};
