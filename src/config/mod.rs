#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, DEFAULT_ENDPOINT};
pub use toml_config::EndpointProfile;
