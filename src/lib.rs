pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, DEFAULT_ENDPOINT};

pub use crate::adapters::console::{ArgsForm, ConsoleStatus};
pub use crate::core::submit::SubmitHandler;
pub use crate::domain::model::{FormFields, OrderData, StatusLevel};
pub use crate::utils::error::{Result, SubmitError};
