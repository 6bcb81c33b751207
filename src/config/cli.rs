use crate::config::toml_config::EndpointProfile;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Production intake endpoint used when no override is given.
pub const DEFAULT_ENDPOINT: &str =
    "https://h4dvf83sph.execute-api.ap-south-1.amazonaws.com/prod/submit-order";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "order-submit")]
#[command(about = "Submit an order to the order intake API")]
pub struct CliConfig {
    /// Order identifier, sent verbatim
    #[arg(long)]
    pub order_id: String,

    /// Store identifier, sent verbatim
    #[arg(long)]
    pub store_id: String,

    /// Order date; normalized to YYYY-MM-DD before sending
    #[arg(long)]
    pub date: String,

    /// Order amount, sent verbatim as a string
    #[arg(long)]
    pub amount: String,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to a TOML endpoint profile
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Fill endpoint settings from a TOML profile. Explicit CLI flags win;
    /// the profile only replaces values still at their defaults.
    pub fn apply_profile(&mut self, profile: &EndpointProfile) {
        if self.api_endpoint == DEFAULT_ENDPOINT {
            self.api_endpoint = profile.endpoint.url.clone();
        }
        if self.timeout_seconds.is_none() {
            self.timeout_seconds = profile.endpoint.timeout_seconds;
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("order_id", &self.order_id)?;
        validate_non_empty_string("store_id", &self.store_id)?;
        validate_non_empty_string("date", &self.date)?;
        validate_non_empty_string("amount", &self.amount)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 300)?;
        }

        Ok(())
    }
}
