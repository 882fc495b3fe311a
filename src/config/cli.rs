use super::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, OUTPUT_FILE_NAME, PRODUCTS_ENDPOINT};
use crate::core::retry::RetryPolicy;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "product-aggregator")]
#[command(about = "Fetch the product catalog, group it by category and save it as JSON")]
pub struct CliConfig {
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, help = "HTTP request timeout in seconds")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        PRODUCTS_ENDPOINT
    }

    fn output_path(&self) -> &str {
        OUTPUT_FILE_NAME
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("timeout_secs", self.timeout_secs, 1, MAX_TIMEOUT_SECS)?;
        Ok(())
    }
}
