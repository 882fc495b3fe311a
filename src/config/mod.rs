#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use std::time::Duration;

/// The catalog source.
pub const PRODUCTS_ENDPOINT: &str = "https://fakestoreapi.com/products";

/// Written relative to the working directory.
pub const OUTPUT_FILE_NAME: &str = "grouped_products.json";

pub const MAX_FETCH_ATTEMPTS: u32 = 3;
pub const RETRY_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_TIMEOUT_SECS: u64 = 600;
