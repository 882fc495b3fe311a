pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use crate::core::{
    etl::EtlEngine, fetcher::ProductFetcher, grouper::group_by_category,
    pipeline::AggregationPipeline, retry::RetryPolicy,
};
pub use domain::model::{GroupedCatalog, GroupedProduct, Price, RawProduct};
pub use utils::error::{EtlError, Result};
