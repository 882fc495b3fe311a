use crate::core::fetcher::ProductFetcher;
use crate::core::grouper::group_by_category;
use crate::core::writer::write_catalog;
use crate::core::{ConfigProvider, GroupedCatalog, Pipeline, RawProduct, Storage};
use crate::utils::error::Result;

/// Fetch, group and persist the catalog through the given storage and config.
pub struct AggregationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: ProductFetcher,
}

impl<S: Storage, C: ConfigProvider> AggregationPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let fetcher = ProductFetcher::new(
            config.api_endpoint(),
            config.request_timeout(),
            config.retry_policy(),
        )?;

        Ok(Self {
            storage,
            config,
            fetcher,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AggregationPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawProduct>> {
        self.fetcher.fetch().await
    }

    async fn transform(&self, products: Vec<RawProduct>) -> Result<GroupedCatalog> {
        Ok(group_by_category(products))
    }

    async fn load(&self, catalog: GroupedCatalog) -> Result<String> {
        let output_path = self.config.output_path();
        write_catalog(&self.storage, &catalog, output_path).await?;
        Ok(output_path.to_string())
    }
}
