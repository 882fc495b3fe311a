use crate::core::retry::RetryPolicy;
use crate::domain::model::{GroupedCatalog, RawProduct};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    /// Replaces `path` with `data`; never appends.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn retry_policy(&self) -> RetryPolicy;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawProduct>>;
    async fn transform(&self, products: Vec<RawProduct>) -> Result<GroupedCatalog>;
    async fn load(&self, catalog: GroupedCatalog) -> Result<String>;
}
