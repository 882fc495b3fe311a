use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once, in order. The first failing
    /// stage ends the run and its error is returned.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting product aggregation...");

        let products = self.pipeline.extract().await?;
        tracing::info!("Fetched {} products", products.len());

        let catalog = self.pipeline.transform(products).await?;
        tracing::info!(
            "Grouped {} products into {} categories",
            catalog.product_count(),
            catalog.category_count()
        );

        let output_path = self.pipeline.load(catalog).await?;
        tracing::info!(
            "Product aggregation completed. Output saved to {}",
            output_path
        );

        Ok(output_path)
    }
}
