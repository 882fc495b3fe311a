use clap::Parser;
use product_aggregator::utils::{logger, validation::Validate};
use product_aggregator::{AggregationPipeline, CliConfig, EtlEngine, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        std::process::exit(2);
    }

    let storage = LocalStorage::new(std::env::current_dir()?);

    let result = match AggregationPipeline::new(storage, config) {
        Ok(pipeline) => EtlEngine::new(pipeline).run().await,
        Err(e) => Err(e),
    };

    // Every stage's failure ends up here as a single line.
    if let Err(e) = result {
        tracing::error!("An error occurred: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
