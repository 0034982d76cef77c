mod envelope;
mod handler;

use lambda_runtime::{run, service_fn, Error};
use picus_storage::{DynamoDbConfig, DynamoDbRepository};

use crate::handler::handle;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // JSON logs without timestamps; the log sink stamps each line itself.
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "picus_delete=info,picus_core=info".into()),
        )
        .with_target(false)
        .without_time()
        .init();

    // Built once per cold start and reused by every invocation.
    let config = DynamoDbConfig::from_env();
    let repository = DynamoDbRepository::connect(&config).await;
    tracing::info!(store = %config.target_display(), "DynamoDB client initialized");

    run(service_fn(|event| handle(&repository, event))).await
}
