//! DynamoDB repository implementation.
//!
//! Implements [`ItemRepository`] from `picus_core::storage` on a single
//! table whose partition key is the `id` string attribute.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use picus_core::item::Item;
use picus_core::storage::{ItemRepository, Result, ScanCursor, ScanPage};

use super::config::DynamoDbConfig;
use super::conversions::{
    cursor_from_key, item_to_record, key_for, key_from_cursor, record_to_item,
};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error};

/// DynamoDB-based repository implementation.
///
/// Holds one SDK client for the life of the process; the client is cheap
/// to clone and safe to share between requests.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from the given connection settings.
    pub async fn connect(config: &DynamoDbConfig) -> Self {
        let client = config.create_client().await;
        Self::new(client, config.table_name.clone())
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_for(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(record) => Ok(Some(record_to_item(&record)?)),
            None => Ok(None),
        }
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_record(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_for(id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_page(&self, cursor: Option<ScanCursor>) -> Result<ScanPage> {
        let start_key = cursor.as_ref().map(key_from_cursor).transpose()?;

        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_exclusive_start_key(start_key)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(record_to_item)
            .collect::<Result<Vec<_>>>()?;

        let next = result
            .last_evaluated_key
            .as_ref()
            .filter(|key| !key.is_empty())
            .map(cursor_from_key)
            .transpose()?;

        tracing::debug!(
            table = %self.table_name,
            count = items.len(),
            has_more = next.is_some(),
            "Scanned page"
        );

        Ok(ScanPage { items, next })
    }
}
