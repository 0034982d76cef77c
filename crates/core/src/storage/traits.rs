use async_trait::async_trait;

use crate::item::Item;

use super::{Result, ScanCursor, ScanPage};

/// Repository over the item table.
///
/// Implementations are thin adapters: one call here is one call to the
/// backing store, with no retries.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its exact key.
    async fn get_item(&self, id: &str) -> Result<Option<Item>>;

    /// Stores an item, keyed by its `id`.
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Deletes an item by its key. Deleting a missing key is not an error.
    async fn delete_item(&self, id: &str) -> Result<()>;

    /// Reads one page of the table in the store's native scan order.
    ///
    /// Pass the `next` cursor of the previous page to continue; `None`
    /// starts from the beginning.
    async fn scan_page(&self, cursor: Option<ScanCursor>) -> Result<ScanPage>;
}
