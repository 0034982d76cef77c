//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use picus_core::item::Item;
use picus_core::storage::{ItemRepository, RepositoryError, Result, ScanCursor, ScanPage};

/// Default number of items returned by one scan page.
const DEFAULT_PAGE_SIZE: usize = 100;

/// In-memory storage backend.
///
/// Items are kept in insertion order, which is also the scan order.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    items: Arc<RwLock<Vec<Item>>>,
    page_size: usize,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Limits how many items one scan page returns (minimum 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => items.push(item.clone()),
        }
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        let mut items = self.items.write().await;
        items.retain(|item| item.id != id);
        Ok(())
    }

    async fn scan_page(&self, cursor: Option<ScanCursor>) -> Result<ScanPage> {
        let start = match cursor {
            Some(cursor) => cursor.as_str().parse::<usize>().map_err(|e| {
                RepositoryError::Serialization(format!("Invalid scan cursor: {e}"))
            })?,
            None => 0,
        };

        let items = self.items.read().await;
        let end = (start + self.page_size).min(items.len());
        let page = items.get(start..end).unwrap_or_default().to_vec();
        let next = (end < items.len()).then(|| ScanCursor::new(end.to_string()));

        Ok(ScanPage { items: page, next })
    }
}
