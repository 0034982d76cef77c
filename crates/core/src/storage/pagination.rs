//! Draining a paged scan into a single collection.

use crate::item::Item;

use super::{ItemRepository, Result};

/// Reads every item by following continuation cursors until the store
/// reports no further page.
///
/// Items keep the store's scan order. The whole table is accumulated in
/// memory.
pub async fn scan_all(repo: &dyn ItemRepository) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    let mut cursor = None;

    loop {
        let page = repo.scan_page(cursor.take()).await?;
        items.extend(page.items);

        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::storage::{RepositoryError, ScanCursor, ScanPage};

    /// Serves fixed pages, cursor = index of the next page.
    struct PagedRepository {
        pages: Vec<Vec<Item>>,
        calls: AtomicUsize,
        fail_on_page: Option<usize>,
    }

    impl PagedRepository {
        fn new(pages: Vec<Vec<Item>>) -> Self {
            Self {
                pages,
                calls: AtomicUsize::new(0),
                fail_on_page: None,
            }
        }
    }

    #[async_trait]
    impl ItemRepository for PagedRepository {
        async fn get_item(&self, _id: &str) -> Result<Option<Item>> {
            Ok(None)
        }

        async fn put_item(&self, _item: &Item) -> Result<()> {
            Ok(())
        }

        async fn delete_item(&self, _id: &str) -> Result<()> {
            Ok(())
        }

        async fn scan_page(&self, cursor: Option<ScanCursor>) -> Result<ScanPage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let index = match cursor {
                Some(c) => c.as_str().parse::<usize>().unwrap(),
                None => 0,
            };
            if self.fail_on_page == Some(index) {
                return Err(RepositoryError::QueryFailed("scan failed".to_string()));
            }
            let next = (index + 1 < self.pages.len()).then(|| ScanCursor::new((index + 1).to_string()));
            Ok(ScanPage {
                items: self.pages.get(index).cloned().unwrap_or_default(),
                next,
            })
        }
    }

    fn item(id: &str) -> Item {
        Item::new(id, json!({ "n": id }))
    }

    #[tokio::test]
    async fn test_scan_all_follows_three_continuations() {
        let repo = PagedRepository::new(vec![
            vec![item("a"), item("b")],
            vec![item("c")],
            vec![item("d"), item("e")],
            vec![item("f")],
        ]);

        let items = scan_all(&repo).await.unwrap();

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e", "f"]);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_scan_all_single_empty_page() {
        let repo = PagedRepository::new(vec![vec![]]);

        let items = scan_all(&repo).await.unwrap();

        assert!(items.is_empty());
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_scan_all_tolerates_empty_intermediate_page() {
        let repo = PagedRepository::new(vec![vec![item("a")], vec![], vec![item("b")]]);

        let items = scan_all(&repo).await.unwrap();

        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_scan_all_stops_on_failure() {
        let mut repo = PagedRepository::new(vec![vec![item("a")], vec![item("b")]]);
        repo.fail_on_page = Some(1);

        let result = scan_all(&repo).await;

        assert!(matches!(result, Err(RepositoryError::QueryFailed(_))));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 2);
    }
}
