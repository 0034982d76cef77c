//! The item operations shared by the HTTP API and the delete function.
//!
//! Each operation is a single pass through the repository with its
//! failures tagged by [`Operation`] so the error translator can word them.

use crate::storage::{scan_all, ItemRepository};

use super::{parse_payload, Item, Operation, PicusError};

/// Returns every stored item, following the store's continuation tokens.
pub async fn list_items(repo: &dyn ItemRepository) -> Result<Vec<Item>, PicusError> {
    scan_all(repo)
        .await
        .map_err(PicusError::store(Operation::List))
}

/// Validates `body`, stores it under a new id and returns that id.
///
/// Nothing is written when the body is rejected.
pub async fn create_item(repo: &dyn ItemRepository, body: &[u8]) -> Result<String, PicusError> {
    let data = parse_payload(body)?;
    let item = Item::with_generated_id(data);

    repo.put_item(&item)
        .await
        .map_err(PicusError::store(Operation::Create))?;

    Ok(item.id)
}

/// Looks up a single item by exact key.
pub async fn get_item(repo: &dyn ItemRepository, key: &str) -> Result<Item, PicusError> {
    repo.get_item(key)
        .await
        .map_err(PicusError::store(Operation::Read))?
        .ok_or_else(|| PicusError::not_found(key))
}

/// Deletes an item after checking that it exists.
///
/// A missing key is reported as `NotFound`, so deleting twice fails the
/// second time.
pub async fn delete_item(repo: &dyn ItemRepository, key: &str) -> Result<(), PicusError> {
    let existing = repo
        .get_item(key)
        .await
        .map_err(PicusError::store(Operation::Delete))?;

    if existing.is_none() {
        return Err(PicusError::not_found(key));
    }

    repo.delete_item(key)
        .await
        .map_err(PicusError::store(Operation::Delete))
}
