//! Delete handler: resolve the key from the event, check the item exists,
//! delete it, and answer with an [`Envelope`].

use lambda_runtime::{Error, LambdaEvent};
use picus_core::event::{extract_key, DeleteEvent};
use picus_core::item::{self, PicusError};
use picus_core::storage::ItemRepository;
use serde_json::Value;

use crate::envelope::Envelope;

pub const MISSING_KEY: &str = "Missing item key in path";

/// Runtime entry point. Never fails: every outcome is an envelope.
pub async fn handle(
    repo: &dyn ItemRepository,
    event: LambdaEvent<Value>,
) -> Result<Envelope, Error> {
    Ok(delete_item(repo, event.payload).await)
}

pub async fn delete_item(repo: &dyn ItemRepository, payload: Value) -> Envelope {
    tracing::info!(event = %payload, "Received DELETE request");

    match delete_from_event(repo, payload).await {
        Ok(key) => {
            tracing::info!(item_id = %key, "Successfully deleted item");
            Envelope::success(format!("Item '{key}' deleted successfully"))
        }
        Err(err) => Envelope::from_error(&err),
    }
}

async fn delete_from_event(repo: &dyn ItemRepository, payload: Value) -> Result<String, PicusError> {
    let event = DeleteEvent::from_value(payload)
        .map_err(|e| PicusError::Unexpected(format!("Malformed event: {e}")))?;

    let key = extract_key(&event).ok_or_else(|| PicusError::InvalidInput(MISSING_KEY.to_string()))?;

    tracing::info!(item_id = %key, "Attempting to delete item");
    item::delete_item(repo, &key).await?;

    Ok(key)
}
