use contracts::domain::inventory::{InventoryItem, InventoryUpdate};
use uuid::Uuid;

use crate::shared::api_utils::{ApiClient, ApiError};

pub async fn list() -> Result<Vec<InventoryItem>, ApiError> {
    ApiClient::from_session().get("/api/manager/inventory").await
}

pub async fn get(id: Uuid) -> Result<InventoryItem, ApiError> {
    ApiClient::from_session()
        .get(&format!("/api/manager/inventory/{}", id))
        .await
}

pub async fn update(id: Uuid, update: &InventoryUpdate) -> Result<InventoryItem, ApiError> {
    ApiClient::from_session()
        .put(&format!("/api/manager/inventory/{}", id), update)
        .await
}
