use contracts::domain::supplier::{Supplier, SupplierInput};
use uuid::Uuid;

use crate::shared::api_utils::{ApiClient, ApiError};

/// Server-side search: the backend filters by name/region when `q` is
/// non-empty.
pub async fn list(q: &str) -> Result<Vec<Supplier>, ApiError> {
    let path = if q.trim().is_empty() {
        "/api/staff/suppliers".to_string()
    } else {
        format!("/api/staff/suppliers?q={}", urlencoding::encode(q.trim()))
    };
    ApiClient::from_session().get(&path).await
}

pub async fn get(id: Uuid) -> Result<Supplier, ApiError> {
    ApiClient::from_session()
        .get(&format!("/api/staff/suppliers/{}", id))
        .await
}

pub async fn create(input: &SupplierInput) -> Result<Supplier, ApiError> {
    ApiClient::from_session()
        .post("/api/staff/suppliers", input)
        .await
}

pub async fn update(id: Uuid, input: &SupplierInput) -> Result<Supplier, ApiError> {
    ApiClient::from_session()
        .put(&format!("/api/staff/suppliers/{}", id), input)
        .await
}
