use contracts::domain::production::{NewProductionBatch, ProductionBatch, ProductionSummary};

use crate::shared::api_utils::{ApiClient, ApiError};

pub async fn list() -> Result<Vec<ProductionBatch>, ApiError> {
    ApiClient::from_session().get("/api/manager/production").await
}

pub async fn create(batch: &NewProductionBatch) -> Result<ProductionBatch, ApiError> {
    ApiClient::from_session()
        .post("/api/manager/production", batch)
        .await
}

/// Aggregates for the supply-overview dashboard.
pub async fn summary() -> Result<ProductionSummary, ApiError> {
    ApiClient::from_session()
        .get("/api/manager/dashboard/production-summary")
        .await
}
