use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::inventory::MAX_QUANTITY_KG;

/// One recorded production run on a processing line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionBatch {
    pub id: Uuid,
    pub tea_grade: String,
    pub quantity_kg: i64,
    /// Calendar day the batch was produced (YYYY-MM-DD).
    pub produced_on: NaiveDate,
    /// Processing line identifier, e.g. "CTC-2".
    pub line: String,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Payload for `POST /api/manager/production`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProductionBatch {
    pub tea_grade: String,
    pub quantity_kg: i64,
    pub produced_on: String,
    pub line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewProductionBatch {
    pub fn validate(&self) -> Result<(), String> {
        if self.tea_grade.trim().is_empty() {
            return Err("Tea grade is required".into());
        }
        if self.quantity_kg <= 0 {
            return Err("Quantity must be a positive number".into());
        }
        if self.quantity_kg > MAX_QUANTITY_KG {
            return Err(format!("Quantity cannot exceed {}", MAX_QUANTITY_KG));
        }
        if self.produced_on.trim().is_empty() {
            return Err("Production date is required".into());
        }
        if NaiveDate::parse_from_str(self.produced_on.trim(), "%Y-%m-%d").is_err() {
            return Err("Production date must be YYYY-MM-DD".into());
        }
        if self.line.trim().is_empty() {
            return Err("Processing line is required".into());
        }
        Ok(())
    }
}

/// One bar of the dashboard production chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSummaryPoint {
    /// Period label, e.g. "2026-07".
    pub period: String,
    pub quantity_kg: i64,
}

/// Payload of `GET /api/manager/dashboard/production-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub total_quantity_kg: i64,
    pub batch_count: i64,
    pub active_suppliers: i64,
    pub open_orders: i64,
    pub by_period: Vec<ProductionSummaryPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_date() {
        let batch = NewProductionBatch {
            tea_grade: "BOP".into(),
            quantity_kg: 120,
            produced_on: "27.08.2026".into(),
            line: "CTC-1".into(),
            notes: None,
        };
        assert_eq!(
            batch.validate().unwrap_err(),
            "Production date must be YYYY-MM-DD"
        );
    }

    #[test]
    fn accepts_complete_batch() {
        let batch = NewProductionBatch {
            tea_grade: "BOP".into(),
            quantity_kg: 120,
            produced_on: "2026-08-27".into(),
            line: "CTC-1".into(),
            notes: Some("second shift".into()),
        };
        assert!(batch.validate().is_ok());
    }
}
