use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound accepted for any quantity field, in kilograms.
pub const MAX_QUANTITY_KG: i64 = 999_999;

/// A stock record for one tea lot in one warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    /// Display name, e.g. "Assam second flush".
    pub name: String,
    /// Leaf grade, e.g. "FTGFOP1", "BOP", "Dust".
    pub grade: String,
    pub quantity_kg: i64,
    /// Unit price per kilogram.
    pub unit_price: f64,
    pub warehouse: String,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `PUT /api/manager/inventory/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub name: String,
    pub grade: String,
    pub quantity_kg: i64,
    pub unit_price: f64,
    pub warehouse: String,
}

impl InventoryUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.quantity_kg <= 0 {
            return Err("Quantity must be a positive number".into());
        }
        if self.quantity_kg > MAX_QUANTITY_KG {
            return Err(format!("Quantity cannot exceed {}", MAX_QUANTITY_KG));
        }
        if self.unit_price <= 0.0 {
            return Err("Unit price must be greater than zero".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_update() -> InventoryUpdate {
        InventoryUpdate {
            name: "Darjeeling first flush".into(),
            grade: "FTGFOP1".into(),
            quantity_kg: 500,
            unit_price: 18.50,
            warehouse: "Kolkata A".into(),
        }
    }

    #[test]
    fn accepts_in_range_quantity() {
        assert!(valid_update().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let mut u = valid_update();
        u.quantity_kg = 0;
        assert_eq!(
            u.validate().unwrap_err(),
            "Quantity must be a positive number"
        );
    }

    #[test]
    fn rejects_quantity_above_cap() {
        let mut u = valid_update();
        u.quantity_kg = 1_000_000;
        assert_eq!(u.validate().unwrap_err(), "Quantity cannot exceed 999999");
    }
}
