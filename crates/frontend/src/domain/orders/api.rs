use contracts::domain::order::{
    Order, OrderStatus, OrderStatusUpdate, PaymentStatus, PaymentStatusUpdate,
};
use contracts::system::auth::PaymentSessionStatus;
use uuid::Uuid;

use crate::shared::api_utils::{ApiClient, ApiError};

pub async fn list() -> Result<Vec<Order>, ApiError> {
    ApiClient::from_session().get("/api/staff/orders").await
}

pub async fn update_status(id: Uuid, status: OrderStatus) -> Result<Order, ApiError> {
    ApiClient::from_session()
        .put(
            &format!("/api/staff/orders/{}/status", id),
            &OrderStatusUpdate { status },
        )
        .await
}

pub async fn update_payment(id: Uuid, payment_status: PaymentStatus) -> Result<Order, ApiError> {
    ApiClient::from_session()
        .put(
            &format!("/api/staff/orders/{}/payment", id),
            &PaymentStatusUpdate { payment_status },
        )
        .await
}

/// Outcome of a checkout session after a payment-provider redirect.
pub async fn payment_status(session_id: &str) -> Result<PaymentSessionStatus, ApiError> {
    ApiClient::from_session()
        .get(&format!("/api/payment/status/{}", session_id))
        .await
}
