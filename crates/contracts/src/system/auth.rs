use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// "admin", "manager" or "staff".
    pub role: String,
}

/// Payload for `POST /api/users/send-otp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

/// Payload for `POST /api/users/reset-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

/// Payload for `PUT /api/auth/profile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
}

/// Payload of `GET /api/payment/status/{session_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSessionStatus {
    pub session_id: String,
    pub order_id: Uuid,
    /// "processing", "paid" or "failed".
    pub state: String,
}
