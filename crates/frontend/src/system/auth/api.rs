use contracts::system::auth::{
    LoginRequest, LoginResponse, ProfileUpdate, ResetPasswordRequest, SendOtpRequest, UserInfo,
};

use crate::shared::api_utils::{ApiClient, ApiError};

/// Login with username and password. Unauthenticated.
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    ApiClient::default()
        .post("/api/users/login", &request)
        .await
}

/// Request a password-reset OTP for the given email. Unauthenticated.
pub async fn send_otp(email: String) -> Result<Option<String>, ApiError> {
    let request = SendOtpRequest { email };
    ApiClient::default()
        .post_ack("/api/users/send-otp", &request)
        .await
}

/// Redeem an OTP for a new password. Unauthenticated.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<Option<String>, ApiError> {
    ApiClient::default()
        .post_ack("/api/users/reset-password", request)
        .await
}

/// Current user's profile.
pub async fn get_profile() -> Result<UserInfo, ApiError> {
    ApiClient::from_session().get("/api/auth/profile").await
}

pub async fn update_profile(update: &ProfileUpdate) -> Result<UserInfo, ApiError> {
    ApiClient::from_session()
        .put("/api/auth/profile", update)
        .await
}
