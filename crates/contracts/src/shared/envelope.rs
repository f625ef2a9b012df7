use serde::{Deserialize, Serialize};

/// Standard response envelope used by every backend endpoint.
///
/// A 2xx status alone is not enough to declare success: the body carries
/// `success` plus an optional human-readable `message` (error text on
/// failure, confirmation text on success).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into its payload, or the server-provided message.
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "Server reported success without data".to_string())
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "Request failed".to_string()))
        }
    }

    /// Unwrap an acknowledgement-only envelope, where the interesting part
    /// is the confirmation `message` rather than a payload (e.g. "OTP
    /// sent"). Failures surface the server message like
    /// [`into_result`](Self::into_result).
    pub fn into_ack(self) -> Result<Option<String>, String> {
        if self.success {
            Ok(self.message)
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "Request failed".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_data_unwraps() {
        let env = ApiEnvelope {
            success: true,
            data: Some(42),
            message: None,
        };
        assert_eq!(env.into_result(), Ok(42));
    }

    #[test]
    fn failure_carries_server_message() {
        let env: ApiEnvelope<i32> = ApiEnvelope {
            success: false,
            data: None,
            message: Some("Quantity out of range".to_string()),
        };
        assert_eq!(env.into_result(), Err("Quantity out of range".to_string()));
    }

    #[test]
    fn ack_returns_confirmation_message() {
        let env: ApiEnvelope<()> = ApiEnvelope {
            success: true,
            data: None,
            message: Some("OTP sent".to_string()),
        };
        assert_eq!(env.into_ack(), Ok(Some("OTP sent".to_string())));
    }

    #[test]
    fn ack_failure_carries_server_message() {
        let env: ApiEnvelope<()> = ApiEnvelope {
            success: false,
            data: None,
            message: Some("Unknown email".to_string()),
        };
        assert_eq!(env.into_ack(), Err("Unknown email".to_string()));
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let env: ApiEnvelope<i32> = ApiEnvelope {
            success: false,
            data: None,
            message: None,
        };
        assert_eq!(env.into_result(), Err("Request failed".to_string()));
    }
}
