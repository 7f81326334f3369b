use std::fmt;

use thiserror::Error;

/// Remote endpoint a request was sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Auth,
    Users,
    Chats,
    Messages,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Auth => "auth",
            Endpoint::Users => "users",
            Endpoint::Chats => "chats",
            Endpoint::Messages => "messages",
        };
        f.write_str(name)
    }
}

/// Failure of an API call.
///
/// Cloneable so it can travel inside [`super::ApiEvent`]; transport errors
/// are therefore flattened to their message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{field} {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },
    #[error("authentication rejected (HTTP {status})")]
    Authentication { status: u16 },
    #[error("{endpoint} request failed: {reason}")]
    Network { endpoint: Endpoint, reason: String },
    #[error("{endpoint} responded with HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },
    #[error("{endpoint} returned an unexpected payload: {reason}")]
    Decode { endpoint: Endpoint, reason: String },
}

impl ApiError {
    /// Text shown in the notification raised for this error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation { field, reason } => format!("The {field} {reason}."),
            ApiError::Authentication { .. } => "Invalid login or password.".to_string(),
            ApiError::Network { .. } => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Status { status, .. } if *status >= 500 => {
                "The server ran into a problem. Try again later.".to_string()
            }
            ApiError::Status { status, .. } => {
                format!("The server rejected the request ({status}).")
            }
            ApiError::Decode { .. } => {
                "The server sent a response this client cannot read.".to_string()
            }
        }
    }
}
