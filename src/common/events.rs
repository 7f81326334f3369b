use super::commands::RequestId;
use super::error::ApiError;
use super::types::{Chat, Message, User};

/// Sự kiện từ tầng mạng gửi lên UI.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    LoggedIn {
        request: RequestId,
        result: Result<User, ApiError>,
    },
    UsersLoaded {
        request: RequestId,
        result: Result<Vec<User>, ApiError>,
    },
    ChatsLoaded {
        request: RequestId,
        result: Result<Vec<Chat>, ApiError>,
    },
    MessagesLoaded {
        request: RequestId,
        contact_id: String,
        result: Result<Vec<Message>, ApiError>,
    },
    MessageSent {
        request: RequestId,
        result: Result<Message, ApiError>,
    },
}

impl ApiEvent {
    pub fn request_id(&self) -> RequestId {
        match self {
            ApiEvent::LoggedIn { request, .. }
            | ApiEvent::UsersLoaded { request, .. }
            | ApiEvent::ChatsLoaded { request, .. }
            | ApiEvent::MessagesLoaded { request, .. }
            | ApiEvent::MessageSent { request, .. } => *request,
        }
    }
}
