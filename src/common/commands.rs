use std::fmt;

use uuid::Uuid;

/// Tag attached to every command and echoed back in its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lệnh UI gửi xuống tầng mạng.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    Login {
        request: RequestId,
        username: String,
        password: String,
    },
    LoadUsers {
        request: RequestId,
    },
    /// Danh sách chat của người dùng hiện tại
    LoadChats {
        request: RequestId,
        user_id: String,
    },
    /// Tin nhắn giữa `user_id` và `contact_id`
    LoadMessages {
        request: RequestId,
        user_id: String,
        contact_id: String,
    },
    SendMessage {
        request: RequestId,
        sender_id: String,
        receiver_id: String,
        text: String,
    },
}

impl ApiCommand {
    pub fn request_id(&self) -> RequestId {
        match self {
            ApiCommand::Login { request, .. }
            | ApiCommand::LoadUsers { request }
            | ApiCommand::LoadChats { request, .. }
            | ApiCommand::LoadMessages { request, .. }
            | ApiCommand::SendMessage { request, .. } => *request,
        }
    }

    /// Short label for logs. Never includes the password.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiCommand::Login { .. } => "login",
            ApiCommand::LoadUsers { .. } => "load_users",
            ApiCommand::LoadChats { .. } => "load_chats",
            ApiCommand::LoadMessages { .. } => "load_messages",
            ApiCommand::SendMessage { .. } => "send_message",
        }
    }
}
