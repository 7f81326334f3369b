pub mod commands;
pub mod error;
pub mod events;
pub mod time;
pub mod types;

pub use commands::{ApiCommand, RequestId};
pub use error::{ApiError, Endpoint};
pub use events::ApiEvent;
pub use types::{Badge, Chat, Message, User};
