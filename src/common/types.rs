use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::time;

/// Vai trò của người dùng.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    #[default]
    User,
}

/// Badge shown next to a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Developer,
    Friend,
}

impl Badge {
    /// A developer always gets the developer badge; friendship only matters
    /// for everybody else.
    pub fn resolve(role: Role, is_friend: Option<bool>) -> Option<Self> {
        match (role, is_friend) {
            (Role::Developer, _) => Some(Badge::Developer),
            (Role::User, Some(true)) => Some(Badge::Friend),
            (Role::User, _) => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Badge::Developer => "Developer",
            Badge::Friend => "Friend of the developer. Verified user",
        }
    }
}

/// Domain model của một người dùng.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default)]
    pub is_friend: Option<bool>,
    #[serde(default, with = "time::optional")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_online: Option<bool>,
}

impl User {
    pub fn badge(&self) -> Option<Badge> {
        Badge::resolve(self.role, self.is_friend)
    }

    pub fn display_name(&self) -> String {
        display_name(&self.first_name, &self.last_name, &self.username)
    }

    pub fn initials(&self) -> String {
        initials(&self.first_name, &self.last_name, &self.username)
    }

    pub fn is_online(&self) -> bool {
        self.is_online == Some(true)
    }
}

/// Conversation summary with one contact. The contact's profile is copied
/// onto the record by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub user_id: String,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default)]
    pub is_friend: Option<bool>,
    #[serde(default)]
    pub is_online: Option<bool>,
    #[serde(default, with = "time::optional")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default, with = "time::optional")]
    pub last_message_time: Option<DateTime<Utc>>,
}

impl Chat {
    pub fn badge(&self) -> Option<Badge> {
        Badge::resolve(self.role, self.is_friend)
    }

    pub fn display_name(&self) -> String {
        display_name(&self.first_name, &self.last_name, &self.username)
    }
}

/// Domain model đại diện một tin nhắn chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub text: String,
    #[serde(default, with = "time::optional")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_read: Option<bool>,
}

impl Message {
    /// Whether the message belongs to the conversation between `a` and `b`,
    /// in either direction.
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}

fn display_name(first_name: &str, last_name: &str, username: &str) -> String {
    let full = format!("{first_name} {last_name}");
    let full = full.trim();
    if full.is_empty() {
        username.to_string()
    } else {
        full.to_string()
    }
}

fn initials(first_name: &str, last_name: &str, username: &str) -> String {
    let letters: String = [first_name, last_name]
        .iter()
        .filter_map(|part| part.chars().next())
        .collect();
    if letters.is_empty() {
        username.chars().take(1).collect::<String>().to_uppercase()
    } else {
        letters.to_uppercase()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
