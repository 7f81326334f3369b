use std::collections::HashMap;

use crate::common::{Chat, User};

/// Normalized entities fetched from the API: users by id and chats by
/// contact id, each with the order the server returned them in.
#[derive(Debug, Default)]
pub struct EntityStore {
    users: HashMap<String, User>,
    user_order: Vec<String>,
    chats: HashMap<String, Chat>,
    chat_order: Vec<String>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the user set. A repeated id keeps its first position and the
    /// last record.
    pub fn replace_users(&mut self, users: Vec<User>) {
        self.users.clear();
        self.user_order.clear();
        for user in users {
            if !self.users.contains_key(&user.id) {
                self.user_order.push(user.id.clone());
            }
            self.users.insert(user.id.clone(), user);
        }
    }

    pub fn replace_chats(&mut self, chats: Vec<Chat>) {
        self.chats.clear();
        self.chat_order.clear();
        for chat in chats {
            if !self.chats.contains_key(&chat.user_id) {
                self.chat_order.push(chat.user_id.clone());
            }
            self.chats.insert(chat.user_id.clone(), chat);
        }
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn chat(&self, contact_id: &str) -> Option<&Chat> {
        self.chats.get(contact_id)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.user_order.iter().filter_map(|id| self.users.get(id))
    }

    pub fn user_count(&self) -> usize {
        self.user_order.len()
    }

    /// Chats paired with their contact. Chats whose contact is not in the
    /// user set are skipped.
    pub fn visible_chats(&self) -> Vec<(&Chat, &User)> {
        self.chat_order
            .iter()
            .filter_map(|id| {
                let chat = self.chats.get(id)?;
                let user = self.users.get(&chat.user_id)?;
                Some((chat, user))
            })
            .collect()
    }

    /// Users whose handle contains `query` (case-insensitive), without the
    /// session user. An empty query matches everybody.
    pub fn search_contacts(&self, query: &str, session_user_id: &str) -> Vec<&User> {
        let needle = query.trim().to_lowercase();
        self.users()
            .filter(|user| user.id != session_user_id)
            .filter(|user| needle.is_empty() || user.username.to_lowercase().contains(&needle))
            .collect()
    }
}
