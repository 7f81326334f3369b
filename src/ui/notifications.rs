use chrono::{DateTime, Duration, Utc};

const MAX_VISIBLE: usize = 5;
const LIFETIME_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Transient toast shown in the corner of the window.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub raised_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn info(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push(NotificationKind::Info, title.into(), body.into());
    }

    pub fn error(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push(NotificationKind::Error, title.into(), body.into());
    }

    fn push(&mut self, kind: NotificationKind, title: String, body: String) {
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            kind,
            title,
            body,
            raised_at: Utc::now(),
        });

        if self.items.len() > MAX_VISIBLE {
            self.items.remove(0);
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// Drop toasts older than their lifetime.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let lifetime = Duration::seconds(LIFETIME_SECS);
        self.items
            .retain(|item| now.signed_duration_since(item.raised_at) < lifetime);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
