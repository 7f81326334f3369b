use std::collections::HashMap;

use crate::common::{ApiCommand, ApiEvent, Message, RequestId, User};

use super::notifications::Notifications;
use super::store::EntityStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Registration,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarTab {
    #[default]
    Chats,
    Contacts,
}

#[derive(Debug, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Tin nhắn của cuộc trò chuyện đang mở.
#[derive(Debug)]
pub struct Thread {
    pub contact_id: String,
    pub messages: Vec<Message>,
    pub loading: bool,
}

impl Thread {
    fn open(contact_id: String) -> Self {
        Self {
            contact_id,
            messages: Vec::new(),
            loading: true,
        }
    }

    fn push(&mut self, message: Message) {
        if !self.messages.iter().any(|known| known.id == message.id) {
            self.messages.push(message);
        }
    }

    /// Take the fetched history, keeping messages appended locally while the
    /// fetch was in flight.
    fn merge_loaded(&mut self, loaded: Vec<Message>) {
        let local: Vec<Message> = self
            .messages
            .drain(..)
            .filter(|message| !loaded.iter().any(|known| known.id == message.id))
            .collect();
        self.messages = loaded;
        self.messages.extend(local);
        self.loading = false;
    }
}

/// Latest request id per slot. A response with any other id is stale.
#[derive(Debug, Default)]
struct InFlight {
    login: Option<RequestId>,
    users: Option<RequestId>,
    chats: Option<RequestId>,
    messages: Option<RequestId>,
    /// Send request -> draft text, restored if the send fails.
    sends: HashMap<RequestId, String>,
}

fn settle(slot: &mut Option<RequestId>, request: RequestId) -> bool {
    if *slot == Some(request) {
        *slot = None;
        true
    } else {
        false
    }
}

/// User intents coming from the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SubmitLogin,
    OpenRegistration,
    SubmitRegistration,
    BackToLogin,
    Logout,
    SelectTab(SidebarTab),
    SelectContact(String),
    SendMessage,
    DismissNotification(u64),
}

/// Trạng thái cục bộ của UI.
///
/// Only [`AppState::update`] and [`AppState::apply`] change the session,
/// the store and the open thread; both return the API commands to issue.
/// Text fields are bound directly to widgets.
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub credentials: Credentials,
    pub tab: SidebarTab,
    pub search_query: String,
    pub input_text: String,
    pub notifications: Notifications,
    session: Option<User>,
    store: EntityStore,
    thread: Option<Thread>,
    in_flight: InFlight,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
            credentials: Credentials::default(),
            tab: SidebarTab::default(),
            search_query: String::new(),
            input_text: String::new(),
            notifications: Notifications::default(),
            session: None,
            store: EntityStore::new(),
            thread: None,
            in_flight: InFlight::default(),
        }
    }

    pub fn session(&self) -> Option<&User> {
        self.session.as_ref()
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn thread(&self) -> Option<&Thread> {
        self.thread.as_ref()
    }

    pub fn is_logging_in(&self) -> bool {
        self.in_flight.login.is_some()
    }

    pub fn is_own(&self, message: &Message) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.id == message.sender_id)
    }

    /// Contacts matching the search box.
    pub fn contacts(&self) -> Vec<&User> {
        let session_id = self.session.as_ref().map(|user| user.id.as_str()).unwrap_or_default();
        self.store.search_contacts(&self.search_query, session_id)
    }

    pub fn can_send(&self) -> bool {
        self.session.is_some() && self.thread.is_some() && !self.input_text.trim().is_empty()
    }

    pub fn update(&mut self, action: Action) -> Vec<ApiCommand> {
        match action {
            Action::SubmitLogin => self.submit_login().into_iter().collect(),
            Action::OpenRegistration => {
                self.screen = Screen::Registration;
                Vec::new()
            }
            Action::SubmitRegistration => {
                self.submit_registration();
                Vec::new()
            }
            Action::BackToLogin => {
                self.screen = Screen::Login;
                Vec::new()
            }
            Action::Logout => {
                if let Some(user) = &self.session {
                    log::info!("Logging out {}", user.username);
                }
                *self = Self::new();
                Vec::new()
            }
            Action::SelectTab(tab) => {
                self.tab = tab;
                Vec::new()
            }
            Action::SelectContact(contact_id) => {
                self.select_contact(contact_id).into_iter().collect()
            }
            Action::SendMessage => self.send_message().into_iter().collect(),
            Action::DismissNotification(id) => {
                self.notifications.dismiss(id);
                Vec::new()
            }
        }
    }

    pub fn apply(&mut self, event: ApiEvent) -> Vec<ApiCommand> {
        let request = event.request_id();
        match event {
            ApiEvent::LoggedIn { result, .. } => {
                if !settle(&mut self.in_flight.login, request) {
                    return discard("login", request);
                }
                match result {
                    Ok(user) => {
                        log::info!("Logged in as {} ({})", user.username, user.id);
                        self.session = Some(user);
                        self.screen = Screen::Main;
                        self.credentials.password.clear();
                        [self.load_users(), self.load_chats()].into_iter().flatten().collect()
                    }
                    Err(err) => {
                        log::warn!("Login failed: {err}");
                        self.notifications.error("Login failed", err.user_message());
                        Vec::new()
                    }
                }
            }
            ApiEvent::UsersLoaded { result, .. } => {
                if !settle(&mut self.in_flight.users, request) {
                    return discard("users", request);
                }
                match result {
                    Ok(users) => self.store.replace_users(users),
                    Err(err) => {
                        log::warn!("Loading users failed: {err}");
                        self.notifications.error("Could not load contacts", err.user_message());
                    }
                }
                Vec::new()
            }
            ApiEvent::ChatsLoaded { result, .. } => {
                if !settle(&mut self.in_flight.chats, request) {
                    return discard("chats", request);
                }
                match result {
                    Ok(chats) => self.store.replace_chats(chats),
                    Err(err) => {
                        log::warn!("Loading chats failed: {err}");
                        self.notifications.error("Could not load chats", err.user_message());
                    }
                }
                Vec::new()
            }
            ApiEvent::MessagesLoaded {
                contact_id, result, ..
            } => {
                if !settle(&mut self.in_flight.messages, request) {
                    return discard("messages", request);
                }
                let Some(thread) = self
                    .thread
                    .as_mut()
                    .filter(|thread| thread.contact_id == contact_id)
                else {
                    return discard("messages", request);
                };
                match result {
                    Ok(messages) => thread.merge_loaded(messages),
                    Err(err) => {
                        thread.loading = false;
                        log::warn!("Loading messages with {contact_id} failed: {err}");
                        self.notifications.error("Could not load messages", err.user_message());
                    }
                }
                Vec::new()
            }
            ApiEvent::MessageSent { result, .. } => {
                let Some(draft) = self.in_flight.sends.remove(&request) else {
                    return discard("send", request);
                };
                match result {
                    Ok(message) => {
                        let session = self.session.as_ref();
                        if let (Some(session), Some(thread)) = (session, self.thread.as_mut()) {
                            if message.is_between(&session.id, &thread.contact_id) {
                                thread.push(message);
                            }
                        }
                        self.load_chats().into_iter().collect()
                    }
                    Err(err) => {
                        log::warn!("Sending message failed: {err}");
                        self.notifications.error("Message not sent", err.user_message());
                        if self.input_text.trim().is_empty() {
                            self.input_text = draft;
                        }
                        Vec::new()
                    }
                }
            }
        }
    }

    fn submit_login(&mut self) -> Option<ApiCommand> {
        if self.is_logging_in() {
            return None;
        }

        let username = self.credentials.username.trim();
        if username.is_empty() || self.credentials.password.is_empty() {
            self.notifications
                .error("Login failed", "Enter both login and password.");
            return None;
        }

        let request = RequestId::new();
        self.in_flight.login = Some(request);
        Some(ApiCommand::Login {
            request,
            username: username.to_string(),
            password: self.credentials.password.clone(),
        })
    }

    fn submit_registration(&mut self) {
        if self.credentials.username.trim().is_empty() || self.credentials.password.is_empty() {
            self.notifications
                .error("Request not sent", "Enter both login and password.");
            return;
        }

        self.notifications.info(
            "Request sent",
            "Your account request was sent to the administrator.",
        );
        self.credentials.password.clear();
        self.screen = Screen::Login;
    }

    fn select_contact(&mut self, contact_id: String) -> Option<ApiCommand> {
        let session = self.session.as_ref()?;
        let request = RequestId::new();
        self.in_flight.messages = Some(request);
        // Reloading the open thread keeps its history until the fetch lands.
        let reload = self.thread.as_ref().is_some_and(|thread| thread.contact_id == contact_id);
        if !reload {
            self.thread = Some(Thread::open(contact_id.clone()));
        }
        if let Some(thread) = self.thread.as_mut() {
            thread.loading = true;
        }

        Some(ApiCommand::LoadMessages {
            request,
            user_id: session.id.clone(),
            contact_id,
        })
    }

    fn send_message(&mut self) -> Option<ApiCommand> {
        let text = self.input_text.trim();
        if text.is_empty() {
            return None;
        }
        let session = self.session.as_ref()?;
        let thread = self.thread.as_ref()?;

        let request = RequestId::new();
        let command = ApiCommand::SendMessage {
            request,
            sender_id: session.id.clone(),
            receiver_id: thread.contact_id.clone(),
            text: text.to_string(),
        };
        let draft = std::mem::take(&mut self.input_text);
        self.in_flight.sends.insert(request, draft);
        Some(command)
    }

    fn load_users(&mut self) -> Option<ApiCommand> {
        self.session.as_ref()?;
        let request = RequestId::new();
        self.in_flight.users = Some(request);
        Some(ApiCommand::LoadUsers { request })
    }

    fn load_chats(&mut self) -> Option<ApiCommand> {
        let user_id = self.session.as_ref()?.id.clone();
        let request = RequestId::new();
        self.in_flight.chats = Some(request);
        Some(ApiCommand::LoadChats { request, user_id })
    }
}

fn discard(kind: &str, request: RequestId) -> Vec<ApiCommand> {
    log::debug!("Discarding stale {kind} response {request}");
    Vec::new()
}
