use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};

use super::client::ApiClient;

/// Background side of the app: turns UI commands into HTTP calls and
/// reports each outcome back as an event.
pub struct ApiWorker {
    client: ApiClient,
    event_sender: mpsc::Sender<ApiEvent>,
    command_receiver: mpsc::Receiver<ApiCommand>,
}

impl ApiWorker {
    pub fn new(
        client: ApiClient,
        event_sender: mpsc::Sender<ApiEvent>,
        command_receiver: mpsc::Receiver<ApiCommand>,
    ) -> Self {
        Self {
            client,
            event_sender,
            command_receiver,
        }
    }

    /// Runs until the UI drops its command sender. Each command gets its own
    /// task, so responses can arrive in any order.
    pub async fn run(mut self) {
        log::info!("API worker started");

        while let Some(command) = self.command_receiver.recv().await {
            log::debug!("Dispatching {} ({})", command.kind(), command.request_id());

            let client = self.client.clone();
            let event_sender = self.event_sender.clone();
            tokio::spawn(async move {
                let event = execute(&client, command).await;
                if let Err(err) = event_sender.send(event).await {
                    log::warn!("Failed to deliver API event to UI: {err}");
                }
            });
        }

        log::info!("Command channel closed; API worker stopping");
    }
}

/// Perform one command against the API.
pub async fn execute(client: &ApiClient, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::Login {
            request,
            username,
            password,
        } => ApiEvent::LoggedIn {
            request,
            result: client.login(&username, &password).await,
        },
        ApiCommand::LoadUsers { request } => ApiEvent::UsersLoaded {
            request,
            result: client.get_users().await,
        },
        ApiCommand::LoadChats { request, user_id } => ApiEvent::ChatsLoaded {
            request,
            result: client.get_chats(&user_id).await,
        },
        ApiCommand::LoadMessages {
            request,
            user_id,
            contact_id,
        } => {
            let result = client.get_messages(&user_id, &contact_id).await;
            ApiEvent::MessagesLoaded {
                request,
                contact_id,
                result,
            }
        }
        ApiCommand::SendMessage {
            request,
            sender_id,
            receiver_id,
            text,
        } => ApiEvent::MessageSent {
            request,
            result: client.send_message(&sender_id, &receiver_id, &text).await,
        },
    }
}
