//! In-process HTTP stand-in for the remote functions, used by tests.

use serde_json::{Value, json};
use tokio::net::TcpListener;

use super::ApiClient;
use crate::config::{AppConfig, Endpoints};

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn serve(router: axum::Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port nobody listens on.
pub async fn unreachable_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn client_at(base: &str) -> ApiClient {
    let config = AppConfig {
        endpoints: Endpoints {
            auth: format!("{base}/auth"),
            users: format!("{base}/users"),
            chats: format!("{base}/chats"),
            messages: format!("{base}/messages"),
        },
        request_timeout_secs: Some(5),
    };
    ApiClient::new(&config).unwrap()
}

pub async fn client_for(router: axum::Router) -> ApiClient {
    client_at(&serve(router).await)
}

pub fn user_json(id: &str, username: &str, role: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "firstName": username,
        "lastName": "",
        "avatar": null,
        "role": role,
        "isFriend": false,
        "isOnline": true,
        "lastSeen": null
    })
}
