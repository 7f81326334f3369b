use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::common::{ApiError, Chat, Endpoint, Message, User};
use crate::config::{AppConfig, Endpoints};

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest<'a> {
    sender_id: &'a str,
    receiver_id: &'a str,
    text: &'a str,
}

/// Typed wrapper over the four remote endpoints. Every call issues at most
/// one HTTP request and never touches UI state.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> reqwest::Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("friendsmess/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoints: config.endpoints.clone(),
        })
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        if username.trim().is_empty() {
            return Err(ApiError::Validation {
                field: "login",
                reason: "must not be empty",
            });
        }
        if password.is_empty() {
            return Err(ApiError::Validation {
                field: "password",
                reason: "must not be empty",
            });
        }

        let request = self
            .http
            .post(&self.endpoints.auth)
            .json(&LoginRequest { username, password });

        match self.execute(Endpoint::Auth, request).await {
            Err(ApiError::Status { status, .. }) if (400..500).contains(&status) => {
                Err(ApiError::Authentication { status })
            }
            other => other,
        }
    }

    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        let request = self.http.get(&self.endpoints.users);
        self.execute(Endpoint::Users, request).await
    }

    pub async fn get_chats(&self, user_id: &str) -> Result<Vec<Chat>, ApiError> {
        let request = self
            .http
            .get(&self.endpoints.chats)
            .query(&[("userId", user_id)]);
        self.execute(Endpoint::Chats, request).await
    }

    pub async fn get_messages(
        &self,
        user_id: &str,
        contact_id: &str,
    ) -> Result<Vec<Message>, ApiError> {
        let request = self
            .http
            .get(&self.endpoints.messages)
            .query(&[("userId", user_id), ("contactId", contact_id)]);
        self.execute(Endpoint::Messages, request).await
    }

    pub async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        text: &str,
    ) -> Result<Message, ApiError> {
        if text.trim().is_empty() {
            return Err(ApiError::Validation {
                field: "message",
                reason: "must not be empty",
            });
        }

        let request = self.http.post(&self.endpoints.messages).json(&SendMessageRequest {
            sender_id,
            receiver_id,
            text,
        });
        self.execute(Endpoint::Messages, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|err| ApiError::Network {
            endpoint,
            reason: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{endpoint} endpoint answered {status}");
            return Err(status_error(endpoint, status));
        }

        let body = response.bytes().await.map_err(|err| ApiError::Network {
            endpoint,
            reason: err.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|err| ApiError::Decode {
            endpoint,
            reason: err.to_string(),
        })
    }
}

fn status_error(endpoint: Endpoint, status: StatusCode) -> ApiError {
    ApiError::Status {
        endpoint,
        status: status.as_u16(),
    }
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    use super::*;
    use crate::network::stub::{self, user_json};

    #[tokio::test]
    async fn login_returns_the_session_user() {
        let router = axum::Router::new().route(
            "/auth",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({ "username": "skzry", "password": "22" }));
                Json(user_json("dev1", "skzry", "developer"))
            }),
        );
        let client = stub::client_for(router).await;

        let user = client.login("skzry", "22").await.unwrap();
        assert_eq!(user.id, "dev1");
        assert_eq!(user.role, crate::common::types::Role::Developer);
    }

    #[tokio::test]
    async fn rejected_credentials_are_an_authentication_error() {
        let router = axum::Router::new().route(
            "/auth",
            post(|| async { (StatusCode::UNAUTHORIZED, "nope") }),
        );
        let client = stub::client_for(router).await;

        let err = client.login("skzry", "wrong").await.unwrap_err();
        assert_eq!(err, ApiError::Authentication { status: 401 });
    }

    #[tokio::test]
    async fn auth_server_errors_are_not_reported_as_bad_credentials() {
        let router = axum::Router::new().route(
            "/auth",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = stub::client_for(router).await;

        let err = client.login("skzry", "22").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                endpoint: Endpoint::Auth,
                status: 500
            }
        );
    }

    #[tokio::test]
    async fn empty_credentials_never_reach_the_server() {
        // Không có route nào: nếu request được gửi đi thì sẽ nhận 404.
        let client = stub::client_for(axum::Router::new()).await;

        let err = client.login("   ", "22").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { field: "login", .. }));

        let err = client.login("skzry", "").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { field: "password", .. }));
    }

    #[tokio::test]
    async fn chats_and_messages_pass_query_parameters() {
        let router = axum::Router::new()
            .route(
                "/chats",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    assert_eq!(params.get("userId").map(String::as_str), Some("u1"));
                    Json(json!([{
                        "id": "u2", "userId": "u2", "username": "anna",
                        "firstName": "Anna", "lastName": "Ivanova", "role": "user",
                        "lastMessage": "hi", "lastMessageTime": "2024-05-01T10:00:00"
                    }]))
                }),
            )
            .route(
                "/messages",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    assert_eq!(params.get("userId").map(String::as_str), Some("u1"));
                    assert_eq!(params.get("contactId").map(String::as_str), Some("u2"));
                    Json(json!([
                        {
                            "id": "1", "senderId": "u2", "receiverId": "u1", "text": "hello",
                            "timestamp": "2024-05-01T09:59:00", "isRead": true
                        },
                        {
                            "id": "2", "senderId": "u1", "receiverId": "u2", "text": "hi",
                            "timestamp": null, "isRead": false
                        }
                    ]))
                }),
            );
        let client = stub::client_for(router).await;

        let chats = client.get_chats("u1").await.unwrap();
        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].user_id, "u2");

        let messages = client.get_messages("u1", "u2").await.unwrap();
        let texts: Vec<_> = messages.iter().map(|message| message.text.as_str()).collect();
        assert_eq!(texts, ["hello", "hi"]);
        assert!(messages[0].timestamp.is_some());
        assert_eq!(messages[1].timestamp, None);
    }

    #[tokio::test]
    async fn send_message_returns_the_created_message() {
        let router = axum::Router::new().route(
            "/messages",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body, json!({ "senderId": "u1", "receiverId": "u2", "text": "hi" }));
                (
                    StatusCode::CREATED,
                    Json(json!({
                        "id": "42", "senderId": "u1", "receiverId": "u2", "text": "hi",
                        "timestamp": "2024-05-01T10:00:00.000001", "isRead": false
                    })),
                )
            }),
        );
        let client = stub::client_for(router).await;

        let message = client.send_message("u1", "u2", "hi").await.unwrap();
        assert_eq!(message.id, "42");
        assert_eq!(message.sender_id, "u1");
        assert_eq!(message.receiver_id, "u2");
        assert_eq!(message.text, "hi");
    }

    #[tokio::test]
    async fn blank_messages_are_rejected_locally() {
        let client = stub::client_for(axum::Router::new()).await;

        let err = client.send_message("u1", "u2", " \n ").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { field: "message", .. }));
    }

    #[tokio::test]
    async fn unexpected_payloads_are_decode_errors() {
        let router =
            axum::Router::new().route("/users", get(|| async { Json(json!({ "users": [] })) }));
        let client = stub::client_for(router).await;

        let err = client.get_users().await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Decode {
                endpoint: Endpoint::Users,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let client = stub::client_at(&stub::unreachable_base().await);

        let err = client.get_users().await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Network {
                endpoint: Endpoint::Users,
                ..
            }
        ));
    }
}
