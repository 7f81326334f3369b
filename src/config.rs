use std::fs;
use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/client.json";

const DEFAULT_AUTH_URL: &str =
    "https://functions.poehali.dev/6f04c3dd-35e6-44d1-b712-5573fee6857d";
const DEFAULT_USERS_URL: &str =
    "https://functions.poehali.dev/2c31383a-db1f-4ce4-9db7-6aa4fa45a043";
const DEFAULT_CHATS_URL: &str =
    "https://functions.poehali.dev/07fbc4dd-0a01-4f86-b4ce-ddfcc6311ba7";
const DEFAULT_MESSAGES_URL: &str =
    "https://functions.poehali.dev/877f60b1-4aaa-4207-a859-c814d6c25cb0";

/// URLs of the four remote functions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub auth: String,
    pub users: String,
    pub chats: String,
    pub messages: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth: DEFAULT_AUTH_URL.to_string(),
            users: DEFAULT_USERS_URL.to_string(),
            chats: DEFAULT_CHATS_URL.to_string(),
            messages: DEFAULT_MESSAGES_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub endpoints: Endpoints,
    /// Không đặt = không có timeout
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Apply `FRIENDSMESS_*` overrides. `lookup` is `std::env::var` in
    /// production.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let targets = [
            ("FRIENDSMESS_AUTH_URL", &mut self.endpoints.auth),
            ("FRIENDSMESS_USERS_URL", &mut self.endpoints.users),
            ("FRIENDSMESS_CHATS_URL", &mut self.endpoints.chats),
            ("FRIENDSMESS_MESSAGES_URL", &mut self.endpoints.messages),
        ];
        for (key, target) in targets {
            if let Some(value) = lookup(key).filter(|value| !value.trim().is_empty()) {
                log::info!("Endpoint overridden by {key}");
                *target = value.trim().to_string();
            }
        }

        if let Some(raw) = lookup("FRIENDSMESS_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(0) => self.request_timeout_secs = None,
                Ok(secs) => self.request_timeout_secs = Some(secs),
                Err(err) => log::warn!("Ignoring FRIENDSMESS_TIMEOUT_SECS `{raw}`: {err}"),
            }
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
