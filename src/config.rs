//! Service configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the webhook listener binds to (default: "0.0.0.0:8080")
    pub listen_address: String,

    /// Matrix homeserver base URL
    pub homeserver_url: String,

    /// Matrix user the access token belongs to
    pub user_id: String,

    /// Matrix access token
    pub access_token: String,

    /// Matrix room status messages are posted to
    pub room_id: String,

    /// Jitsi server base URL, used for the room links in status messages
    pub jitsi_server: String,

    /// Conference rooms to post status messages for (comma-separated)
    pub jitsi_rooms: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| lookup(key).with_context(|| format!("{key} must be set"));

        Ok(Self {
            listen_address: lookup("LISTEN_ADDRESS").unwrap_or_else(|| "0.0.0.0:8080".into()),
            homeserver_url: required("HOMESERVER_URL")?,
            user_id: required("USER_ID")?,
            access_token: required("ACCESS_TOKEN")?,
            room_id: required("ROOM_ID")?,
            jitsi_server: required("JITSI_SERVER")?,
            jitsi_rooms: parse_room_list(&required("JITSI_ROOMS")?),
        })
    }
}

/// Splits a comma-separated room list, dropping blank entries
fn parse_room_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|room| !room.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
