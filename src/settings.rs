use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::rooms::{RoomCatalog, RoomTypeConfig};
use crate::types::RoomType;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramSettings {
    pub token: Option<String>,
    pub chat_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomsSettings {
    pub small: Option<RoomTypeConfig>,
    pub big: Option<RoomTypeConfig>,
}

/// Layered configuration: optional `hotel.toml` next to the binary,
/// overridden by `HOTEL__*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub telegram: TelegramSettings,
    #[serde(default = "default_menu_cache_ttl")]
    pub menu_cache_ttl_secs: u64,
    #[serde(default)]
    pub rooms: Option<RoomsSettings>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_owned()
}

fn default_menu_cache_ttl() -> u64 {
    300
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name("hotel").required(false))
            .add_source(Environment::with_prefix("HOTEL").separator("__"))
            .build()?
            .try_deserialize()?;

        // The original deployment configured the bot through these
        // plain env names; keep honoring them.
        if settings.telegram.token.is_none() {
            settings.telegram.token = env::var("TELEGRAM_BOT_TOKEN").ok();
        }
        if settings.telegram.chat_id.is_none() {
            settings.telegram.chat_id = env::var("TELEGRAM_CHAT_ID")
                .ok()
                .and_then(|raw| raw.parse().ok());
        }

        Ok(settings)
    }

    /// Room inventory with the built-in defaults filling any gaps in
    /// the config file.
    pub fn catalog(&self) -> RoomCatalog {
        let defaults = RoomCatalog::default();
        match &self.rooms {
            Some(rooms) => RoomCatalog::new(
                rooms
                    .small
                    .clone()
                    .unwrap_or_else(|| defaults.config(RoomType::Small).clone()),
                rooms
                    .big
                    .clone()
                    .unwrap_or_else(|| defaults.config(RoomType::Big).clone()),
            ),
            None => defaults,
        }
    }
}
