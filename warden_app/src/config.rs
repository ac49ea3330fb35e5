use std::collections::HashMap;

use serde::Deserialize;
use serenity::model::Color;

use crate::api;

#[derive(Debug, Deserialize)]
pub struct WConfig {
    pub discord: WDiscordConfig,
    pub bot: WBotConfig,
    #[serde(default)]
    pub log: WLogConfig,
}

#[derive(Debug, Deserialize)]
pub struct WDiscordConfig {
    pub token: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    pub status: Option<String>,
}

fn default_prefix() -> String {
    "!".to_owned()
}

const fn default_embed_color() -> Color {
    Color::new(0x34_98_DB)
}

#[derive(Debug, Deserialize)]
pub struct WBotConfig {
    #[serde(default = "default_embed_color")]
    pub embed_color: Color,
    pub mongodb_uri: Option<String>,
    #[serde(default)]
    pub credentials: api::Credentials,
}

#[derive(Debug, Deserialize, Default)]
pub struct WLogConfig {
    pub default: Option<log::LevelFilter>,
    #[serde(flatten)]
    pub targets: HashMap<String, log::LevelFilter>,
}
