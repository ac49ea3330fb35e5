use std::sync::OnceLock;

use serenity::model::Color;
use serenity::prelude::*;

use crate::api;
use crate::config::WBotConfig;
use crate::modules::{for_each_module, Module as _};
use crate::prelude::*;

/// A general color that can be used for embeds indicating errors.
pub const ERROR_EMBED_COLOR: Color = Color::new(0xCF_00_25);

pub type WError = anyhow::Error;
pub type WResult = Result<(), WError>;
pub type WContext<'a> = poise::Context<'a, WBotData, WError>;
pub type WCommand = poise::Command<WBotData, WError>;

/// A simple error that can return any message to the user.
///
/// These surface as user-visible validation errors rather than being
/// swallowed into the operator log.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{msg}")]
#[must_use]
pub struct WArgError {
    /// The error message
    pub msg: Cow<'static, str>,
}

impl WArgError {
    pub const fn new_const(msg: &'static str) -> Self {
        Self {
            msg: Cow::Borrowed(msg),
        }
    }

    pub fn new(msg: impl Into<Cow<'static, str>>) -> Self {
        Self { msg: msg.into() }
    }
}

/// The global bot data. Only one instance exists per bot.
#[derive(Debug)]
pub struct WBotData {
    /// The bot configuration.
    config: WBotConfig,
    /// Shared client for the third-party lookup APIs.
    api: api::Client,
    /// Database connection, if configured.
    database: OnceLock<mongodb::Database>,
}

impl WBotData {
    /// Creates a new instance.
    pub fn new(config: WBotConfig) -> anyhow::Result<Self> {
        let api = api::Client::new(config.credentials.clone())?;
        Ok(Self {
            config,
            api,
            database: OnceLock::new(),
        })
    }

    /// Gets the bot configuration.
    #[must_use]
    pub fn config(&self) -> &WBotConfig {
        &self.config
    }

    /// Gets the lookup API client.
    #[must_use]
    pub fn api(&self) -> &api::Client {
        &self.api
    }

    /// Gets the database connection.
    pub fn database(&self) -> anyhow::Result<&mongodb::Database> {
        self.database.get().context("database is not connected")
    }

    /// Gets the init data needed based on the enabled modules.
    pub fn init(&self) -> anyhow::Result<WInit> {
        let config = self.config();
        let mut init = WInit::default();

        for_each_module!(config, |m| {
            m.validate(config)?;
            init.intents |= m.intents(config);
            init.commands.extend(m.commands(config));
        });

        Ok(init)
    }

    /// Connects to the database, if one is configured, and lets every
    /// enabled module initialize its collections.
    pub async fn connect_database(&self) -> WResult {
        if let Some(uri) = &self.config().mongodb_uri {
            let client = mongodb::Client::with_uri_str(uri)
                .await
                .context("failed to connect to database cluster")?;

            let db = client
                .default_database()
                .context("no default database specified")?;

            self.database
                .set(db.clone())
                .expect("can only connect to database once");

            for_each_module!(self.config(), |m| {
                m.db_init(&db).await?;
            });

            log::info!("Connected to MongoDB.");
        }

        Ok(())
    }
}

/// Data needed for bot startup.
pub struct WInit {
    /// Intents used by this app.
    pub intents: GatewayIntents,
    /// Commands to register.
    pub commands: Vec<WCommand>,
}

impl Default for WInit {
    fn default() -> Self {
        Self {
            // default isn't empty but non_privileged and we need empty
            intents: GatewayIntents::empty(),
            commands: Vec::new(),
        }
    }
}
