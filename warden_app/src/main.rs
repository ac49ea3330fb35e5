mod api;
mod config;
mod data;
mod events;
mod fmt;
mod helper;
mod logging;
mod modules;
mod monitor;
mod prelude;
mod slashies;

fn main() -> anyhow::Result<()> {
    use serenity::gateway::ActivityData;
    use serenity::prelude::*;

    use crate::config::WConfig;
    use crate::prelude::*;

    return inner();

    // short async fn to reduce `tokio::main` scope
    #[tokio::main]
    async fn inner() -> anyhow::Result<()> {
        // run the program and clean up
        let res = run().await;
        if let Err(why) = &res {
            log::error!("Exiting due to error: {why:?}");
        }

        log::logger().flush();
        res
    }

    // actual main logic
    async fn run() -> WResult {
        let config = build_config()?;
        logging::init(&config.log)?;

        log::info!("Warden v{}", env!("CARGO_PKG_VERSION"));

        let bot_data = WBotData::new(config.bot)?;
        let init = bot_data.init()?;

        // prefix commands need the message content
        // on top of whatever the modules ask for
        let intents = GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
            | init.intents;

        let options = poise::FrameworkOptions {
            commands: init.commands,
            pre_command: |ctx| Box::pin(slashies::pre_command(ctx)),
            on_error: |error| Box::pin(slashies::error_handler(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handle(ctx, event, framework, data))
            },
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.discord.prefix),
                ..Default::default()
            },
            ..Default::default()
        };

        let framework = poise::Framework::builder()
            .options(options)
            .setup(move |ctx, _ready, framework| {
                Box::pin(async move {
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    bot_data.connect_database().await?;
                    Ok(bot_data)
                })
            })
            .build();

        let status = config
            .discord
            .status
            .unwrap_or_else(|| concat!("v", env!("CARGO_PKG_VERSION")).to_owned());

        let mut client = serenity::Client::builder(&config.discord.token, intents)
            .activity(ActivityData::custom(status))
            .framework(framework)
            .await
            .context("failed to init discord client")?;

        client
            .start()
            .await
            .context("discord client shut down unexpectedly")
    }

    fn build_config() -> anyhow::Result<WConfig> {
        use std::{env, fs};

        let path = env::var("WARDEN_CONFIG").unwrap_or_else(|_| "warden.toml".to_owned());
        let text = fs::read_to_string(&path)
            .with_context(|| format!("cannot read config file `{path}`"))?;

        toml::from_str(&text).with_context(|| format!("cannot parse config file `{path}`"))
    }
}
