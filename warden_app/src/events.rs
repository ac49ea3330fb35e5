use serenity::client::{Context, FullEvent};

use crate::modules::voice_log;
use crate::monitor;
use crate::prelude::*;

/// Central gateway event dispatch.
pub async fn handle(
    ctx: &Context,
    event: &FullEvent,
    _framework: poise::FrameworkContext<'_, WBotData, WError>,
    data: &WBotData,
) -> WResult {
    match event {
        FullEvent::Ready { data_about_bot } => {
            log::info!("Logged in as {}.", data_about_bot.user.name);

            if monitor::send_heartbeat() {
                log::debug!("Heartbeat sent.");
            }
        },
        FullEvent::VoiceStateUpdate { old, new } => {
            voice_log::voice_state_update(ctx, data, old.as_ref(), new).await;
        },
        _ => {},
    }

    Ok(())
}
