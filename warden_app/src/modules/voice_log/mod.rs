use mongodb::bson::doc;
use serenity::client::Context;
use serenity::model::Color;

use super::prelude::*;
use crate::fmt::discord::get_unique_username;
use crate::helper::bson_id;

pub mod model;

pub struct Module;

impl super::Module for Module {
    fn enabled(&self, config: &WBotConfig) -> bool {
        config.mongodb_uri.is_some()
    }

    fn intents(&self, _config: &WBotConfig) -> GatewayIntents {
        GatewayIntents::GUILD_VOICE_STATES
    }

    fn validate(&self, _config: &WBotConfig) -> WResult {
        log::info!("Voice log is enabled.");
        Ok(())
    }

    async fn db_init(&self, db: &mongodb::Database) -> WResult {
        model::GuildSettings::collection(db)
            .create_indexes(model::GuildSettings::indices())
            .await?;
        Ok(())
    }
}

pub async fn voice_state_update(
    ctx: &Context,
    data: &WBotData,
    old: Option<&VoiceState>,
    new: &VoiceState,
) {
    if let Err(why) = voice_state_update_inner(ctx, data, old, new).await {
        log::error!("Voice state handling failed: {why:?}");
    }
}

async fn voice_state_update_inner(
    ctx: &Context,
    data: &WBotData,
    old: Option<&VoiceState>,
    new: &VoiceState,
) -> WResult {
    // without a guild the transition cannot be attributed to a log channel
    let Some(guild_id) = new.guild_id else {
        return Ok(());
    };

    if old.is_some_and(|o| o.guild_id.is_some_and(|g| g != guild_id)) {
        return Ok(());
    }

    let Ok(db) = data.database() else {
        return Ok(());
    };

    let settings = model::GuildSettings::collection(db)
        .find_one(doc! { "guild": bson_id!(guild_id) })
        .await?;

    let Some(log_channel) = settings.and_then(|s| s.log_channel) else {
        return Ok(());
    };

    let Some(action) = action_label(old.map(Snapshot::from), Snapshot::from(new)) else {
        return Ok(());
    };

    let author = match &new.member {
        Some(member) => get_unique_username(&member.user),
        None => get_unique_username(&new.user_id.to_user(&ctx.http).await?),
    };

    let channel = new
        .channel_id
        .or(old.and_then(|o| o.channel_id))
        .map_or_else(|| "unknown".to_owned(), |c| c.to_string());

    let embed = CreateEmbed::new()
        .color(Color::GOLD)
        .title("Voice Update")
        .field("Voice Channel ID", channel, true)
        .field("Voice Action Author", author, true)
        .field("Voice Action Author ID", new.user_id.to_string(), true)
        .field("Action", action, false)
        .timestamp(Timestamp::now());

    #[allow(clippy::cast_sign_loss)]
    let log_channel = ChannelId::new(log_channel as u64);

    // a deleted log channel lands here as well; the log line is all we do
    let message = CreateMessage::new().embed(embed);
    if let Err(why) = log_channel.send_message(&ctx.http, message).await {
        log::error!("Failed to send voice log to {log_channel}: {why:?}");
    }

    Ok(())
}

/// The few bits of a voice state the log cares about.
#[derive(Debug, Clone, Copy, Default)]
struct Snapshot {
    channel_id: Option<ChannelId>,
    self_mute: bool,
    self_deaf: bool,
}

impl From<&VoiceState> for Snapshot {
    fn from(state: &VoiceState) -> Self {
        Self {
            channel_id: state.channel_id,
            self_mute: state.self_mute,
            self_deaf: state.self_deaf,
        }
    }
}

/// Builds the log label for a state transition.
///
/// Several transitions may land in one event; they all end up in the
/// label. Returns [`None`] when nothing tracked changed.
fn action_label(old: Option<Snapshot>, new: Snapshot) -> Option<String> {
    let old = old.unwrap_or_default();
    let mut actions: Vec<Cow<'_, str>> = Vec::new();

    if !old.self_mute && new.self_mute {
        actions.push("Muted Self".into());
    }

    if old.self_mute && !new.self_mute {
        actions.push("Unmuted Self".into());
    }

    if !old.self_deaf && new.self_deaf {
        actions.push("Deafened Self".into());
    }

    if old.self_deaf && !new.self_deaf {
        actions.push("Undeafened Self".into());
    }

    match (old.channel_id, new.channel_id) {
        (None, Some(_)) => actions.push("Joined".into()),
        (Some(_), None) => actions.push("Left".into()),
        (Some(from), Some(to)) if from != to => {
            actions.push(format!("Joined from {from}").into());
        },
        _ => {},
    }

    if actions.is_empty() {
        None
    } else {
        Some(actions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_channel(channel: u64) -> Snapshot {
        Snapshot {
            channel_id: Some(ChannelId::new(channel)),
            ..Snapshot::default()
        }
    }

    #[test]
    fn no_change_means_no_label() {
        assert_eq!(action_label(Some(in_channel(1)), in_channel(1)), None);
        assert_eq!(action_label(Some(Snapshot::default()), Snapshot::default()), None);
    }

    #[test]
    fn join_leave_move() {
        assert_eq!(
            action_label(Some(Snapshot::default()), in_channel(1)).as_deref(),
            Some("Joined")
        );
        assert_eq!(
            action_label(Some(in_channel(1)), Snapshot::default()).as_deref(),
            Some("Left")
        );
        assert_eq!(
            action_label(Some(in_channel(1)), in_channel(2)).as_deref(),
            Some("Joined from 1")
        );
    }

    #[test]
    fn mute_and_deafen_flags() {
        let muted = Snapshot {
            self_mute: true,
            ..in_channel(1)
        };
        let deafened = Snapshot {
            self_deaf: true,
            ..in_channel(1)
        };

        assert_eq!(
            action_label(Some(in_channel(1)), muted).as_deref(),
            Some("Muted Self")
        );
        assert_eq!(
            action_label(Some(muted), in_channel(1)).as_deref(),
            Some("Unmuted Self")
        );
        assert_eq!(
            action_label(Some(in_channel(1)), deafened).as_deref(),
            Some("Deafened Self")
        );
        assert_eq!(
            action_label(Some(deafened), in_channel(1)).as_deref(),
            Some("Undeafened Self")
        );
    }

    #[test]
    fn multiple_transitions_in_one_event() {
        let old = in_channel(1);
        let new = Snapshot {
            channel_id: Some(ChannelId::new(2)),
            self_mute: true,
            self_deaf: true,
        };

        assert_eq!(
            action_label(Some(old), new).as_deref(),
            Some("Muted Self, Deafened Self, Joined from 1")
        );
    }

    #[test]
    fn missing_old_state_counts_as_blank() {
        let new = Snapshot {
            self_mute: true,
            ..in_channel(7)
        };

        assert_eq!(
            action_label(None, new).as_deref(),
            Some("Muted Self, Joined")
        );
    }
}
