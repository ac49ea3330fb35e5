use serenity::model::Color;

use crate::prelude::*;

const CHANNEL_EMBED_COLOR: Color = Color::new(0x4D_A4_3A);

/// Creates a new text channel with a given name.
#[poise::command(
    slash_command,
    prefix_command,
    rename = "createtextchannel",
    aliases("ctc"),
    category = "Administration",
    guild_only,
    required_permissions = "MANAGE_CHANNELS",
    required_bot_permissions = "MANAGE_CHANNELS"
)]
pub async fn create_text_channel(
    ctx: WContext<'_>,
    #[description = "The name of the new channel."]
    #[rest]
    name: String,
) -> WResult {
    // channel names cannot hold spaces, dash them like the chat client does
    let name = name.split_whitespace().collect::<Vec<_>>().join("-");
    if name.is_empty() {
        return Err(WArgError::new_const("Give me a name for the channel.").into());
    }

    let guild_id = ctx.guild_id().context("command only available in guilds")?;
    let channel = guild_id
        .create_channel(
            ctx.http(),
            CreateChannel::new(&name).kind(ChannelType::Text),
        )
        .await?;

    let embed = CreateEmbed::new()
        .color(CHANNEL_EMBED_COLOR)
        .title("Text Channel Created")
        .field("Name", channel.name.clone(), true)
        .field("ID", channel.id.to_string(), true);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
