use crate::api::QueueStats;
use crate::prelude::*;

const RAINBOW_LOGO_URL: &str =
    "https://vignette1.wikia.nocookie.net/rainbowsix/images/0/06/Rainbow_(Clear_Background)_logo.png";

/// Get stats of any Rainbow Six player.
///
/// Usage: `rainbow6 <pc|ps4|xone> <username>`, e.g. `rainbow6 pc SaffronPants`.
#[poise::command(
    slash_command,
    prefix_command,
    aliases("r6"),
    category = "Player Stats"
)]
pub async fn rainbow6(
    ctx: WContext<'_>,
    #[description = "The platform the player plays on."] platform: String,
    #[description = "The player's username."]
    #[rest]
    username: String,
) -> WResult {
    let platform = parse_platform(&platform)?;
    validate_username(&username)?;

    ctx.defer().await?;
    let stats = ctx.data().api().player_stats(platform, &username).await?;

    let mut fields: Vec<SimpleEmbedFieldCreate<'_>> = vec![
        ("Player Name", stats.username.clone(), false),
        ("Level", stats.progression.level.to_string(), true),
        ("XP", stats.progression.total_xp.to_string(), true),
    ];

    push_queue_fields(&mut fields, "Ranked", &username, stats.stats.queue.ranked.as_ref());
    push_queue_fields(&mut fields, "Casual", &username, stats.stats.queue.casual.as_ref());

    let embed = CreateEmbed::new()
        .color(ctx.data().config().embed_color)
        .title("Rainbow 6")
        .url(format!("https://r6stats.com/stats/{}", stats.uplay_id))
        .fields(fields)
        .thumbnail(RAINBOW_LOGO_URL);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn push_queue_fields<'a>(
    fields: &mut Vec<SimpleEmbedFieldCreate<'a>>,
    queue: &'a str,
    username: &str,
    stats: Option<&QueueStats>,
) {
    match stats {
        Some(stats) if stats.has_games() => {
            fields.push((
                queue,
                format!(
                    "{username} has played {queue} games for **{:.2}** Hours.",
                    stats.playtime_hours()
                ),
                false,
            ));
            fields.push(("Wins", stats.wins.to_string(), true));
            fields.push(("Losses", stats.losses.to_string(), true));
            fields.push(("Kills", stats.kills.to_string(), true));
            fields.push(("Deaths", stats.deaths.to_string(), true));
            fields.push(("Win/Lose Ratio", stats.wl.to_string(), true));
            fields.push(("Kill/Death Ratio", stats.kd.to_string(), true));
        },
        _ => {
            fields.push((
                queue,
                format!("{username} has not played any {queue} game."),
                false,
            ));
        },
    }
}

fn parse_platform(input: &str) -> Result<&'static str, WArgError> {
    match input.to_ascii_lowercase().as_str() {
        "pc" => Ok("pc"),
        "ps4" => Ok("ps4"),
        "xone" => Ok("xone"),
        _ => Err(WArgError::new_const(
            "Invalid platform. Valid platforms are `PC`, `PS4` and `XOne`.",
        )),
    }
}

/// Mirrors the uplay username rules: 3 to 15 characters, starting with a
/// letter, then letters, digits, `_`, `-`, `.` or spaces.
fn validate_username(username: &str) -> Result<(), WArgError> {
    let mut chars = username.chars();
    let valid = (3..=15).contains(&username.len())
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ' '));

    if valid {
        Ok(())
    } else {
        Err(WArgError::new_const("Invalid input for username."))
    }
}
