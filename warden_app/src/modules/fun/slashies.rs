use chrono::{NaiveDate, Utc};

use crate::api::memegen;
use crate::fmt::discord::get_unique_username;
use crate::prelude::*;

/// Sends an inspirational image from InspiroBot.
#[poise::command(slash_command, prefix_command, category = "Fun")]
pub async fn inspiro(ctx: WContext<'_>) -> WResult {
    ctx.defer().await?;
    let url = ctx.data().api().inspirobot_image().await?;

    let embed = CreateEmbed::new()
        .color(ctx.data().config().embed_color)
        .title(format!(
            "{} wanted some inspiration",
            get_unique_username(ctx.author())
        ))
        .image(url);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Generates a captioned meme image.
///
/// Usage: `meme <template> <top> <bottom>`, e.g. `meme drake "old thing" new thing`.
#[poise::command(slash_command, prefix_command, category = "Fun")]
pub async fn meme(
    ctx: WContext<'_>,
    #[description = "The meme template to use."] template: String,
    #[description = "The top caption."] top: String,
    #[description = "The bottom caption."]
    #[rest]
    bottom: String,
) -> WResult {
    validate_template(&template)?;

    let embed = CreateEmbed::new()
        .color(ctx.data().config().embed_color)
        .image(memegen::image_url(&template, &top, &bottom));

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// See how many days the boys have been forever lost to Team Fight Tactics.
#[poise::command(slash_command, prefix_command, category = "Fun")]
pub async fn tft(ctx: WContext<'_>) -> WResult {
    let days = days_since_loss(Utc::now().date_naive());

    let embed = CreateEmbed::new()
        .color(ctx.data().config().embed_color)
        .title("Days Since We Lost The Boys to Team Fight Tactics")
        .description(days.to_string());

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Template names are lowercase slugs; reject anything else before it
/// turns into a confusing upstream 404.
fn validate_template(template: &str) -> Result<(), WArgError> {
    let valid = !template.is_empty()
        && template
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(WArgError::new(format!(
            "Invalid template `{template}`. Template names are lowercase slugs, like `drake` or `db`.",
        )))
    }
}

/// The day the boys were lost.
fn day_of_loss() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 9, 1).expect("date literal must be valid")
}

fn days_since_loss(today: NaiveDate) -> i64 {
    (today - day_of_loss()).num_days()
}
