use crate::fmt::discord::get_unique_username;
use crate::prelude::*;

/// Shows a random picture of a bird.
#[poise::command(slash_command, prefix_command, category = "Images")]
pub async fn bird(ctx: WContext<'_>) -> WResult {
    send_random_image(ctx, "bird").await
}

/// Shows a random picture of a bunny.
#[poise::command(slash_command, prefix_command, category = "Images")]
pub async fn bunny(ctx: WContext<'_>) -> WResult {
    send_random_image(ctx, "bunny rabbit").await
}

/// Cuddle someone!
#[poise::command(slash_command, prefix_command, category = "Images")]
pub async fn cuddle(ctx: WContext<'_>) -> WResult {
    ctx.defer().await?;
    let url = ctx.data().api().random_gif_url("cuddle", 10).await?;

    let embed = CreateEmbed::new()
        .color(ctx.data().config().embed_color)
        .title(format!(
            "{} is cuddling you.",
            get_unique_username(ctx.author())
        ))
        .image(url)
        .footer(CreateEmbedFooter::new("Powered by GIPHY"));

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

async fn send_random_image(ctx: WContext<'_>, query: &str) -> WResult {
    ctx.defer().await?;
    let url = ctx.data().api().random_image_url(query).await?;

    let embed = CreateEmbed::new()
        .color(ctx.data().config().embed_color)
        .image(url);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
