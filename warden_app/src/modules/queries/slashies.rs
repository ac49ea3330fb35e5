use serenity::model::Color;

use crate::prelude::*;

const WEATHER_EMBED_COLOR: Color = Color::new(0x65_7E_DA);

/// Shows weather information for a specified location by name or ZIP code.
///
/// Usage: `weather London, UK` or `weather 94109`.
#[poise::command(slash_command, prefix_command, aliases("we"), category = "Queries")]
pub async fn weather(
    ctx: WContext<'_>,
    #[description = "The location to look up."]
    #[rest]
    location: String,
) -> WResult {
    let location = location.trim();
    if location.is_empty() {
        return Err(WArgError::new_const("Give me a location to look up.").into());
    }

    ctx.defer().await?;
    let report = ctx.data().api().weather(location).await?;

    let area = &report.area;
    let current = &report.current;
    let today = &report.today;

    let fields: [SimpleEmbedFieldCreate<'_>; 12] = [
        ("Location", area.name_text().to_owned(), true),
        ("Country", area.country_text().to_owned(), true),
        (
            "Coordinates",
            format!("{}, {}", area.latitude, area.longitude),
            true,
        ),
        ("Condition", current.sky_text().to_owned(), true),
        ("Temperature", format!("{} \u{b0}C", current.temp_c), true),
        (
            "Feels Like",
            format!("{} \u{b0}C", current.feels_like_c),
            true,
        ),
        ("Low", format!("{} \u{b0}C", today.min_temp_c), true),
        ("High", format!("{} \u{b0}C", today.max_temp_c), true),
        (
            "Windspeed",
            format!("{} km/h {}", current.windspeed_kmph, current.wind_direction),
            true,
        ),
        ("Humidity", format!("{}%", current.humidity), true),
        (
            "Precipitation",
            format!("{} mm", current.precip_mm),
            true,
        ),
        ("Observation Time", current.observation_time.clone(), true),
    ];

    let embed = CreateEmbed::new()
        .color(WEATHER_EMBED_COLOR)
        .title("Current Weather")
        .fields(fields)
        .footer(CreateEmbedFooter::new("Powered by wttr.in"));

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
