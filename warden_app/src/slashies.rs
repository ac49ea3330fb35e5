use crate::api;
use crate::prelude::*;

/// Pre-command execution hook.
pub async fn pre_command(ctx: WContext<'_>) {
    log::info!("{}: {}", ctx.author().name, ctx.invocation_string());
}

/// Command execution error handler.
///
/// Validation failures, upstream status errors and empty results are
/// reported back to the invoking user. Everything else is only written to
/// the operator log and the user gets no reply; this split is policy, the
/// user cannot act on a transport or decode failure anyway.
#[cold]
pub async fn error_handler(error: poise::FrameworkError<'_, WBotData, WError>) {
    match &error {
        poise::FrameworkError::Command { error, ctx, .. } => command_error(ctx, error).await,
        poise::FrameworkError::ArgumentParse {
            error, input, ctx, ..
        } => {
            let message = format!(
                "Argument invalid: {}\nCaused by input: '{}'",
                error,
                input.as_deref().unwrap_or_default()
            );
            context_error(ctx, message).await;
        },
        _ => log::error!("Framework error: {error:?}"),
    }
}

async fn command_error(ctx: &WContext<'_>, err: &WError) {
    let message = if let Some(err) = err.downcast_ref::<WArgError>() {
        format!("Command error: ```{err}```")
    } else if let Some(err) = err.downcast_ref::<api::Error>() {
        match err {
            api::Error::Status { status, message } => format!("Error {status}: {message}"),
            api::Error::NotFound { what } => format!("No {what} found."),
            _ => return log::error!("API error in command: {err:?}"),
        }
    } else {
        return log::error!("Error in command: {err:?}");
    };

    context_error(ctx, message).await;
}

async fn context_error(ctx: &WContext<'_>, feedback: String) {
    let embed = CreateEmbed::new()
        .description(feedback)
        .color(ERROR_EMBED_COLOR);

    let reply = CreateReply::default().embed(embed).ephemeral(true);
    if let Err(err) = ctx.send(reply).await {
        log::error!("Error in error handler: {err:?}");
    }
}
