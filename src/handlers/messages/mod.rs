//! Message handlers module
//!
//! Entry point for every incoming text: routes it to the active dialog or to
//! a command handler while holding the user's lock.

use tracing::{debug, info, warn};

use crate::utils::errors::{ErrorSeverity, Result};
use super::commands::{handle_command, parse_command};
use super::dialog::{handle_dialog_input, reject_during_dialog};
use super::{error_reply, HandlerContext, Replies};

/// Handle one incoming text from a user and return the replies
///
/// The user's slot stays locked for the whole event, lookups included, so
/// events of one user never interleave.
pub async fn handle_text(
    ctx: &HandlerContext,
    user_id: i64,
    text: &str,
    language_code: Option<&str>,
) -> Result<Replies> {
    let lang = ctx.i18n.detect_user_language(language_code);
    let mut slot = ctx.store.lock(user_id).await;

    if slot.conversation.is_expired(ctx.conversation_timeout) {
        info!(
            user_id = user_id,
            scenario = slot.conversation.state.scenario(),
            step = slot.conversation.state.step_name(),
            "Dialog expired"
        );
        slot.conversation.cancel();
    }

    let command = parse_command(text, &ctx.bot_username);
    debug!(user_id = user_id, command = ?command.as_ref().map(|c| c.name()), "Routing message");

    let result = match command {
        Some(command) if slot.conversation.is_active() && !command.interrupts_dialog() => {
            Ok(reject_during_dialog(ctx, &slot, &lang))
        }
        Some(command) => handle_command(ctx, &mut slot, command, &lang).await,
        None if slot.conversation.is_active() => handle_dialog_input(ctx, &mut slot, text, &lang).await,
        None => Ok(vec![ctx.t("general.use_commands", &lang)]),
    };
    ctx.store.release(slot).await;

    match result {
        Err(e) if e.is_user_facing() => {
            match e.severity() {
                ErrorSeverity::Info => debug!(user_id = user_id, error = %e, "Answering user error"),
                _ => warn!(user_id = user_id, error = %e, "Answering user error"),
            }
            Ok(error_reply(ctx, &e, &lang).into_iter().collect())
        }
        other => other,
    }
}
