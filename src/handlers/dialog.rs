//! Dialog handlers
//!
//! Feeds free text to the active dialog and carries out what the transition
//! asks for.

use tracing::debug;

use crate::state::{prompt_key, step, ConversationState, Transition, UserSlot};
use crate::utils::errors::Result;
use crate::utils::logging::log_dialog_transition;
use super::commands::{food, profile};
use super::{HandlerContext, Replies};

/// Handle text sent while a dialog is active
pub async fn handle_dialog_input(
    ctx: &HandlerContext,
    slot: &mut UserSlot,
    text: &str,
    lang: &str,
) -> Result<Replies> {
    let user_id = slot.user_id;
    let from = slot.conversation.state.step_name();

    match step(&slot.conversation.state, text)? {
        Transition::Advance { state, prompt } => {
            log_dialog_transition(user_id, from, state.step_name());
            slot.conversation.advance(state);
            Ok(vec![ctx.t(prompt, lang)])
        }
        Transition::Reprompt { error } => {
            debug!(user_id = user_id, step = from, error = error, "Dialog input rejected");
            let mut replies = vec![ctx.t(error, lang)];
            replies.extend(current_prompt(ctx, &slot.conversation.state, lang));
            Ok(replies)
        }
        Transition::CompleteProfile(profile) => {
            log_dialog_transition(user_id, from, "none");
            slot.conversation.complete();
            Ok(profile::finish_profile(ctx, slot, profile, lang).await)
        }
        Transition::CompleteFood { food_name, quantity, calories } => {
            log_dialog_transition(user_id, from, "none");
            slot.conversation.complete();
            food::finish_food(ctx, slot, &food_name, quantity, calories, lang)
        }
    }
}

/// Reply to a command that cannot interrupt the active dialog
pub fn reject_during_dialog(ctx: &HandlerContext, slot: &UserSlot, lang: &str) -> Replies {
    let mut replies = vec![ctx.t("general.dialog_in_progress", lang)];
    replies.extend(current_prompt(ctx, &slot.conversation.state, lang));
    replies
}

/// Handle /cancel command
pub fn handle_cancel(ctx: &HandlerContext, slot: &mut UserSlot, lang: &str) -> Replies {
    if !slot.conversation.is_active() {
        return vec![ctx.t("cancel.nothing", lang)];
    }

    log_dialog_transition(slot.user_id, slot.conversation.state.step_name(), "none");
    slot.conversation.cancel();
    vec![ctx.t("cancel.done", lang)]
}

fn current_prompt(ctx: &HandlerContext, state: &ConversationState, lang: &str) -> Option<String> {
    prompt_key(state).map(|key| ctx.t(key, lang))
}
