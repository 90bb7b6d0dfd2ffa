//! Profile setup handlers
//!
//! `/set_profile` opens the setup dialog; `finish_profile` runs once the
//! last answer is in and turns the collected profile into daily goals.

use tracing::info;

use crate::handlers::{HandlerContext, Replies};
use crate::models::{Profile, UserSession};
use crate::services::goals::daily_goals;
use crate::state::{prompt_key, UserSlot};
use crate::utils::helpers::format_amount;
use crate::utils::logging::{log_dialog_transition, log_lookup_degraded};

/// Handle /set_profile command
pub fn handle_set_profile(ctx: &HandlerContext, slot: &mut UserSlot, lang: &str) -> Replies {
    let from = slot.conversation.state.step_name();
    slot.conversation.start_profile_setup();
    log_dialog_transition(slot.user_id, from, slot.conversation.state.step_name());

    let prompt = prompt_key(&slot.conversation.state).unwrap_or("profile.ask_weight");
    vec![ctx.t(prompt, lang)]
}

/// Compute goals for a completed profile and store the session
///
/// A failed temperature lookup only drops the hot-weather term and adds a
/// warning before the summary.
pub async fn finish_profile(
    ctx: &HandlerContext,
    slot: &mut UserSlot,
    profile: Profile,
    lang: &str,
) -> Replies {
    let mut replies = Replies::new();

    let temperature = match ctx.services.weather_service.get_temperature(&profile.city).await {
        Ok(temperature) => Some(temperature),
        Err(e) => {
            log_lookup_degraded("weather", slot.user_id, &e.to_string());
            replies.push(ctx.t("profile.temperature_failed", lang));
            None
        }
    };

    let goals = daily_goals(&profile, temperature);
    let session = slot.commit_profile(profile, goals);

    info!(
        user_id = session.user_id,
        water_goal = session.goals.water_ml,
        calories_goal = session.goals.calories,
        temperature = ?temperature,
        "Profile saved"
    );

    replies.push(profile_summary(ctx, session, lang));
    replies
}

fn profile_summary(ctx: &HandlerContext, session: &UserSession, lang: &str) -> String {
    let profile = &session.profile;
    ctx.tf(
        "profile.summary",
        lang,
        &[
            ("weight", profile.weight.to_string()),
            ("height", profile.height.to_string()),
            ("age", profile.age.to_string()),
            ("activity", profile.activity_minutes.to_string()),
            ("city", profile.city.clone()),
            ("calories_goal", format_amount(session.goals.calories)),
            ("water_goal", format_amount(session.goals.water_ml)),
        ],
    )
}
