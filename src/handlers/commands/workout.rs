//! Workout logging handler

use crate::handlers::{HandlerContext, Replies};
use crate::models::{recommended_extra_water, Workout, MAX_ACTIVITY_MINUTES};
use crate::state::UserSlot;
use crate::utils::errors::{HealthBuddyError, Result};
use crate::utils::helpers::{format_amount, parse_positive_int};

/// Handle /log_workout command
///
/// Expects exactly `<exercise> <minutes>`. The advised extra water is only
/// mentioned in the reply, it is not logged.
pub fn handle_log_workout(ctx: &HandlerContext, slot: &mut UserSlot, args: &str, lang: &str) -> Result<Replies> {
    let usage = || HealthBuddyError::InvalidArgument("workout.usage".to_string());

    let parts: Vec<&str> = args.split_whitespace().collect();
    let [name, minutes] = parts.as_slice() else {
        return Err(usage());
    };
    let minutes = parse_positive_int(minutes)
        .filter(|minutes| *minutes <= MAX_ACTIVITY_MINUTES)
        .ok_or_else(usage)?;
    let workout = Workout::from_name(name).ok_or_else(|| HealthBuddyError::UnknownWorkout((*name).to_string()))?;

    let burned = workout.calories_burned(minutes);
    slot.add_burned_calories(burned)?;

    let mut reply = ctx.tf(
        "workout.logged",
        lang,
        &[
            ("workout", name.to_lowercase()),
            ("minutes", minutes.to_string()),
            ("calories", format_amount(burned)),
        ],
    );

    let extra_water = recommended_extra_water(minutes);
    if extra_water > 0.0 {
        reply.push(' ');
        reply.push_str(&ctx.tf("workout.extra_water", lang, &[("water", format_amount(extra_water))]));
    }

    Ok(vec![reply])
}
