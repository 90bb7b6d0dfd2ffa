//! Water logging handler

use crate::handlers::{HandlerContext, Replies};
use crate::models::MAX_WATER_PER_LOG_ML;
use crate::state::UserSlot;
use crate::utils::errors::{HealthBuddyError, Result};
use crate::utils::helpers::{format_amount, parse_positive_number};

/// Handle /log_water command
///
/// Only the first argument is the amount, so `/log_water 200 мл` works.
pub fn handle_log_water(ctx: &HandlerContext, slot: &mut UserSlot, args: &str, lang: &str) -> Result<Replies> {
    let amount = args
        .split_whitespace()
        .next()
        .and_then(parse_positive_number)
        .filter(|amount| *amount <= MAX_WATER_PER_LOG_ML)
        .ok_or_else(|| HealthBuddyError::InvalidArgument("water.usage".to_string()))?;

    let session = slot.add_logged_water(amount)?;
    let remaining = session.water_remaining();

    let status = if remaining > 0.0 {
        ctx.tf("water.remaining", lang, &[("remaining", format_amount(remaining))])
    } else {
        ctx.t("water.goal_reached", lang)
    };

    let logged = ctx.tf("water.logged", lang, &[("amount", format_amount(amount))]);
    Ok(vec![format!("{}\n{}", logged, status)])
}
