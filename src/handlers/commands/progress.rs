//! Progress report handler

use crate::handlers::{HandlerContext, Replies};
use crate::state::UserSlot;
use crate::utils::errors::{HealthBuddyError, Result};
use crate::utils::helpers::format_amount;

/// Handle /check_progress command
pub fn handle_check_progress(ctx: &HandlerContext, slot: &mut UserSlot, lang: &str) -> Result<Replies> {
    let session = slot
        .get()
        .ok_or(HealthBuddyError::UserNotFound { user_id: slot.user_id })?;
    let progress = session.progress();

    let report = ctx.tf(
        "progress.report",
        lang,
        &[
            ("water_consumed", format_amount(progress.water_consumed)),
            ("water_goal", format_amount(progress.water_goal)),
            ("water_remaining", format_amount(progress.water_remaining)),
            ("calories_consumed", format_amount(progress.calories_consumed)),
            ("calories_goal", format_amount(progress.calories_goal)),
            ("calories_burned", format_amount(progress.calories_burned)),
            ("calories_balance", format_amount(progress.calories_balance)),
        ],
    );

    Ok(vec![report])
}
