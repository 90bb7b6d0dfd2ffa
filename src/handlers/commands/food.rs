//! Food logging handlers
//!
//! `/log_food <name>` looks the product up and, when it has a positive
//! energy value, asks how many grams were eaten. The answer is handled by
//! `finish_food`.

use tracing::info;

use crate::handlers::{HandlerContext, Replies};
use crate::models::MAX_KCAL_PER_100G;
use crate::state::UserSlot;
use crate::utils::errors::{HealthBuddyError, Result};
use crate::utils::helpers::{format_amount, normalize_whitespace};
use crate::utils::logging::{log_dialog_transition, log_lookup_degraded};

/// Handle /log_food command
pub async fn handle_log_food(ctx: &HandlerContext, slot: &mut UserSlot, args: &str, lang: &str) -> Result<Replies> {
    let food_name = normalize_whitespace(args);
    if food_name.is_empty() {
        return Err(HealthBuddyError::InvalidArgument("food.usage".to_string()));
    }

    if slot.get().is_none() {
        return Err(HealthBuddyError::UserNotFound { user_id: slot.user_id });
    }

    let calories = match ctx.services.nutrition_service.get_food_calories(&food_name).await {
        Ok(Some(calories)) if calories > 0.0 && calories <= MAX_KCAL_PER_100G => calories,
        Ok(_) => return Ok(vec![ctx.t("food.not_found", lang)]),
        Err(e) => {
            log_lookup_degraded("nutrition", slot.user_id, &e.to_string());
            return Ok(vec![ctx.t("food.not_found", lang)]);
        }
    };

    // A running dialog is only abandoned once the product is known
    let from = slot.conversation.state.step_name();
    slot.conversation.start_food_log(food_name.clone(), calories);
    log_dialog_transition(slot.user_id, from, slot.conversation.state.step_name());

    Ok(vec![ctx.tf(
        "food.ask_quantity",
        lang,
        &[("name", food_name), ("calories", calories.to_string())],
    )])
}

/// Add the eaten portion to the user's totals
pub fn finish_food(
    ctx: &HandlerContext,
    slot: &mut UserSlot,
    food_name: &str,
    quantity: f64,
    calories: f64,
    lang: &str,
) -> Result<Replies> {
    let session = slot.add_logged_food(calories)?;

    info!(
        user_id = session.user_id,
        food = %food_name,
        quantity = quantity,
        calories = calories,
        logged_food = session.logged_food,
        "Food logged"
    );

    Ok(vec![ctx.tf("food.logged", lang, &[("calories", format_amount(calories))])])
}
