//! Conversation scenarios implementation
//!
//! Pure transition logic for the profile setup and food logging dialogs.
//! `step` parses one user input against the current state and says what
//! happens next; side effects (lookups, store writes, replies) are left to
//! the caller.

use crate::models::{Profile, MAX_ACTIVITY_MINUTES, MAX_AGE_YEARS, MAX_FOOD_PER_LOG_G, MAX_HEIGHT_CM, MAX_WEIGHT_KG};
use crate::utils::errors::{HealthBuddyError, Result};
use crate::utils::helpers::{parse_number, parse_non_negative_int, parse_positive_int, parse_positive_number, normalize_whitespace};
use super::context::{ConversationState, FoodStep, ProfileDraft, ProfileStep};

/// Outcome of feeding one input to a dialog
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Input accepted; move to `state` and ask the question under `prompt`
    Advance {
        state: ConversationState,
        prompt: &'static str,
    },
    /// Input rejected; stay on the current step and explain why
    Reprompt { error: &'static str },
    /// Last profile field received
    CompleteProfile(Profile),
    /// Quantity received; `calories` is the energy of the eaten portion
    CompleteFood {
        food_name: String,
        quantity: f64,
        calories: f64,
    },
}

/// Translation key of the question asked at the current step
pub fn prompt_key(state: &ConversationState) -> Option<&'static str> {
    match state {
        ConversationState::Idle => None,
        ConversationState::ProfileSetup { step, .. } => Some(profile_prompt(*step)),
        ConversationState::FoodLog { step: FoodStep::Quantity, .. } => Some("food.ask_quantity_again"),
    }
}

fn profile_prompt(step: ProfileStep) -> &'static str {
    match step {
        ProfileStep::Weight => "profile.ask_weight",
        ProfileStep::Height => "profile.ask_height",
        ProfileStep::Age => "profile.ask_age",
        ProfileStep::ActivityMinutes => "profile.ask_activity",
        ProfileStep::City => "profile.ask_city",
    }
}

/// Feed one user input to the active dialog
pub fn step(state: &ConversationState, input: &str) -> Result<Transition> {
    match state {
        ConversationState::Idle => Err(HealthBuddyError::InvalidStateTransition {
            from: "idle".to_string(),
            to: "input".to_string(),
        }),
        ConversationState::ProfileSetup { step, draft } => Ok(profile_step(*step, draft, input)),
        ConversationState::FoodLog { step: FoodStep::Quantity, food_name, calories_per_100g } => {
            Ok(food_quantity_step(food_name, *calories_per_100g, input))
        }
    }
}

fn profile_step(step: ProfileStep, draft: &ProfileDraft, input: &str) -> Transition {
    let mut draft = draft.clone();

    let next = match step {
        ProfileStep::Weight => match parse_positive_number(input).filter(|w| *w <= MAX_WEIGHT_KG) {
            Some(weight) => {
                draft.weight = Some(weight);
                ProfileStep::Height
            }
            None => return Transition::Reprompt { error: "profile.invalid_weight" },
        },
        ProfileStep::Height => match parse_positive_number(input).filter(|h| *h <= MAX_HEIGHT_CM) {
            Some(height) => {
                draft.height = Some(height);
                ProfileStep::Age
            }
            None => return Transition::Reprompt { error: "profile.invalid_height" },
        },
        ProfileStep::Age => match parse_positive_int(input).filter(|a| *a <= MAX_AGE_YEARS) {
            Some(age) => {
                draft.age = Some(age);
                ProfileStep::ActivityMinutes
            }
            None => return Transition::Reprompt { error: "profile.invalid_age" },
        },
        ProfileStep::ActivityMinutes => match parse_non_negative_int(input).filter(|m| *m <= MAX_ACTIVITY_MINUTES) {
            Some(minutes) => {
                draft.activity_minutes = Some(minutes);
                ProfileStep::City
            }
            None => return Transition::Reprompt { error: "profile.invalid_activity" },
        },
        ProfileStep::City => {
            let city = normalize_whitespace(input);
            if city.is_empty() {
                return Transition::Reprompt { error: "profile.invalid_city" };
            }
            return match draft.complete(city) {
                Some(profile) => Transition::CompleteProfile(profile),
                // Unreachable through the dialog itself; restart rather than panic
                None => Transition::Advance {
                    state: ConversationState::ProfileSetup {
                        step: ProfileStep::Weight,
                        draft: ProfileDraft::default(),
                    },
                    prompt: profile_prompt(ProfileStep::Weight),
                },
            };
        }
    };

    Transition::Advance {
        state: ConversationState::ProfileSetup { step: next, draft },
        prompt: profile_prompt(next),
    }
}

fn food_quantity_step(food_name: &str, calories_per_100g: f64, input: &str) -> Transition {
    let quantity = match parse_number(input) {
        Some(quantity) if quantity <= MAX_FOOD_PER_LOG_G => quantity,
        _ => return Transition::Reprompt { error: "food.invalid_quantity" },
    };

    if quantity <= 0.0 {
        return Transition::Reprompt { error: "food.quantity_not_positive" };
    }

    Transition::CompleteFood {
        food_name: food_name.to_string(),
        quantity,
        calories: calories_per_100g * quantity / 100.0,
    }
}
