//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /log_water, etc.

pub mod food;
pub mod help;
pub mod profile;
pub mod progress;
pub mod start;
pub mod water;
pub mod workout;

use teloxide::utils::command::BotCommands;
use tracing::debug;

use crate::state::UserSlot;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use super::{dialog, HandlerContext, Replies};

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case", description = "HealthBuddy commands:")]
pub enum Command {
    #[command(description = "Getting started")]
    Start,
    #[command(description = "List of commands")]
    Help,
    #[command(description = "Set up your profile")]
    SetProfile,
    #[command(description = "Log water in mL, e.g. /log_water 200")]
    LogWater(String),
    #[command(description = "Log food, e.g. /log_food apple")]
    LogFood(String),
    #[command(description = "Log a workout, e.g. /log_workout running 30")]
    LogWorkout(String),
    #[command(description = "Water and calorie progress")]
    CheckProgress,
    #[command(description = "Cancel the current dialog")]
    Cancel,
}

impl Command {
    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::SetProfile => "set_profile",
            Command::LogWater(_) => "log_water",
            Command::LogFood(_) => "log_food",
            Command::LogWorkout(_) => "log_workout",
            Command::CheckProgress => "check_progress",
            Command::Cancel => "cancel",
        }
    }

    /// Commands that are allowed to interrupt an active dialog
    pub fn interrupts_dialog(&self) -> bool {
        matches!(self, Command::Cancel | Command::SetProfile | Command::LogFood(_))
    }
}

/// Parse a command from message text
///
/// Teloxide rejects argument-less variants followed by extra words and
/// argument variants without any; both are accepted here, with missing
/// arguments left empty for the handler to report.
pub fn parse_command(text: &str, bot_username: &str) -> Option<Command> {
    if let Ok(command) = Command::parse(text, bot_username) {
        return Some(command);
    }

    let body = text.trim().strip_prefix('/')?;
    let (head, args) = match body.split_once(char::is_whitespace) {
        Some((head, args)) => (head, args.trim()),
        None => (body, ""),
    };
    let name = match head.split_once('@') {
        Some((name, mention)) if bot_username.is_empty() || mention.eq_ignore_ascii_case(bot_username) => name,
        Some(_) => return None,
        None => head,
    };

    let args = args.to_string();
    let command = match name.to_lowercase().as_str() {
        "start" => Command::Start,
        "help" => Command::Help,
        "set_profile" => Command::SetProfile,
        "log_water" => Command::LogWater(args),
        "log_food" => Command::LogFood(args),
        "log_workout" => Command::LogWorkout(args),
        "check_progress" => Command::CheckProgress,
        "cancel" => Command::Cancel,
        _ => return None,
    };

    debug!(command = command.name(), "Command parsed by fallback parser");
    Some(command)
}

/// Main command dispatcher
pub async fn handle_command(
    ctx: &HandlerContext,
    slot: &mut UserSlot,
    command: Command,
    lang: &str,
) -> Result<Replies> {
    log_user_action(slot.user_id, command.name(), None);

    match command {
        Command::Start => Ok(start::handle_start(ctx, lang)),
        Command::Help => Ok(help::handle_help(ctx, lang)),
        Command::SetProfile => Ok(profile::handle_set_profile(ctx, slot, lang)),
        Command::LogWater(args) => water::handle_log_water(ctx, slot, &args, lang),
        Command::LogFood(args) => food::handle_log_food(ctx, slot, &args, lang).await,
        Command::LogWorkout(args) => workout::handle_log_workout(ctx, slot, &args, lang),
        Command::CheckProgress => progress::handle_check_progress(ctx, slot, lang),
        Command::Cancel => Ok(dialog::handle_cancel(ctx, slot, lang)),
    }
}
