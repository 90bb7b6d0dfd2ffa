//! Help command handler

use crate::handlers::{HandlerContext, Replies};

/// Handle /help command
pub fn handle_help(ctx: &HandlerContext, lang: &str) -> Replies {
    vec![ctx.t("help.text", lang)]
}
