//! Start command handler

use crate::handlers::{HandlerContext, Replies};

/// Handle /start command
pub fn handle_start(ctx: &HandlerContext, lang: &str) -> Replies {
    vec![ctx.t("start.welcome", lang)]
}
