//! HealthBuddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use HealthBuddy::{
    config::Settings,
    handlers::{handle_text, Command, HandlerContext},
    i18n::I18n,
    middleware::LoggingMiddleware,
    services::ServiceFactory,
    state::SessionStore,
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate().context("invalid settings")?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", HealthBuddy::info());

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_translations().await?;

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(&settings)?;
    let store = SessionStore::new();

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    let me = bot.get_me().await.context("failed to reach Telegram")?;
    bot.set_my_commands(Command::bot_commands()).await?;

    let context = HandlerContext::new(&settings, services, i18n, store)
        .with_bot_username(me.username());
    let context_arc = Arc::new(context);
    let logging_middleware = LoggingMiddleware::default();

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![context_arc, logging_middleware])
        .default_handler(|upd| async move {
            debug!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!(username = %me.username(), "HealthBuddy bot is ready, starting polling");
    dispatcher.dispatch().await;

    info!("HealthBuddy bot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message().endpoint(handle_message)
}

/// Hand a message's text to the core and send back the replies
async fn handle_message(
    bot: Bot,
    msg: Message,
    context: Arc<HandlerContext>,
    logging_middleware: LoggingMiddleware,
) -> HandlerResult {
    logging_middleware.log_message(&msg);

    let (Some(user), Some(text)) = (msg.from.as_ref(), msg.text()) else {
        return Ok(());
    };
    let user_id = user.id.0 as i64;

    let tracker = logging_middleware.create_performance_span("handle_text");
    let replies = match handle_text(&context, user_id, text, user.language_code.as_deref()).await {
        Ok(replies) => replies,
        Err(e) => {
            logging_middleware.log_error(&e, "handle_text", Some(user_id));
            if let Some(tracker) = tracker {
                tracker.complete(false);
            }
            if e.is_recoverable() {
                return Ok(());
            }
            return Err(e.into());
        }
    };
    if let Some(tracker) = tracker {
        tracker.complete(true);
    }

    for reply in replies {
        if let Err(e) = bot.send_message(msg.chat.id, reply).await {
            warn!(user_id = user_id, error = %e, "Failed to send reply");
            return Err(e.into());
        }
    }

    Ok(())
}
