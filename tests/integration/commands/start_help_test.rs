//! Integration tests for /start and /help

use crate::helpers::TestContext;

#[tokio::test]
async fn test_start_command() {
    let ctx = TestContext::new().await;

    let replies = ctx.send(100, "/start").await;

    assert_eq!(
        replies,
        vec!["Добро пожаловать! Это бот для трекинга вашего здоровья.\nВведите /help для списка команд."]
    );
}

#[tokio::test]
async fn test_help_lists_every_command() {
    let ctx = TestContext::new().await;

    let replies = ctx.send(100, "/help").await;

    assert_eq!(replies.len(), 1);
    for command in ["/start", "/set_profile", "/log_water", "/log_food", "/log_workout", "/check_progress", "/cancel"] {
        assert!(replies[0].contains(command), "help text misses {}", command);
    }
}

#[tokio::test]
async fn test_english_user_gets_english_replies() {
    let ctx = TestContext::new().await;

    let replies = ctx.send_with_language(100, "/start", Some("en-US")).await;
    assert_eq!(replies, vec!["Welcome! This bot tracks your health.\nType /help for the list of commands."]);

    // Unsupported languages fall back to Russian
    let replies = ctx.send_with_language(100, "/start", Some("de")).await;
    assert!(replies[0].starts_with("Добро пожаловать!"));
}

#[tokio::test]
async fn test_plain_text_without_dialog() {
    let ctx = TestContext::new().await;

    let hint = "Я понимаю только команды. Введите /help для списка команд.";
    assert_eq!(ctx.send(100, "привет").await, vec![hint]);
    assert_eq!(ctx.send(100, "/unknown_command").await, vec![hint]);
}

#[tokio::test]
async fn test_command_addressed_to_this_bot() {
    let ctx = TestContext::new().await;

    let replies = ctx.send(100, "/start@healthbuddy_test_bot").await;
    assert!(replies[0].starts_with("Добро пожаловать!"));
}
