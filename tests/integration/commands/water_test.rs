//! Integration tests for /log_water

use crate::helpers::TestContext;

const USER_NOT_FOUND: &str = "Пользователь не найден, настройте профиль с помощью команды /set_profile";
const USAGE: &str = "Пожалуйста, укажите количество воды в миллилитрах после команды.\nНапример: /log_water 200";

#[tokio::test]
async fn test_log_water_without_profile() {
    let ctx = TestContext::new().await;

    let replies = ctx.send(200, "/log_water 200").await;

    assert_eq!(replies, vec![USER_NOT_FOUND]);
    assert!(ctx.session(200).await.is_none());
}

#[tokio::test]
async fn test_log_water_usage() {
    let ctx = TestContext::new().await;
    ctx.set_default_profile(200).await;

    for text in [
        "/log_water",
        "/log_water много",
        "/log_water -5",
        "/log_water 0",
        "/log_water 1e308",
        "/log_water 10001",
    ] {
        assert_eq!(ctx.send(200, text).await, vec![USAGE], "for {:?}", text);
    }
    assert_eq!(ctx.session(200).await.unwrap().logged_water, 0.0);
}

#[tokio::test]
async fn test_log_water_reports_remaining() {
    let ctx = TestContext::new().await;
    ctx.set_default_profile(200).await;

    let replies = ctx.send(200, "/log_water 200").await;
    assert_eq!(replies, vec!["Записано потребление воды: 200 мл\nОсталось воды: 2900 мл"]);

    // Shown rounded, stored as given
    let replies = ctx.send(200, "/log_water 250,25").await;
    assert_eq!(replies, vec!["Записано потребление воды: 250 мл\nОсталось воды: 2650 мл"]);

    assert_eq!(ctx.session(200).await.unwrap().logged_water, 450.25);
}

#[tokio::test]
async fn test_log_water_goal_reached() {
    let ctx = TestContext::new().await;
    ctx.set_default_profile(200).await;

    let replies = ctx.send(200, "/log_water 3100").await;
    assert_eq!(
        replies,
        vec!["Записано потребление воды: 3100 мл\nВы достигли целевого уровня потребления воды"]
    );

    // Logging keeps accumulating past the goal
    ctx.send(200, "/log_water 400").await;
    assert_eq!(ctx.session(200).await.unwrap().logged_water, 3500.0);
}

#[tokio::test]
async fn test_log_water_ignores_trailing_words() {
    let ctx = TestContext::new().await;
    ctx.set_default_profile(200).await;

    let replies = ctx.send(200, "/log_water 200 мл").await;

    assert_eq!(replies, vec!["Записано потребление воды: 200 мл\nОсталось воды: 2900 мл"]);
    assert_eq!(ctx.session(200).await.unwrap().logged_water, 200.0);
}
