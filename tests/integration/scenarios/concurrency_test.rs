//! Integration tests for concurrent users

use std::time::Duration;

use futures::future::join_all;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};
use HealthBuddy::handlers::handle_text;

use crate::helpers::{TestContext, NUTRITION_PATH};

#[tokio::test]
async fn test_parallel_logging_for_one_user() {
    let ctx = TestContext::new().await;
    ctx.set_default_profile(800).await;

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let handler = ctx.handler.clone();
            tokio::spawn(async move { handle_text(&handler, 800, "/log_water 10", Some("ru")).await })
        })
        .collect();

    for result in join_all(tasks).await {
        result.expect("task panicked").expect("handler failed");
    }

    assert_eq!(ctx.session(800).await.unwrap().logged_water, 500.0);
}

#[tokio::test]
async fn test_parallel_users_keep_separate_totals() {
    let ctx = TestContext::new().await;
    let users: Vec<i64> = (801..=810).collect();
    for user_id in &users {
        ctx.set_default_profile(*user_id).await;
    }

    let tasks: Vec<_> = users
        .iter()
        .flat_map(|user_id| {
            let user_id = *user_id;
            (0..5).map(move |_| (user_id, format!("/log_water {}", user_id - 800)))
        })
        .map(|(user_id, text)| {
            let handler = ctx.handler.clone();
            tokio::spawn(async move { handle_text(&handler, user_id, &text, Some("ru")).await })
        })
        .collect();

    for result in join_all(tasks).await {
        result.expect("task panicked").expect("handler failed");
    }

    for user_id in users {
        let expected = 5.0 * (user_id - 800) as f64;
        assert_eq!(ctx.session(user_id).await.unwrap().logged_water, expected, "user {}", user_id);
    }
}

#[tokio::test]
async fn test_slow_lookup_does_not_block_other_users() {
    let ctx = TestContext::new().await;
    ctx.set_default_profile(820).await;
    ctx.set_default_profile(821).await;

    Mock::given(method("GET"))
        .and(path(NUTRITION_PATH))
        .and(query_param("search_terms", "борщ"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "products": [{ "nutriments": { "energy-kcal_100g": 49 } }]
                }))
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&ctx.api_mock.server)
        .await;

    let handler = ctx.handler.clone();
    let slow = tokio::spawn(async move { handle_text(&handler, 820, "/log_food борщ", Some("ru")).await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let replies = tokio::time::timeout(Duration::from_millis(1000), ctx.send(821, "/log_water 300"))
        .await
        .expect("user 821 waited for user 820's lookup");
    assert_eq!(replies, vec!["Записано потребление воды: 300 мл\nОсталось воды: 2800 мл"]);

    let replies = slow.await.unwrap().unwrap();
    assert_eq!(replies, vec!["борщ - 49 ккал на 100 г. Сколько грамм вы съели?"]);
}

#[tokio::test]
async fn test_same_user_waits_for_running_lookup() {
    let ctx = TestContext::new().await;
    ctx.set_default_profile(830).await;

    Mock::given(method("GET"))
        .and(path(NUTRITION_PATH))
        .and(query_param("search_terms", "каша"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "products": [{ "nutriments": { "energy-kcal_100g": 100 } }]
                }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&ctx.api_mock.server)
        .await;

    let handler = ctx.handler.clone();
    let food = tokio::spawn(async move { handle_text(&handler, 830, "/log_food каша", Some("ru")).await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Handled only after the food dialog has started, so it is the quantity
    let replies = ctx.send(830, "200").await;
    assert_eq!(replies, vec!["Записано: 200 ккал"]);

    food.await.unwrap().unwrap();
    assert_eq!(ctx.session(830).await.unwrap().logged_food, 200.0);
}
