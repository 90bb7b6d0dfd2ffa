//! Integration tests for the profile setup dialog

use crate::helpers::{TestContext, WEATHER_PATH};

const TEMPERATURE_FAILED: &str = "Ошибка при получении температуры, норма подсчитана без учета температуры";

#[tokio::test]
async fn test_profile_prompts_in_order() {
    let ctx = TestContext::new().await;

    assert_eq!(ctx.send(600, "/set_profile").await, vec!["Введите ваш вес (в кг):"]);
    assert_eq!(ctx.send(600, "70").await, vec!["Введите ваш рост (в см):"]);
    assert_eq!(ctx.send(600, "175").await, vec!["Сколько вам лет?"]);
    assert_eq!(ctx.send(600, "30").await, vec!["Сколько минут активности у вас в день?"]);
    assert_eq!(ctx.send(600, "60").await, vec!["В каком городе вы находитесь?"]);
}

#[tokio::test]
async fn test_profile_without_temperature() {
    let ctx = TestContext::new().await;

    let replies = ctx.set_default_profile(600).await;

    assert_eq!(
        replies,
        vec![
            TEMPERATURE_FAILED.to_string(),
            "Ваш профиль:\n\
             Вес: 70 кг\n\
             Рост: 175 см\n\
             Возраст: 30 лет\n\
             Активность: 60 минут\n\
             Город: Атлантида\n\
             Целевой уровень калорий: 1944 ккал\n\
             Целевое потребление воды: 3100 мл"
                .to_string(),
        ]
    );

    let session = ctx.session(600).await.unwrap();
    assert_eq!(session.goals.calories, 1943.75);
    assert_eq!(session.goals.water_ml, 3100.0);
    assert_eq!(session.profile.city, "Атлантида");
    assert_eq!(ctx.api_mock.request_count(WEATHER_PATH).await, 1);
}

#[tokio::test]
async fn test_hot_city_raises_water_goal() {
    let ctx = TestContext::new().await;
    ctx.api_mock.mock_temperature("Сочи", 31.5).await;

    let replies = ctx.set_profile(600, "70", "175", "30", "60", "Сочи").await;

    assert_eq!(replies.len(), 1);
    assert!(replies[0].contains("Целевое потребление воды: 3600 мл"));
    assert_eq!(ctx.session(600).await.unwrap().goals.water_ml, 3600.0);
}

#[tokio::test]
async fn test_mild_city_keeps_base_water_goal() {
    let ctx = TestContext::new().await;
    ctx.api_mock.mock_temperature("Москва", 25.0).await;

    let replies = ctx.set_profile(600, "70", "175", "30", "60", "Москва").await;

    assert_eq!(replies.len(), 1);
    assert_eq!(ctx.session(600).await.unwrap().goals.water_ml, 3100.0);
}

#[tokio::test]
async fn test_invalid_answers_reprompt() {
    let ctx = TestContext::new().await;
    ctx.send(600, "/set_profile").await;

    assert_eq!(
        ctx.send(600, "семьдесят").await,
        vec!["Вес должен быть положительным числом.", "Введите ваш вес (в кг):"]
    );
    assert_eq!(ctx.send(600, "70,5").await, vec!["Введите ваш рост (в см):"]);
    assert_eq!(
        ctx.send(600, "-175").await,
        vec!["Рост должен быть положительным числом.", "Введите ваш рост (в см):"]
    );
    ctx.send(600, "175").await;
    assert_eq!(
        ctx.send(600, "30.5").await,
        vec!["Возраст должен быть целым положительным числом.", "Сколько вам лет?"]
    );
    ctx.send(600, "30").await;
    assert_eq!(
        ctx.send(600, "час").await,
        vec![
            "Количество минут активности должно быть целым неотрицательным числом.",
            "Сколько минут активности у вас в день?"
        ]
    );
    ctx.send(600, "0").await;

    ctx.api_mock.mock_temperature("Казань", 10.0).await;
    ctx.send(600, "Казань").await;

    let session = ctx.session(600).await.unwrap();
    assert_eq!(session.profile.weight, 70.5);
    assert_eq!(session.profile.activity_minutes, 0);
    assert_eq!(session.goals.water_ml, 2115.0);
}

#[tokio::test]
async fn test_repeated_setup_keeps_logged_totals() {
    let ctx = TestContext::new().await;
    ctx.set_default_profile(600).await;
    ctx.send(600, "/log_water 500").await;
    ctx.send(600, "/log_workout бег 30").await;

    ctx.set_profile(600, "80", "180", "31", "60", "Атлантида").await;

    let session = ctx.session(600).await.unwrap();
    assert_eq!(session.profile.weight, 80.0);
    assert_eq!(session.goals.water_ml, 3400.0);
    assert_eq!(session.goals.calories, 800.0 + 1125.0 + 155.0);
    assert_eq!(session.logged_water, 500.0);
    assert_eq!(session.burned_calories, 300.0);
}

#[tokio::test]
async fn test_unfinished_setup_creates_no_session() {
    let ctx = TestContext::new().await;
    ctx.send(600, "/set_profile").await;
    ctx.send(600, "70").await;
    ctx.send(600, "175").await;

    assert!(ctx.session(600).await.is_none());
    assert_eq!(ctx.api_mock.request_count(WEATHER_PATH).await, 0);
}
